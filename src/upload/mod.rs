mod types;
mod uploader;

pub use types::{SelectedFile, UploadPhase};
pub use uploader::{failure_detail, upload_file};
