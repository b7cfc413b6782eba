use super::SelectedFile;
use crate::api::{ApiError, ApiRequest, BackendClient};
use std::path::Path;

pub const UPLOAD_PATH: &str = "/api/upload";

/// Multipart field the backend reads the file from.
pub const UPLOAD_FIELD: &str = "file";

/// Read the selected file and post it as a single multipart part.
///
/// Succeeds on any 2xx answer. The response body is not inspected on success.
pub async fn upload_file(client: &dyn BackendClient, file: &SelectedFile) -> Result<(), ApiError> {
    let bytes = tokio::fs::read(&file.path).await.map_err(|source| ApiError::Io {
        path: file.path.clone(),
        source,
    })?;

    log::info!("Uploading {} ({} bytes)", file.name, bytes.len());

    let request = ApiRequest::Multipart {
        path: UPLOAD_PATH.to_string(),
        field: UPLOAD_FIELD.to_string(),
        file_name: file.name.clone(),
        mime: guess_mime(&file.path),
        bytes,
    };

    let response = client.send(request).await?;
    if response.is_success() {
        log::info!("Upload of {} accepted with status {}", file.name, response.status);
        Ok(())
    } else {
        Err(ApiError::Status {
            status: response.status,
            body: response.body,
        })
    }
}

/// Text shown after "Upload failed: ".
///
/// The backend's own explanation wins when it sent one.
pub fn failure_detail(err: &ApiError) -> String {
    match err {
        ApiError::Status { body, .. } if !body.is_empty() => body.clone(),
        ApiError::Status { status, .. } => format!("Upload failed with status {}", status),
        other => other.to_string(),
    }
}

fn guess_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "tif" | "tiff" => Some("image/tiff"),
        "heic" => Some("image/heic"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}
