use crate::api::health::{CHECKING, UNAVAILABLE};
use crate::api::ApiError;
use crate::upload::{failure_detail, SelectedFile, UploadPhase};
use derivative::Derivative;
use std::sync::mpsc::{Receiver, TryRecvError};

pub const SELECT_FILE_PROMPT: &str = "Please select a file first.";
pub const UPLOADING_TEXT: &str = "Uploading...";
pub const UPLOAD_SUCCESS_TEXT: &str = "✅ File uploaded successfully!";
pub const UPLOAD_FAILURE_PREFIX: &str = "❌ Upload failed: ";

const TASK_LOST: &str = "background task ended without a result";

/// Take the result off `receiver` if it has arrived.
///
/// A disconnected channel means the task died; that is reported as a
/// network failure so the flow still settles.
fn poll_receiver<T>(receiver: &Receiver<Result<T, ApiError>>) -> Option<Result<T, ApiError>> {
    match receiver.try_recv() {
        Ok(result) => Some(result),
        Err(TryRecvError::Empty) => None,
        Err(TryRecvError::Disconnected) => Some(Err(ApiError::Network(TASK_LOST.to_string()))),
    }
}

/// Backend status shown in the footer.
#[derive(Derivative)]
#[derivative(Debug, Default)]
pub struct HealthState {
    #[derivative(Default(value = "CHECKING.to_string()"))]
    pub api_status: String,
    pub error: Option<String>,
    started: bool,
    #[derivative(Debug = "ignore")]
    receiver: Option<Receiver<Result<String, ApiError>>>,
}

impl HealthState {
    /// Claim the single check allowed per launch.
    pub fn begin(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    pub fn attach(&mut self, receiver: Receiver<Result<String, ApiError>>) {
        self.receiver = Some(receiver);
    }

    pub fn is_pending(&self) -> bool {
        self.receiver.is_some()
    }

    /// Returns true when the check settled during this call.
    pub fn poll(&mut self) -> bool {
        let Some(result) = self.receiver.as_ref().and_then(poll_receiver) else {
            return false;
        };
        self.receiver = None;
        self.settle(result);
        true
    }

    pub fn settle(&mut self, result: Result<String, ApiError>) {
        match result {
            Ok(status) => {
                log::info!("Backend status: {}", status);
                self.api_status = status;
                self.error = None;
            }
            Err(e) => {
                log::warn!("Health check failed: {}", e);
                self.api_status = UNAVAILABLE.to_string();
                self.error = Some(e.to_string());
            }
        }
    }
}

/// Single-file upload flow: Idle, InFlight, Settled.
#[derive(Derivative)]
#[derivative(Debug, Default)]
pub struct UploadState {
    pub selected: Option<SelectedFile>,
    pub status: String,
    pub phase: UploadPhase,
    /// Status text reports a file that could not be selected
    selection_error: bool,
    #[derivative(Debug = "ignore")]
    receiver: Option<Receiver<Result<(), ApiError>>>,
}

impl UploadState {
    pub fn is_uploading(&self) -> bool {
        self.phase == UploadPhase::InFlight
    }

    pub fn can_submit(&self) -> bool {
        !self.is_uploading()
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_uploading() {
            UPLOADING_TEXT
        } else {
            "Upload"
        }
    }

    /// Status text should read as a failure.
    pub fn status_is_failure(&self) -> bool {
        self.selection_error || self.phase == UploadPhase::Settled { succeeded: false }
    }

    pub fn status_is_success(&self) -> bool {
        !self.selection_error && self.phase == UploadPhase::Settled { succeeded: true }
    }

    /// Picking a file leaves an in-flight upload alone; otherwise the flow is idle again.
    fn reset_to_idle(&mut self) {
        if !self.is_uploading() {
            self.phase = UploadPhase::Idle;
        }
    }

    /// Replace the selection and clear any previous outcome text.
    pub fn select_file(&mut self, file: SelectedFile) {
        log::info!("Selected {} ({} bytes)", file.name, file.size);
        self.selected = Some(file);
        self.status.clear();
        self.selection_error = false;
        self.reset_to_idle();
    }

    pub fn selection_failed(&mut self, reason: &str) {
        log::warn!("Could not use selected file: {}", reason);
        self.status = format!("Could not read file: {}", reason);
        self.selection_error = true;
        self.reset_to_idle();
    }

    /// Move to InFlight if a file is selected, returning it for sending.
    ///
    /// Without a file the status asks for one and nothing is returned.
    pub fn begin(&mut self) -> Option<SelectedFile> {
        if self.is_uploading() {
            log::debug!("Upload already in flight, ignoring submit");
            return None;
        }
        let Some(file) = self.selected.clone() else {
            self.status = SELECT_FILE_PROMPT.to_string();
            return None;
        };
        self.phase = UploadPhase::InFlight;
        self.status = UPLOADING_TEXT.to_string();
        self.selection_error = false;
        Some(file)
    }

    pub fn attach(&mut self, receiver: Receiver<Result<(), ApiError>>) {
        self.receiver = Some(receiver);
    }

    /// Returns true when the upload settled during this call.
    pub fn poll(&mut self) -> bool {
        let Some(result) = self.receiver.as_ref().and_then(poll_receiver) else {
            return false;
        };
        self.receiver = None;
        self.settle(result);
        true
    }

    pub fn settle(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.status = UPLOAD_SUCCESS_TEXT.to_string();
                self.phase = UploadPhase::Settled { succeeded: true };
            }
            Err(e) => {
                log::error!("Upload failed: {}", e);
                self.status = format!("{}{}", UPLOAD_FAILURE_PREFIX, failure_detail(&e));
                self.phase = UploadPhase::Settled { succeeded: false };
            }
        }
    }
}
