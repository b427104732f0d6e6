//! Component state and the reducer that mutates it.
//!
//! Every change to the uploader's state goes through [`UploaderState::apply`],
//! whether it comes from the headless [`FileUploader`](crate::FileUploader)
//! or from the browser component's reducer hook.

use std::rc::Rc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::UploadError;
use crate::file::SelectedFile;
use crate::form::UploadForm;
use crate::response::LastResponse;
use crate::view::View;

/// Something that happened to the uploader.
#[derive(Debug)]
pub enum UploadAction {
    /// The file picker changed. `None` means the selection was empty.
    Select(Option<SelectedFile>),
    /// An upload request settled.
    Settled(Result<Value, UploadError>),
}

impl UploadAction {
    /// Build a `Select` from a picker's file list, keeping only the first.
    pub fn select_first<I>(files: I) -> Self
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        UploadAction::Select(files.into_iter().next())
    }
}

/// The selected file, the last response and the last failure.
#[derive(Debug, Clone, Default)]
pub struct UploaderState {
    selected: Option<SelectedFile>,
    last_response: Option<LastResponse>,
    last_failure: Option<Rc<UploadError>>,
}

impl UploaderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn last_response(&self) -> Option<&LastResponse> {
        self.last_response.as_ref()
    }

    /// The most recent failure. Recorded for callers that care; never rendered.
    pub fn last_failure(&self) -> Option<&UploadError> {
        self.last_failure.as_deref()
    }

    /// Payload for an upload of whatever is selected right now.
    pub fn upload_form(&self) -> UploadForm {
        UploadForm::new(self.selected.clone())
    }

    pub fn apply(&mut self, action: UploadAction) {
        match action {
            UploadAction::Select(file) => {
                debug!(file = ?file, "file selection changed");
                self.selected = file;
            }
            UploadAction::Settled(Ok(value)) => {
                debug!("upload settled");
                self.last_response = Some(LastResponse::new(value));
                self.last_failure = None;
            }
            UploadAction::Settled(Err(err)) => {
                warn!(error = %err, "upload failed");
                self.last_failure = Some(Rc::new(err));
            }
        }
    }

    pub fn view(&self) -> View {
        View::of(self)
    }
}
