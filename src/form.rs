//! The multipart payload sent on upload.

use mime::Mime;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::error::UploadError;
use crate::file::SelectedFile;

/// Name of the single form field carrying the file.
pub const FILE_FIELD: &str = "file";

/// What the `file` field is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilePart {
    /// A file was selected: sent as a file part with its name and bytes.
    Attached(SelectedFile),
    /// Nothing was selected: the field is still sent, as an empty text value.
    Empty,
}

/// A one-field `multipart/form-data` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadForm {
    part: FilePart,
}

impl UploadForm {
    /// Bind the `file` field to `file`, which may be absent.
    pub fn new(file: Option<SelectedFile>) -> Self {
        let part = match file {
            Some(file) => FilePart::Attached(file),
            None => FilePart::Empty,
        };
        Self { part }
    }

    pub fn field_name(&self) -> &'static str {
        FILE_FIELD
    }

    pub fn part(&self) -> &FilePart {
        &self.part
    }

    /// The attached file, if any.
    pub fn file(&self) -> Option<&SelectedFile> {
        match &self.part {
            FilePart::Attached(file) => Some(file),
            FilePart::Empty => None,
        }
    }

    /// Encode as a reqwest multipart form.
    ///
    /// A MIME type that does not parse is left off the part rather than
    /// blocking the upload; the file name and bytes are always sent.
    pub fn into_multipart(self) -> Result<Form, UploadError> {
        let form = Form::new();
        match self.part {
            FilePart::Empty => Ok(form.text(FILE_FIELD, "")),
            FilePart::Attached(file) => {
                let (name, mime, bytes) = file.into_parts();
                let declared = mime.and_then(|raw| match raw.parse::<Mime>() {
                    Ok(parsed) => Some(parsed),
                    Err(_) => {
                        debug!(file = %name, mime = %raw, "dropping unparseable MIME type");
                        None
                    }
                });
                let part = Part::bytes(bytes).file_name(name);
                let part = match declared {
                    Some(mime) => part.mime_str(mime.as_ref()).map_err(UploadError::Transport)?,
                    None => part,
                };
                Ok(form.part(FILE_FIELD, part))
            }
        }
    }
}
