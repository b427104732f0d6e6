//! Turning a browser `File` into a [`SelectedFile`].

use gloo::console;
use gloo::file::{File, FileReadError};
use resume_upload::{SelectedFile, UploadForm};

/// Read the picked file's bytes, keeping its name and browser-reported type.
pub async fn read_selected(file: web_sys::File) -> Result<SelectedFile, FileReadError> {
    let file = File::from(file);
    let bytes = gloo::file::futures::read_as_bytes(&file).await?;
    Ok(SelectedFile::new(file.name(), bytes).with_mime(file.raw_mime_type()))
}

/// Payload for the file handle that was picked when Upload was pressed.
///
/// A file that cannot be read goes out as an empty field; the request is
/// still made.
pub async fn upload_form_for(file: Option<web_sys::File>) -> UploadForm {
    let Some(file) = file else {
        return UploadForm::new(None);
    };
    match read_selected(file).await {
        Ok(selected) => UploadForm::new(Some(selected)),
        Err(e) => {
            console::error!(format!("could not read file: {e}"));
            UploadForm::new(None)
        }
    }
}

/// The picker's current file, held as the browser handle so it is up to date
/// the moment the picker changes. Reading bytes is asynchronous; the
/// generation tells a finished read whether a newer pick has replaced it.
#[derive(Debug, Default)]
pub struct PickedFile {
    generation: u64,
    file: Option<web_sys::File>,
}

impl PickedFile {
    /// Record a new pick and return its generation.
    pub fn pick(&mut self, file: Option<web_sys::File>) -> u64 {
        self.generation += 1;
        self.file = file;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn file(&self) -> Option<web_sys::File> {
        self.file.clone()
    }
}
