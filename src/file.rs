//! The file blob chosen by the user.

use std::fmt;

/// A single file held in memory, not yet uploaded.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    mime: Option<String>,
    bytes: Vec<u8>,
}

impl SelectedFile {
    /// Create a file with no declared MIME type.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: None,
            bytes,
        }
    }

    /// Attach a MIME type. Empty strings are treated as "unknown", which is
    /// what browsers report for files they cannot classify.
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        let mime = mime.into();
        self.mime = if mime.is_empty() { None } else { Some(mime) };
        self
    }

    /// Read a file from disk, guessing its MIME type from the extension.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn read_from(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file = Self::new(name, bytes);
        Ok(match mime_guess::from_path(path).first_raw() {
            Some(mime) => file.with_mime(mime),
            None => file,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> Option<&str> {
        self.mime.as_deref()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Split into `(name, mime, bytes)`.
    pub fn into_parts(self) -> (String, Option<String>, Vec<u8>) {
        (self.name, self.mime, self.bytes)
    }
}

// File contents can be large and binary; keep them out of debug output.
impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}
