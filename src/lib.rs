//! # resume-upload
//!
//! A single-purpose file uploader: pick a local file, POST it as
//! `multipart/form-data` to an upload endpoint, and show whatever JSON the
//! endpoint sends back.
//!
//! ## Overview
//!
//! The component has two affordances and two pieces of state:
//! - **File picker**: stores the first selected file (the *selected file*)
//! - **Upload trigger**: sends one request with a single `file` part
//! - **Last response**: the JSON body of the most recent successful upload,
//!   rendered pretty-printed when present
//!
//! The network sits behind the [`Uploader`] trait so front ends and tests can
//! swap in their own collaborator.
//!
//! ## Example
//!
//! ```no_run
//! use std::rc::Rc;
//! use resume_upload::{FileUploader, HttpUploader, SelectedFile};
//!
//! # async fn demo() {
//! let uploader = FileUploader::new(Rc::new(HttpUploader::default()));
//!
//! uploader.on_file_change([SelectedFile::new("resume.pdf", b"%PDF-1.7".to_vec())]);
//! uploader.on_upload_click().await;
//!
//! if let Some(dump) = uploader.render().response_dump {
//!     println!("{dump}");
//! }
//! # }
//! ```

pub mod error;
pub mod file;
pub mod form;
pub mod response;
pub mod session;
pub mod state;
pub mod uploader;
pub mod view;

pub use error::UploadError;
pub use file::SelectedFile;
pub use form::{FILE_FIELD, FilePart, UploadForm};
pub use response::LastResponse;
pub use session::FileUploader;
pub use state::{UploadAction, UploaderState};
pub use uploader::{DEFAULT_ENDPOINT, HttpUploader, Uploader};
pub use view::View;
