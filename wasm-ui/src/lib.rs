//! Web UI for resume-upload
//!
//! A Yew-based browser widget: pick a file, press Upload, see the JSON the
//! endpoint sent back.

mod app;
mod components;
mod file_input;

pub use components::{UploadStore, UploadWidget, UploadWidgetProps, UploaderHandle};
pub use file_input::read_selected;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}
