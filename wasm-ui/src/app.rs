//! Main application component.

use resume_upload::HttpUploader;
use yew::prelude::*;

use crate::components::{UploadWidget, UploaderHandle};

/// Mounts the upload widget against the default endpoint.
#[function_component(App)]
pub fn app() -> Html {
    let uploader = use_state(|| UploaderHandle::new(HttpUploader::default()));

    html! {
        <main class="app">
            <UploadWidget uploader={(*uploader).clone()} />
        </main>
    }
}
