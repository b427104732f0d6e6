//! The upload widget component.

use std::rc::Rc;

use gloo::console;
use resume_upload::{UploadAction, Uploader, UploaderState};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::file_input::{PickedFile, read_selected, upload_form_for};

/// Shared handle on the upload collaborator, comparable by identity so it
/// can travel through component props.
#[derive(Clone)]
pub struct UploaderHandle(Rc<dyn Uploader>);

impl UploaderHandle {
    pub fn new(uploader: impl Uploader + 'static) -> Self {
        Self(Rc::new(uploader))
    }
}

impl PartialEq for UploaderHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Reducer wrapper so the shared state machine can drive `use_reducer`.
#[derive(Clone, Default)]
pub struct UploadStore(UploaderState);

impl UploadStore {
    pub fn state(&self) -> &UploaderState {
        &self.0
    }
}

impl Reducible for UploadStore {
    type Action = UploadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = Rc::unwrap_or_clone(self);
        next.0.apply(action);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct UploadWidgetProps {
    pub uploader: UploaderHandle,
}

/// File picker, Upload button, and a `<pre>` dump of the last reply.
#[function_component(UploadWidget)]
pub fn upload_widget(props: &UploadWidgetProps) -> Html {
    let store = use_reducer(UploadStore::default);
    let picked = use_mut_ref(PickedFile::default);

    let on_file_change = {
        let dispatcher = store.dispatcher();
        let picked = picked.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let first = input.files().and_then(|files| files.get(0));
            let generation = picked.borrow_mut().pick(first.clone());
            match first {
                None => dispatcher.dispatch(UploadAction::Select(None)),
                Some(file) => {
                    let dispatcher = dispatcher.clone();
                    let picked = picked.clone();
                    spawn_local(async move {
                        match read_selected(file).await {
                            // A newer pick owns the slot now.
                            Ok(_) if !picked.borrow().is_current(generation) => {}
                            Ok(selected) => {
                                dispatcher.dispatch(UploadAction::Select(Some(selected)))
                            }
                            Err(e) => {
                                console::error!(format!("could not read file: {e}"));
                            }
                        }
                    });
                }
            }
        })
    };

    let on_upload_click = {
        let dispatcher = store.dispatcher();
        let picked = picked.clone();
        let uploader = props.uploader.clone();
        Callback::from(move |_: MouseEvent| {
            let file = picked.borrow().file();
            let dispatcher = dispatcher.clone();
            let uploader = Rc::clone(&uploader.0);
            spawn_local(async move {
                let form = upload_form_for(file).await;
                let outcome = uploader.send(form).await;
                if let Err(e) = &outcome {
                    console::error!(format!("upload failed: {e}"));
                }
                dispatcher.dispatch(UploadAction::Settled(outcome));
            });
        })
    };

    let view = store.state().view();

    html! {
        <div class="upload-widget">
            <input type="file" onchange={on_file_change} />
            <button onclick={on_upload_click}>{ "Upload" }</button>
            if let Some(dump) = view.response_dump {
                <pre>{ dump }</pre>
            }
        </div>
    }
}
