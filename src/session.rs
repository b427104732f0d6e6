//! The headless uploader component.

use std::cell::RefCell;
use std::rc::Rc;

use crate::file::SelectedFile;
use crate::response::LastResponse;
use crate::state::{UploadAction, UploaderState};
use crate::uploader::Uploader;
use crate::view::View;

/// File picker + upload trigger + response display, without a DOM.
///
/// Cloning gives another handle on the same state, the same way a UI
/// framework hands the same component state to several callbacks.
#[derive(Clone)]
pub struct FileUploader {
    state: Rc<RefCell<UploaderState>>,
    uploader: Rc<dyn Uploader>,
}

impl FileUploader {
    pub fn new(uploader: Rc<dyn Uploader>) -> Self {
        Self {
            state: Rc::new(RefCell::new(UploaderState::new())),
            uploader,
        }
    }

    /// The picker changed: keep the first file, or nothing.
    pub fn on_file_change<I>(&self, files: I)
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        self.state
            .borrow_mut()
            .apply(UploadAction::select_first(files));
    }

    /// The upload trigger was pressed.
    ///
    /// The payload is taken from the selection at call time. The returned
    /// future performs exactly one request and records its outcome when it
    /// settles; several may be in flight, and the last to settle wins.
    pub fn on_upload_click(&self) -> impl Future<Output = ()> + use<> {
        let form = self.state.borrow().upload_form();
        let state = Rc::clone(&self.state);
        let uploader = Rc::clone(&self.uploader);
        async move {
            let outcome = uploader.send(form).await;
            state.borrow_mut().apply(UploadAction::Settled(outcome));
        }
    }

    pub fn selected(&self) -> Option<SelectedFile> {
        self.state.borrow().selected().cloned()
    }

    pub fn last_response(&self) -> Option<LastResponse> {
        self.state.borrow().last_response().cloned()
    }

    /// Read the full state, including the unrendered failure slot.
    pub fn with_state<R>(&self, f: impl FnOnce(&UploaderState) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn render(&self) -> View {
        self.state.borrow().view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UploadError;
    use crate::form::{FilePart, UploadForm};
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::{LocalPool, block_on};
    use futures::task::LocalSpawnExt;
    use serde_json::{Value, json};
    use std::collections::HashMap;

    /// Records every payload and answers with a fixed reply.
    struct RecordingUploader {
        sent: RefCell<Vec<UploadForm>>,
        reply: Value,
    }

    impl RecordingUploader {
        fn new(reply: Value) -> Rc<Self> {
            Rc::new(Self {
                sent: RefCell::new(Vec::new()),
                reply,
            })
        }
    }

    #[async_trait(?Send)]
    impl Uploader for RecordingUploader {
        async fn send(&self, form: UploadForm) -> Result<Value, UploadError> {
            self.sent.borrow_mut().push(form);
            Ok(self.reply.clone())
        }
    }

    struct RejectingUploader;

    #[async_trait(?Send)]
    impl Uploader for RejectingUploader {
        async fn send(&self, _form: UploadForm) -> Result<Value, UploadError> {
            Err(UploadError::Status { status: 400 })
        }
    }

    /// Holds each request open until the test releases it, keyed by file name.
    struct GatedUploader {
        gates: RefCell<HashMap<String, oneshot::Receiver<Value>>>,
    }

    #[async_trait(?Send)]
    impl Uploader for GatedUploader {
        async fn send(&self, form: UploadForm) -> Result<Value, UploadError> {
            let name = form.file().map(|f| f.name().to_string()).unwrap_or_default();
            let gate = self.gates.borrow_mut().remove(&name);
            match gate {
                Some(rx) => Ok(rx.await.unwrap_or(Value::Null)),
                None => Err(UploadError::Status { status: 404 }),
            }
        }
    }

    fn file(name: &str) -> SelectedFile {
        SelectedFile::new(name, format!("contents of {name}").into_bytes())
    }

    #[test]
    fn test_selected_file_is_stored() {
        let uploader = FileUploader::new(RecordingUploader::new(json!({})));
        uploader.on_file_change([file("resume.pdf")]);
        assert_eq!(uploader.selected(), Some(file("resume.pdf")));
    }

    #[test]
    fn test_second_selection_replaces_first() {
        let uploader = FileUploader::new(RecordingUploader::new(json!({})));
        uploader.on_file_change([file("a.pdf")]);
        uploader.on_file_change([file("b.pdf")]);
        assert_eq!(uploader.selected(), Some(file("b.pdf")));
    }

    #[test]
    fn test_upload_without_file_sends_one_empty_field() {
        let stub = RecordingUploader::new(json!({"error": "No file provided"}));
        let uploader = FileUploader::new(stub.clone());

        block_on(uploader.on_upload_click());

        let sent = stub.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].field_name(), "file");
        assert_eq!(sent[0].part(), &FilePart::Empty);
    }

    #[test]
    fn test_upload_sends_selected_file() {
        let stub = RecordingUploader::new(json!({}));
        let uploader = FileUploader::new(stub.clone());
        uploader.on_file_change([file("cv.pdf")]);

        block_on(uploader.on_upload_click());

        assert_eq!(stub.sent.borrow()[0].file(), Some(&file("cv.pdf")));
    }

    #[test]
    fn test_successful_upload_is_rendered() {
        let uploader = FileUploader::new(RecordingUploader::new(json!({"status": "ok"})));
        uploader.on_file_change([file("cv.pdf")]);

        assert_eq!(uploader.render().response_dump, None);
        block_on(uploader.on_upload_click());

        let dump = uploader.render().response_dump.unwrap();
        assert!(dump.contains("{\n  \"status\": \"ok\"\n}"));
    }

    #[test]
    fn test_rejected_upload_is_silent() {
        let uploader = FileUploader::new(Rc::new(RejectingUploader));
        uploader.on_file_change([file("cv.pdf")]);

        block_on(uploader.on_upload_click());

        assert!(uploader.last_response().is_none());
        assert_eq!(uploader.render().response_dump, None);
        assert_eq!(uploader.with_state(|s| s.last_failure().and_then(|e| e.status())), Some(400));
    }

    #[test]
    fn test_payload_is_captured_at_click() {
        let stub = RecordingUploader::new(json!({}));
        let uploader = FileUploader::new(stub.clone());
        uploader.on_file_change([file("a.pdf")]);

        let pending = uploader.on_upload_click();
        uploader.on_file_change([file("b.pdf")]);
        block_on(pending);

        assert_eq!(stub.sent.borrow()[0].file().map(|f| f.name()), Some("a.pdf"));
    }

    #[test]
    fn test_last_to_settle_wins() {
        let (tx_first, rx_first) = oneshot::channel();
        let (tx_second, rx_second) = oneshot::channel();
        let stub = Rc::new(GatedUploader {
            gates: RefCell::new(HashMap::from([
                ("first.pdf".to_string(), rx_first),
                ("second.pdf".to_string(), rx_second),
            ])),
        });
        let uploader = FileUploader::new(stub);
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        uploader.on_file_change([file("first.pdf")]);
        spawner.spawn_local(uploader.on_upload_click()).unwrap();
        uploader.on_file_change([file("second.pdf")]);
        spawner.spawn_local(uploader.on_upload_click()).unwrap();
        pool.run_until_stalled();
        assert!(uploader.last_response().is_none());

        // The second request settles first, then the first one.
        tx_second.send(json!({"upload": 2})).unwrap();
        pool.run_until_stalled();
        assert_eq!(uploader.last_response().map(|r| r.into_value()), Some(json!({"upload": 2})));

        tx_first.send(json!({"upload": 1})).unwrap();
        pool.run_until_stalled();
        assert_eq!(uploader.last_response().map(|r| r.into_value()), Some(json!({"upload": 1})));
    }
}
