//! What the component shows.

use crate::state::UploaderState;

/// The variable part of the render.
///
/// Front ends always draw the file picker and the upload trigger; what
/// changes is the response dump, present only when a response exists.
/// Failures are not part of the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Pretty-printed JSON of the last response.
    pub response_dump: Option<String>,
}

impl View {
    pub fn of(state: &UploaderState) -> Self {
        Self {
            response_dump: state.last_response().map(|r| r.pretty()),
        }
    }
}
