//! Multi-mode summarization form (MVI).

mod controller;
mod file;
mod intent;
mod reducer;
mod state;

pub use controller::{FormController, COPIED_NOTICE, NOTHING_TO_COPY};
pub use file::{inspect_pdf, FileSelectError};
pub use intent::FormIntent;
pub use reducer::{FormReducer, INVALID_INPUT_WARNING};
pub use state::{validate, FormState, Notice, RequestPhase};
