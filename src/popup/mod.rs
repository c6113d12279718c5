//! YouTube popup: resolve a video URL from input or the active tab,
//! enrich it with a title, and summarize.

mod controller;
mod surface;

pub use controller::{PopupController, STATUS_FETCHING, STATUS_SUMMARIZING};
pub use surface::{PopupDisplay, PopupSurface};
