//! Summarization backend contract: request types, transport, and the
//! response classification both controllers share.

mod client;
mod error;
mod progress;
mod result;
mod types;

pub use client::SummaryClient;
pub use error::ApiError;
pub use progress::{upload_percent, ProgressCallback, ProgressStream};
pub use result::{classify, MoodInterval, StatusMarker, SummaryResult};
pub use types::{InputMode, PdfFile, SummaryRequest, MAX_PDF_BYTES};
