//! Upload progress reporting for multipart PDF bodies.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;

/// Receives the upload percentage (0–100) while a PDF is being sent.
pub type ProgressCallback = Arc<dyn Fn(u8) + Send + Sync>;

/// Bytes handed to the transport per poll.
const CHUNK_SIZE: usize = 64 * 1024;

/// `round(sent / total * 100)`, or `None` when the total is unknown.
pub fn upload_percent(sent: u64, total: u64) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let pct = (sent as f64 / total as f64 * 100.0).round();
    Some(pct.clamp(0.0, 100.0) as u8)
}

/// Body stream that yields the file in chunks and reports how much has been
/// handed to the transport.
pub struct ProgressStream {
    data: Vec<u8>,
    offset: usize,
    on_progress: Option<ProgressCallback>,
    last_reported: Option<u8>,
}

impl ProgressStream {
    pub fn new(data: Vec<u8>, on_progress: Option<ProgressCallback>) -> Self {
        Self {
            data,
            offset: 0,
            on_progress,
            last_reported: None,
        }
    }

    pub fn total(&self) -> u64 {
        self.data.len() as u64
    }

    fn report(&mut self) {
        let Some(callback) = &self.on_progress else {
            return;
        };
        let Some(pct) = upload_percent(self.offset as u64, self.total()) else {
            return;
        };
        // Only emit on change.
        if self.last_reported != Some(pct) {
            self.last_reported = Some(pct);
            callback(pct);
        }
    }
}

impl Stream for ProgressStream {
    type Item = Result<Vec<u8>, std::io::Error>;

    fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.offset >= self.data.len() {
            return Poll::Ready(None);
        }

        let end = (self.offset + CHUNK_SIZE).min(self.data.len());
        let chunk = self.data[self.offset..end].to_vec();
        self.offset = end;
        self.report();

        Poll::Ready(Some(Ok(chunk)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len().saturating_sub(self.offset);
        let chunks = remaining.div_ceil(CHUNK_SIZE);
        (chunks, Some(chunks))
    }
}
