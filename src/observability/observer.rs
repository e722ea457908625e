//! Verbose request/response reporting.

/// Receives diagnostics for requests issued with `verbose` set.
///
/// Observers see the data but cannot change what the call returns.
pub trait RequestObserver: Send + Sync {
    fn on_request(&self, operation: &str, url: &str);

    fn on_response(&self, operation: &str, status: u16, body: &str);
}

/// Longest response body excerpt written to the log.
const BODY_PREVIEW_CHARS: usize = 2_000;

/// Default observer: writes `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_request(&self, operation: &str, url: &str) {
        tracing::info!(operation, url, "OLS request");
    }

    fn on_response(&self, operation: &str, status: u16, body: &str) {
        tracing::info!(operation, status, bytes = body.len(), "OLS response");
        tracing::debug!(operation, body = %preview(body), "OLS response body");
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RequestObserver for NoopObserver {
    fn on_request(&self, _operation: &str, _url: &str) {}

    fn on_response(&self, _operation: &str, _status: u16, _body: &str) {}
}

fn preview(body: &str) -> std::borrow::Cow<'_, str> {
    match body.char_indices().nth(BODY_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}... [{} bytes total]", &body[..cut], body.len()).into(),
        None => body.into(),
    }
}
