//! Structured tracing for OLS requests.
//!
//! Every request runs inside an `ols.request` span. Request/response
//! diagnostics for verbose calls go through a [`RequestObserver`], which the
//! client receives at construction instead of consulting a global flag.

mod observer;
mod spans;

pub use observer::{NoopObserver, RequestObserver, TracingObserver};
pub use spans::RequestSpan;
