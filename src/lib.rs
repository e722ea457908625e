//! # ols-tools
//!
//! Agent tools for the EMBL-EBI [Ontology Lookup Service](https://www.ebi.ac.uk/ols4/).
//!
//! The crate wraps four OLS endpoints (full-text search, ontology metadata,
//! term listing and embedding-based similar terms) and reshapes every JSON
//! response into a small record with a fixed key set.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ols_tools::{OlsClient, tools};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ols_tools::Error> {
//!     let client = OlsClient::new()?;
//!     let results = tools::search_all_ontologies(&client, "apoptosis", Some("go"), 5, false).await?;
//!     for result in results {
//!         println!("{:?} {:?}", result.obo_id, result.label);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Tool Registry
//!
//! ```rust,no_run
//! use ols_tools::{OlsClient, ToolAccess, ToolRegistry};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), ols_tools::Error> {
//! let registry = ToolRegistry::ols(OlsClient::new()?, &ToolAccess::all());
//! let result = registry
//!     .execute("get_ontology_info", json!({"ontology_id": "uberon"}))
//!     .await;
//! println!("{}", result.text());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod client;
pub mod config;
pub mod observability;
pub mod prelude;
pub mod tools;
pub mod types;

// Re-exports for convenience
pub use client::{
    DEFAULT_BASE_URL, DEFAULT_MAX_RESULTS, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT, OlsClient,
    OlsClientBuilder, OlsConfig, OntologyRequest, SearchRequest, SimilarTermsRequest,
    TermsRequest, double_encode,
};
pub use config::{ConfigProvider, EnvConfigProvider, MemoryConfigProvider};
pub use observability::{NoopObserver, RequestObserver, TracingObserver};
pub use tools::{
    GetOntologyInfoTool, GetSimilarOntologyTermsTool, GetTermsFromOntologyTool, SchemaTool,
    SearchAllOntologiesTool, Tool, ToolAccess, ToolRegistry,
};
pub use types::{
    OntologyDetails, OntologyTerm, SearchResult, SimilarTerm, ToolDefinition, ToolError,
    ToolOutput, ToolResult,
};

/// Error type for OLS operations.
///
/// Every variant is fatal to the call that produced it; nothing is retried.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Connectivity, DNS, TLS or timeout failure, or the HTTP client could not be built.
    #[error("Network request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The OLS API answered with a non-2xx status.
    #[error("OLS API error (HTTP {status}): {body}")]
    Status { status: u16, body: String },

    /// The response body was not valid JSON or not the expected shape.
    #[error("Failed to decode OLS response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request parameters cannot be sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error category for unified error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The request never got a response.
    Transport,
    /// The remote rejected the request.
    Remote,
    /// The response could not be understood.
    Decode,
    /// Parameters or configuration were invalid before sending.
    Configuration,
}

impl Error {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Error::InvalidRequest(message.into())
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Transport(_) => ErrorCategory::Transport,
            Error::Status { .. } => ErrorCategory::Remote,
            Error::Decode(_) => ErrorCategory::Decode,
            Error::InvalidRequest(_) | Error::Config(_) => ErrorCategory::Configuration,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result type for OLS operations.
pub type Result<T> = std::result::Result<T, Error>;
