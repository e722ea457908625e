//! OLS REST API client.
//!
//! One method per OLS operation. Each issues exactly one GET, decodes the
//! body into the raw response types and extracts the relevant fragment.
//! Nothing is retried or cached.

mod config;
mod encoding;
mod request;

pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, OlsConfig};
pub use encoding::{double_encode, encode_query, encode_segment};
pub use request::{
    DEFAULT_MAX_RESULTS, DEFAULT_PAGE_SIZE, OntologyRequest, SearchRequest, SimilarTermsRequest,
    TermsRequest,
};

pub use crate::observability::{NoopObserver, RequestObserver, TracingObserver};

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::Instrument;

use crate::observability::RequestSpan;
use crate::types::{
    RawOntology, RawSearchDoc, RawSimilarTerm, RawTerm, SearchEnvelope, SimilarEnvelope,
    TermsEnvelope,
};
use crate::{Error, Result};

/// Client for the OLS API. Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct OlsClient {
    http: reqwest::Client,
    config: Arc<OlsConfig>,
    observer: Arc<dyn RequestObserver>,
}

impl OlsClient {
    /// Client for the public OLS API with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> OlsClientBuilder {
        OlsClientBuilder::default()
    }

    pub fn config(&self) -> &OlsConfig {
        &self.config
    }

    /// `GET /search`, returning `response.docs`.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<RawSearchDoc>> {
        let url = self.url(&request.path(), &request.query_params());
        let envelope: SearchEnvelope = self.get_json("search", &url, request.verbose).await?;
        Ok(envelope.response.docs)
    }

    /// `GET /ontologies/{id}`, returning the whole body.
    pub async fn get_ontology_details(&self, request: &OntologyRequest) -> Result<RawOntology> {
        request.validate()?;
        let url = self.url(&request.path(), &[]);
        self.get_json("ontology_details", &url, request.verbose)
            .await
    }

    /// `GET /ontologies/{id}/terms`, returning `_embedded.terms` (empty when absent).
    pub async fn get_ontology_terms(&self, request: &TermsRequest) -> Result<Vec<RawTerm>> {
        request.validate()?;
        let url = self.url(&request.path(), &request.query_params());
        let envelope: TermsEnvelope = self
            .get_json("ontology_terms", &url, request.verbose)
            .await?;
        Ok(envelope.into_terms())
    }

    /// `GET /v2/ontologies/{ontology}/classes/{iri}/llm_similar`, returning `elements`.
    ///
    /// The queried term itself is dropped from the matches and at most
    /// `max_results` elements are kept.
    pub async fn get_similar_terms(
        &self,
        request: &SimilarTermsRequest,
    ) -> Result<Vec<RawSimilarTerm>> {
        request.validate()?;
        let url = self.url(&request.path(), &request.query_params());
        let envelope: SimilarEnvelope = self
            .get_json("similar_terms", &url, request.verbose)
            .await?;

        let queried = request.iri.trim();
        Ok(envelope
            .elements
            .into_iter()
            .filter(|element| element.iri.as_deref() != Some(queried))
            .take(request.max_results as usize)
            .collect())
    }

    /// Absolute URL for `path` with an encoded query string.
    pub fn url(&self, path: &str, params: &[(&'static str, String)]) -> String {
        let endpoint = self.config.endpoint(path);
        if params.is_empty() {
            endpoint
        } else {
            format!("{}?{}", endpoint, encode_query(params))
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        url: &str,
        verbose: bool,
    ) -> Result<T> {
        let request_span = RequestSpan::new(operation, url);
        let span = request_span.span().clone();

        async move {
            if verbose {
                self.observer.on_request(operation, url);
            }

            let response = self.http.get(url).send().await.map_err(|e| {
                tracing::warn!(error = %e, "OLS request failed");
                Error::Transport(e)
            })?;

            let status = response.status();
            request_span.record_status(status.as_u16());
            let body = response.text().await.map_err(Error::Transport)?;

            if verbose {
                self.observer.on_response(operation, status.as_u16(), &body);
            }

            let latency_ms = request_span.finish();
            tracing::debug!(status = status.as_u16(), latency_ms, "OLS request completed");

            if !status.is_success() {
                return Err(Error::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            serde_json::from_str(&body).map_err(|e| {
                tracing::warn!(error = %e, "OLS response did not match the expected shape");
                Error::Decode(e)
            })
        }
        .instrument(span)
        .await
    }
}

impl std::fmt::Debug for OlsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OlsClient")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .finish()
    }
}

#[derive(Default)]
pub struct OlsClientBuilder {
    config: Option<OlsConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    observer: Option<Arc<dyn RequestObserver>>,
}

impl OlsClientBuilder {
    pub fn config(mut self, config: OlsConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sink for verbose request/response diagnostics (default: [`TracingObserver`]).
    pub fn observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn build(self) -> Result<OlsClient> {
        let mut config = self.config.unwrap_or_default();
        if let Some(url) = self.base_url {
            config = config.with_base_url(url);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        if let Some(agent) = self.user_agent {
            config = config.with_user_agent(agent);
        }
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(Error::Transport)?;

        Ok(OlsClient {
            http,
            config: Arc::new(config),
            observer: self.observer.unwrap_or_else(|| Arc::new(TracingObserver)),
        })
    }
}
