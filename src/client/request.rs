//! Typed requests for the four OLS operations.
//!
//! Each request knows its path and query parameters; the client only adds
//! the base URL and sends it.

use super::encoding::{double_encode, encode_segment};
use crate::{Error, Result};

pub const DEFAULT_MAX_RESULTS: u32 = 20;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

fn require_non_empty(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid_request(format!("{} cannot be empty", what)));
    }
    Ok(())
}

/// Full-text search across ontologies (`GET /search`).
///
/// The query is sent as given, blank or not; OLS decides what it matches.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub ontologies: Option<Vec<String>>,
    pub max_results: u32,
    pub exact: bool,
    pub verbose: bool,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ontologies: None,
            max_results: DEFAULT_MAX_RESULTS,
            exact: false,
            verbose: false,
        }
    }

    pub fn ontologies(mut self, ontologies: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.ontologies = Some(ontologies.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_ontologies(mut self, ontologies: Option<Vec<String>>) -> Self {
        self.ontologies = ontologies;
        self
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn path(&self) -> String {
        "/search".to_string()
    }

    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", self.query.clone()),
            ("rows", self.max_results.to_string()),
        ];
        if let Some(ref ontologies) = self.ontologies
            && !ontologies.is_empty()
        {
            params.push(("ontology", ontologies.join(",")));
        }
        if self.exact {
            params.push(("exact", "true".to_string()));
        }
        params
    }
}

/// Metadata for one ontology (`GET /ontologies/{id}`).
#[derive(Debug, Clone, PartialEq)]
pub struct OntologyRequest {
    pub ontology_id: String,
    pub verbose: bool,
}

impl OntologyRequest {
    pub fn new(ontology_id: impl Into<String>) -> Self {
        Self {
            ontology_id: ontology_id.into(),
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.ontology_id, "ontology_id")
    }

    pub fn path(&self) -> String {
        format!("/ontologies/{}", encode_segment(self.ontology_id.trim()))
    }
}

/// Terms of one ontology (`GET /ontologies/{id}/terms`).
#[derive(Debug, Clone, PartialEq)]
pub struct TermsRequest {
    pub ontology_id: String,
    pub max_results: u32,
    pub iri: Option<String>,
    pub short_form: Option<String>,
    pub obo_id: Option<String>,
    pub verbose: bool,
}

impl TermsRequest {
    pub fn new(ontology_id: impl Into<String>) -> Self {
        Self {
            ontology_id: ontology_id.into(),
            max_results: DEFAULT_MAX_RESULTS,
            iri: None,
            short_form: None,
            obo_id: None,
            verbose: false,
        }
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn iri(mut self, iri: Option<String>) -> Self {
        self.iri = iri;
        self
    }

    pub fn short_form(mut self, short_form: Option<String>) -> Self {
        self.short_form = short_form;
        self
    }

    pub fn obo_id(mut self, obo_id: Option<String>) -> Self {
        self.obo_id = obo_id;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.ontology_id, "ontology_id")
    }

    pub fn path(&self) -> String {
        format!("/ontologies/{}/terms", encode_segment(self.ontology_id.trim()))
    }

    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("size", self.max_results.to_string())];
        let filters = [
            ("iri", &self.iri),
            ("short_form", &self.short_form),
            ("obo_id", &self.obo_id),
        ];
        for (name, value) in filters {
            if let Some(value) = value {
                params.push((name, value.clone()));
            }
        }
        params
    }
}

/// Embedding-based similar terms (`GET /v2/ontologies/{ontology}/classes/{iri}/llm_similar`).
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarTermsRequest {
    pub iri: String,
    pub ontology: String,
    pub max_results: u32,
    pub page_size: u32,
    pub verbose: bool,
}

impl SimilarTermsRequest {
    pub fn new(iri: impl Into<String>, ontology: impl Into<String>) -> Self {
        Self {
            iri: iri.into(),
            ontology: ontology.into(),
            max_results: DEFAULT_MAX_RESULTS,
            page_size: DEFAULT_PAGE_SIZE,
            verbose: false,
        }
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.iri, "iri")?;
        require_non_empty(&self.ontology, "ontology")?;
        if self.page_size == 0 {
            return Err(Error::invalid_request("page_size must be greater than zero"));
        }
        Ok(())
    }

    /// Ontology ids are lower-case in v2 routes; the IRI is double encoded.
    pub fn path(&self) -> String {
        format!(
            "/v2/ontologies/{}/classes/{}/llm_similar",
            encode_segment(&self.ontology.trim().to_lowercase()),
            double_encode(self.iri.trim())
        )
    }

    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("size", self.page_size.to_string()),
            ("page", "0".to_string()),
        ]
    }
}
