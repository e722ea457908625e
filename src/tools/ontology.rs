//! Ontology metadata and term listing.

use std::sync::Arc;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use super::SchemaTool;
use crate::client::{DEFAULT_MAX_RESULTS, OlsClient, OntologyRequest, TermsRequest};
use crate::types::{OntologyDetails, OntologyTerm, ToolError, ToolResult, project_terms};
use crate::Result;

/// Summary of the ontology `ontology_id` (e.g. `go`, `uberon`, `chebi`).
pub async fn get_ontology_info(client: &OlsClient, ontology_id: &str) -> Result<OntologyDetails> {
    let request = OntologyRequest::new(ontology_id).verbose(true);
    let details = client.get_ontology_details(&request).await?;
    Ok(details.into())
}

/// Terms of `ontology_id`, optionally narrowed by IRI, short form or OBO id.
pub async fn get_terms_from_ontology(
    client: &OlsClient,
    ontology_id: &str,
    max_results: u32,
    iri: Option<&str>,
    short_form: Option<&str>,
    obo_id: Option<&str>,
) -> Result<Vec<OntologyTerm>> {
    let request = TermsRequest::new(ontology_id)
        .max_results(max_results)
        .iri(iri.map(String::from))
        .short_form(short_form.map(String::from))
        .obo_id(obo_id.map(String::from))
        .verbose(true);
    let terms = client.get_ontology_terms(&request).await?;
    Ok(project_terms(terms))
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetOntologyInfoInput {
    /// The ID of the ontology (e.g. 'go', 'uberon', 'chebi')
    pub ontology_id: String,
}

pub struct GetOntologyInfoTool {
    client: Arc<OlsClient>,
}

impl GetOntologyInfoTool {
    pub fn new(client: Arc<OlsClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SchemaTool for GetOntologyInfoTool {
    type Input = GetOntologyInfoInput;

    const NAME: &'static str = "get_ontology_info";
    const DESCRIPTION: &'static str = "Get detailed information about a specific ontology: title, \
        description, version, homepage, load status, term/property/individual counts, \
        preferred language, timestamps, source file location and base URIs.";

    async fn handle(&self, input: GetOntologyInfoInput) -> ToolResult {
        match get_ontology_info(&self.client, &input.ontology_id).await {
            Ok(details) => ToolResult::json(&details),
            Err(e) => ToolError::from(e).into(),
        }
    }
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetTermsFromOntologyInput {
    /// The ID of the ontology (e.g. 'go', 'uberon', 'chebi')
    pub ontology_id: String,
    /// Maximum number of results to return
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// Filter by specific IRI
    #[serde(default)]
    pub iri: Option<String>,
    /// Filter by short form
    #[serde(default)]
    pub short_form: Option<String>,
    /// Filter by OBO ID
    #[serde(default)]
    pub obo_id: Option<String>,
}

pub struct GetTermsFromOntologyTool {
    client: Arc<OlsClient>,
}

impl GetTermsFromOntologyTool {
    pub fn new(client: Arc<OlsClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SchemaTool for GetTermsFromOntologyTool {
    type Input = GetTermsFromOntologyInput;

    const NAME: &'static str = "get_terms_from_ontology";
    const DESCRIPTION: &'static str = "Get classes/terms from a specific ontology. \
        Optionally filter by IRI, short form or OBO ID to look up a single term.";

    async fn handle(&self, input: GetTermsFromOntologyInput) -> ToolResult {
        match get_terms_from_ontology(
            &self.client,
            &input.ontology_id,
            input.max_results,
            input.iri.as_deref(),
            input.short_form.as_deref(),
            input.obo_id.as_deref(),
        )
        .await
        {
            Ok(terms) => ToolResult::json(&terms),
            Err(e) => ToolError::from(e).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::Tool;
    use serde_json::json;

    fn client() -> Arc<OlsClient> {
        Arc::new(
            OlsClient::builder()
                .base_url("http://127.0.0.1:9")
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_terms_input_defaults() {
        let input: GetTermsFromOntologyInput =
            serde_json::from_value(json!({"ontology_id": "go"})).unwrap();
        assert_eq!(input.max_results, 20);
        assert!(input.iri.is_none() && input.short_form.is_none() && input.obo_id.is_none());
    }

    #[test]
    fn test_definitions() {
        let info = GetOntologyInfoTool::new(client()).definition();
        assert_eq!(info.name, "get_ontology_info");
        assert_eq!(info.required_inputs(), vec!["ontology_id"]);

        let terms = GetTermsFromOntologyTool::new(client()).definition();
        assert_eq!(terms.name, "get_terms_from_ontology");
        assert_eq!(terms.required_inputs(), vec!["ontology_id"]);
    }

    #[tokio::test]
    async fn test_missing_ontology_id() {
        let result = GetOntologyInfoTool::new(client()).execute(json!({})).await;
        assert!(result.is_error());
        assert!(result.error_message().contains("ontology_id"));
    }

    #[tokio::test]
    async fn test_blank_ontology_id() {
        let result = GetTermsFromOntologyTool::new(client())
            .execute(json!({"ontology_id": ""}))
            .await;
        assert!(matches!(
            result.as_error(),
            Some(ToolError::InvalidInput { .. })
        ));
    }
}
