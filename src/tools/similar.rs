//! Embedding-based similar term lookup.

use std::sync::Arc;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use super::SchemaTool;
use crate::client::{DEFAULT_MAX_RESULTS, DEFAULT_PAGE_SIZE, OlsClient, SimilarTermsRequest};
use crate::types::{SimilarTerm, ToolError, ToolResult, project_similar_terms};
use crate::Result;

/// Terms similar to `ontology_iri` within `ontology`, best match first.
///
/// The queried term is never part of the result.
pub async fn get_similar_ontology_terms(
    client: &OlsClient,
    ontology_iri: &str,
    ontology: &str,
    max_results: u32,
    page_size: u32,
) -> Result<Vec<SimilarTerm>> {
    let request = SimilarTermsRequest::new(ontology_iri, ontology)
        .max_results(max_results)
        .page_size(page_size);
    let elements = client.get_similar_terms(&request).await?;
    Ok(project_similar_terms(elements))
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetSimilarOntologyTermsInput {
    /// The IRI of the ontology term (e.g. 'http://purl.obolibrary.org/obo/GO_0008150')
    pub ontology_iri: String,
    /// The name of the ontology (e.g. 'go', 'uberon')
    pub ontology: String,
    /// The maximum number of results to return
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// The number of results to request per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

pub struct GetSimilarOntologyTermsTool {
    client: Arc<OlsClient>,
}

impl GetSimilarOntologyTermsTool {
    pub fn new(client: Arc<OlsClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SchemaTool for GetSimilarOntologyTermsTool {
    type Input = GetSimilarOntologyTermsInput;

    const NAME: &'static str = "get_similar_ontology_terms";
    const DESCRIPTION: &'static str = "Get similar ontology terms by LLM embedding similarity. \
        Returns CURIE, IRI, label, definition and similarity score for each match.";

    async fn handle(&self, input: GetSimilarOntologyTermsInput) -> ToolResult {
        match get_similar_ontology_terms(
            &self.client,
            &input.ontology_iri,
            &input.ontology,
            input.max_results,
            input.page_size,
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

    #[test]
    fn test_input_defaults() {
        let input: GetSimilarOntologyTermsInput = serde_json::from_value(json!({
            "ontology_iri": "http://purl.obolibrary.org/obo/GO_0008150",
            "ontology": "go"
        }))
        .unwrap();
        assert_eq!(input.max_results, 20);
        assert_eq!(input.page_size, 20);
    }

    #[test]
    fn test_definition() {
        let tool = GetSimilarOntologyTermsTool::new(Arc::new(OlsClient::new().unwrap()));
        let definition = tool.definition();
        assert_eq!(definition.name, "get_similar_ontology_terms");
        let mut required = definition.required_inputs();
        required.sort();
        assert_eq!(required, vec!["ontology", "ontology_iri"]);
    }

    #[tokio::test]
    async fn test_zero_page_size_rejected() {
        let tool = GetSimilarOntologyTermsTool::new(Arc::new(
            OlsClient::builder()
                .base_url("http://127.0.0.1:9")
                .build()
                .unwrap(),
        ));
        let result = tool
            .execute(json!({"ontology_iri": "http://x", "ontology": "go", "page_size": 0}))
            .await;
        assert!(result.as_error().is_some_and(|e| e.contains("page_size")));
    }
}
