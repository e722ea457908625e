//! Full-text search across ontologies.

use std::sync::Arc;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use super::SchemaTool;
use crate::client::{DEFAULT_MAX_RESULTS, OlsClient, SearchRequest};
use crate::types::{SearchResult, ToolError, ToolResult, project_search_results};
use crate::Result;

/// Splits a comma-separated ontology filter into trimmed ids.
///
/// `" go , mondo , chebi "` gives `["go", "mondo", "chebi"]`. Blank pieces are
/// dropped, and a filter with no ids left means "search everything".
pub fn parse_ontology_filter(ontologies: &str) -> Option<Vec<String>> {
    let ids: Vec<String> = ontologies
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect();
    if ids.is_empty() { None } else { Some(ids) }
}

/// Searches every ontology (or the comma-separated `ontologies` subset) for `query`.
pub async fn search_all_ontologies(
    client: &OlsClient,
    query: &str,
    ontologies: Option<&str>,
    max_results: u32,
    exact: bool,
) -> Result<Vec<SearchResult>> {
    let request = SearchRequest::new(query)
        .with_ontologies(ontologies.and_then(parse_ontology_filter))
        .max_results(max_results)
        .exact(exact)
        .verbose(true);
    let docs = client.search(&request).await?;
    Ok(project_search_results(docs))
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchAllOntologiesInput {
    /// The search term to look for
    pub query: String,
    /// Comma-separated list of ontology IDs to search within (e.g. "go,uberon")
    #[serde(default)]
    pub ontologies: Option<String>,
    /// Maximum number of results to return
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// Whether to perform exact matching
    #[serde(default)]
    pub exact: bool,
}

pub struct SearchAllOntologiesTool {
    client: Arc<OlsClient>,
}

impl SearchAllOntologiesTool {
    pub fn new(client: Arc<OlsClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SchemaTool for SearchAllOntologiesTool {
    type Input = SearchAllOntologiesInput;

    const NAME: &'static str = "search_all_ontologies";
    const DESCRIPTION: &'static str = "Search across all ontologies in the Ontology Lookup Service (OLS). \
        Returns matching terms with their IRI, short form, OBO id, label, description \
        and owning ontology. Restrict the search with a comma-separated list of \
        ontology ids such as \"go,uberon\".";

    async fn handle(&self, input: SearchAllOntologiesInput) -> ToolResult {
        match search_all_ontologies(
            &self.client,
            &input.query,
            input.ontologies.as_deref(),
            input.max_results,
            input.exact,
        )
        .await
        {
            Ok(results) => ToolResult::json(&results),
            Err(e) => ToolError::from(e).into(),
        }
    }
}
