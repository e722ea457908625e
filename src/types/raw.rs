//! Raw OLS response shapes.
//!
//! These mirror the JSON the OLS API returns, restricted to the keys the
//! projections read. Every field carries its default policy as a serde
//! attribute, so a missing key never fails decoding. Unknown keys are
//! ignored.

use serde::Deserialize;

/// Envelope of `GET /search`: `{"response": {"docs": [...]}}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub response: SearchDocs,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchDocs {
    #[serde(default)]
    pub docs: Vec<RawSearchDoc>,
}

/// One document of a full-text search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSearchDoc {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub iri: Option<String>,
    #[serde(default)]
    pub short_form: Option<String>,
    #[serde(default)]
    pub obo_id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<Vec<String>>,
    #[serde(default)]
    pub ontology_name: Option<String>,
    #[serde(default)]
    pub ontology_prefix: Option<String>,
    #[serde(default, rename = "type")]
    pub doc_type: Option<String>,
}

/// Body of `GET /ontologies/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOntology {
    #[serde(default)]
    pub ontology_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub number_of_terms: Option<serde_json::Number>,
    #[serde(default)]
    pub number_of_properties: Option<serde_json::Number>,
    #[serde(default)]
    pub number_of_individuals: Option<serde_json::Number>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub loaded: Option<String>,
    #[serde(default)]
    pub config: Option<RawOntologyConfig>,
}

/// The `config` sub-object of an ontology body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOntologyConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub preferred_language: Option<String>,
    #[serde(default)]
    pub file_location: Option<String>,
    #[serde(default)]
    pub base_uris: Option<Vec<String>>,
}

/// Envelope of `GET /ontologies/{id}/terms`: `{"_embedded": {"terms": [...]}}`.
///
/// An ontology without terms omits `_embedded` entirely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TermsEnvelope {
    #[serde(default, rename = "_embedded")]
    pub embedded: Option<EmbeddedTerms>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbeddedTerms {
    #[serde(default)]
    pub terms: Vec<RawTerm>,
}

impl TermsEnvelope {
    pub fn into_terms(self) -> Vec<RawTerm> {
        self.embedded.map(|e| e.terms).unwrap_or_default()
    }
}

/// One term of an ontology listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTerm {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub iri: Option<String>,
    #[serde(default)]
    pub short_form: Option<String>,
    #[serde(default)]
    pub obo_id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<Vec<String>>,
    #[serde(default)]
    pub synonyms: Option<Vec<String>>,
    #[serde(default)]
    pub ontology_name: Option<String>,
    #[serde(default)]
    pub ontology_prefix: Option<String>,
    #[serde(default, rename = "type")]
    pub term_type: Option<String>,
    #[serde(default)]
    pub is_obsolete: Option<bool>,
    #[serde(default)]
    pub has_children: Option<bool>,
    #[serde(default)]
    pub is_root: Option<bool>,
}

/// Envelope of the v2 `llm_similar` endpoint: `{"elements": [...]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimilarEnvelope {
    #[serde(default)]
    pub elements: Vec<RawSimilarTerm>,
}

/// One embedding-similarity match.
///
/// `definition` entries are either plain strings or reified objects
/// carrying a `value`, so they stay untyped until projection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSimilarTerm {
    #[serde(default)]
    pub curie: Option<String>,
    #[serde(default)]
    pub iri: Option<String>,
    #[serde(default)]
    pub label: Vec<String>,
    #[serde(default)]
    pub definition: Vec<serde_json::Value>,
    #[serde(default)]
    pub score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_envelope_missing_response() {
        let envelope: SearchEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(envelope.response.docs.is_empty());
    }

    #[test]
    fn test_search_doc_ignores_unknown_keys() {
        let doc: RawSearchDoc = serde_json::from_value(json!({
            "id": "GO:0008150",
            "type": "class",
            "extra_field": {"nested": true}
        }))
        .unwrap();
        assert_eq!(doc.id.as_deref(), Some("GO:0008150"));
        assert_eq!(doc.doc_type.as_deref(), Some("class"));
        assert!(doc.description.is_none());
    }

    #[test]
    fn test_ontology_camel_case_keys() {
        let raw: RawOntology = serde_json::from_value(json!({
            "ontologyId": "go",
            "numberOfTerms": 47000,
            "config": {"preferredLanguage": "en", "baseUris": ["http://purl.obolibrary.org/obo/GO_"]}
        }))
        .unwrap();
        assert_eq!(raw.ontology_id.as_deref(), Some("go"));
        assert_eq!(raw.number_of_terms, Some(serde_json::Number::from(47000u64)));
        let config = raw.config.unwrap();
        assert_eq!(config.preferred_language.as_deref(), Some("en"));
        assert_eq!(config.base_uris.unwrap().len(), 1);
    }

    #[test]
    fn test_terms_envelope_without_embedded() {
        let envelope: TermsEnvelope =
            serde_json::from_value(json!({"page": {"number": 0, "totalPages": 0}})).unwrap();
        assert!(envelope.into_terms().is_empty());
    }

    #[test]
    fn test_similar_term_mixed_definition() {
        let raw: RawSimilarTerm = serde_json::from_value(json!({
            "curie": "GO:0008150",
            "label": ["biological_process"],
            "definition": [{"type": ["reification"], "value": "A process."}, "A note."]
        }))
        .unwrap();
        assert_eq!(raw.definition.len(), 2);
        assert!(raw.score.is_none());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result: Result<RawSimilarTerm, _> =
            serde_json::from_value(json!({"label": "not-a-list"}));
        assert!(result.is_err());
    }
}
