//! Projected records returned to tool callers.
//!
//! Each record has a fixed key set. Projection from the raw types is total:
//! absent keys resolve to the defaults documented per field and nothing from
//! the raw response passes through unless named here.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::raw::{RawOntology, RawSearchDoc, RawSimilarTerm, RawTerm};

/// Score reported when the similarity endpoint omits one.
///
/// Real scores lie in `[0, 1]`, so the sentinel is unambiguous.
pub const MISSING_SCORE: f64 = -999.0;

/// A full-text search match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: Option<String>,
    pub iri: Option<String>,
    pub short_form: Option<String>,
    pub obo_id: Option<String>,
    pub label: Option<String>,
    pub description: Vec<String>,
    pub ontology_name: Option<String>,
    pub ontology_prefix: Option<String>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
}

impl From<RawSearchDoc> for SearchResult {
    fn from(raw: RawSearchDoc) -> Self {
        Self {
            id: raw.id,
            iri: raw.iri,
            short_form: raw.short_form,
            obo_id: raw.obo_id,
            label: raw.label,
            description: raw.description.unwrap_or_default(),
            ontology_name: raw.ontology_name,
            ontology_prefix: raw.ontology_prefix,
            r#type: raw.doc_type,
        }
    }
}

/// Summary of a single ontology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OntologyDetails {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub homepage: Option<String>,
    pub status: Option<String>,
    pub number_of_terms: Option<Number>,
    pub number_of_properties: Option<Number>,
    pub number_of_individuals: Option<Number>,
    pub languages: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub loaded: Option<String>,
    pub file_location: Option<String>,
    pub base_uris: Vec<String>,
}

impl From<RawOntology> for OntologyDetails {
    fn from(raw: RawOntology) -> Self {
        let config = raw.config.unwrap_or_default();
        Self {
            id: raw.ontology_id,
            title: config.title,
            description: config.description,
            version: config.version,
            homepage: config.homepage,
            status: raw.status,
            number_of_terms: raw.number_of_terms,
            number_of_properties: raw.number_of_properties,
            number_of_individuals: raw.number_of_individuals,
            languages: config.preferred_language,
            created: raw.created,
            updated: raw.updated,
            loaded: raw.loaded,
            file_location: config.file_location,
            base_uris: config.base_uris.unwrap_or_default(),
        }
    }
}

/// A term (class) listed from one ontology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OntologyTerm {
    pub id: Option<String>,
    pub iri: Option<String>,
    pub short_form: Option<String>,
    pub obo_id: Option<String>,
    pub label: Option<String>,
    pub description: Vec<String>,
    pub synonyms: Vec<String>,
    pub ontology_name: Option<String>,
    pub ontology_prefix: Option<String>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub is_obsolete: bool,
    pub has_children: bool,
    pub is_root: bool,
}

impl From<RawTerm> for OntologyTerm {
    fn from(raw: RawTerm) -> Self {
        Self {
            id: raw.id,
            iri: raw.iri,
            short_form: raw.short_form,
            obo_id: raw.obo_id,
            label: raw.label,
            description: raw.description.unwrap_or_default(),
            synonyms: raw.synonyms.unwrap_or_default(),
            ontology_name: raw.ontology_name,
            ontology_prefix: raw.ontology_prefix,
            r#type: raw.term_type,
            is_obsolete: raw.is_obsolete.unwrap_or(false),
            has_children: raw.has_children.unwrap_or(false),
            is_root: raw.is_root.unwrap_or(false),
        }
    }
}

/// An embedding-similarity match for a term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarTerm {
    pub id: Option<String>,
    pub iri: Option<String>,
    pub label: String,
    pub definition: String,
    pub score: f64,
}

impl From<&RawSimilarTerm> for SimilarTerm {
    fn from(raw: &RawSimilarTerm) -> Self {
        Self {
            id: raw.curie.clone(),
            iri: raw.iri.clone(),
            label: raw.label.first().cloned().unwrap_or_default(),
            definition: raw
                .definition
                .first()
                .map(definition_text)
                .unwrap_or_default(),
            score: raw.score.unwrap_or(MISSING_SCORE),
        }
    }
}

impl From<RawSimilarTerm> for SimilarTerm {
    fn from(raw: RawSimilarTerm) -> Self {
        Self::from(&raw)
    }
}

/// Resolves one `definition` entry to text.
///
/// Strings are used as-is and reified objects yield their `value`. Any other
/// shape is rendered as compact JSON so no content is silently dropped.
pub fn definition_text(entry: &Value) -> String {
    match entry {
        Value::String(text) => text.clone(),
        Value::Object(map) => match map.get("value") {
            Some(Value::String(text)) => text.clone(),
            None | Some(Value::Null) => String::new(),
            Some(other) => other.to_string(),
        },
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn project_search_results(docs: Vec<RawSearchDoc>) -> Vec<SearchResult> {
    docs.into_iter().map(SearchResult::from).collect()
}

pub fn project_terms(terms: Vec<RawTerm>) -> Vec<OntologyTerm> {
    terms.into_iter().map(OntologyTerm::from).collect()
}

pub fn project_similar_terms(elements: Vec<RawSimilarTerm>) -> Vec<SimilarTerm> {
    elements.into_iter().map(SimilarTerm::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn keys(value: &impl Serialize) -> BTreeSet<String> {
        serde_json::to_value(value)
            .unwrap()
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect()
    }

    fn key_set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_search_result_defaults() {
        let raw: RawSearchDoc = serde_json::from_value(json!({
            "id": "GO:0008150",
            "label": "biological_process"
        }))
        .unwrap();
        let result = SearchResult::from(raw);

        let expected = json!({
            "id": "GO:0008150",
            "iri": null,
            "short_form": null,
            "obo_id": null,
            "label": "biological_process",
            "description": [],
            "ontology_name": null,
            "ontology_prefix": null,
            "type": null
        });
        assert_eq!(serde_json::to_value(&result).unwrap(), expected);
    }

    #[test]
    fn test_search_result_filters_extra_fields() {
        let raw: RawSearchDoc = serde_json::from_value(json!({
            "id": "GO:0008150",
            "iri": "http://purl.obolibrary.org/obo/GO_0008150",
            "type": "class",
            "extra_field": "should be dropped",
            "score": 12.5
        }))
        .unwrap();
        let result = SearchResult::from(raw);

        assert_eq!(
            keys(&result),
            key_set(&[
                "id",
                "iri",
                "short_form",
                "obo_id",
                "label",
                "description",
                "ontology_name",
                "ontology_prefix",
                "type"
            ])
        );
    }

    #[test]
    fn test_ontology_details_full() {
        let raw: RawOntology = serde_json::from_value(json!({
            "ontologyId": "go",
            "status": "LOADED",
            "numberOfTerms": 47000,
            "numberOfProperties": 10,
            "numberOfIndividuals": 0,
            "loaded": "2024-01-02T00:00:00",
            "config": {
                "title": "Gene Ontology",
                "description": "Gene and gene product attributes",
                "version": "2024-01-01",
                "homepage": "http://geneontology.org/",
                "preferredLanguage": "en",
                "fileLocation": "http://purl.obolibrary.org/obo/go.owl",
                "baseUris": ["http://purl.obolibrary.org/obo/GO_"]
            }
        }))
        .unwrap();
        let details = OntologyDetails::from(raw);

        assert_eq!(details.id.as_deref(), Some("go"));
        assert_eq!(details.title.as_deref(), Some("Gene Ontology"));
        assert_eq!(details.homepage.as_deref(), Some("http://geneontology.org/"));
        assert_eq!(details.languages.as_deref(), Some("en"));
        assert_eq!(details.number_of_terms, Some(Number::from(47000u64)));
        assert_eq!(details.number_of_individuals, Some(Number::from(0u64)));
        assert_eq!(
            details.file_location.as_deref(),
            Some("http://purl.obolibrary.org/obo/go.owl")
        );
        assert_eq!(details.base_uris, vec!["http://purl.obolibrary.org/obo/GO_"]);
        assert!(details.created.is_none());
    }

    #[test]
    fn test_ontology_counts_pass_through_unchanged() {
        let raw: RawOntology = serde_json::from_value(json!({
            "ontologyId": "go",
            "numberOfTerms": 47000.0,
            "numberOfProperties": 12,
            "numberOfIndividuals": -1
        }))
        .unwrap();
        let details = OntologyDetails::from(raw);

        assert_eq!(details.number_of_terms, Number::from_f64(47000.0));
        assert_eq!(details.number_of_individuals, Some(Number::from(-1i64)));

        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["number_of_terms"], json!(47000.0));
        assert_eq!(value["number_of_properties"], json!(12));
        assert_eq!(value["number_of_individuals"], json!(-1));
    }

    #[test]
    fn test_ontology_details_missing_config() {
        let raw: RawOntology = serde_json::from_value(json!({
            "ontologyId": "test",
            "status": "LOADED"
        }))
        .unwrap();
        let details = OntologyDetails::from(raw);

        assert_eq!(details.id.as_deref(), Some("test"));
        assert_eq!(details.status.as_deref(), Some("LOADED"));
        assert!(details.title.is_none());
        assert!(details.description.is_none());
        assert!(details.version.is_none());
        assert!(details.homepage.is_none());
        assert!(details.languages.is_none());
        assert!(details.file_location.is_none());
        assert!(details.base_uris.is_empty());
    }

    #[test]
    fn test_ontology_details_key_set() {
        let details = OntologyDetails::from(RawOntology::default());
        assert_eq!(
            keys(&details),
            key_set(&[
                "id",
                "title",
                "description",
                "version",
                "homepage",
                "status",
                "number_of_terms",
                "number_of_properties",
                "number_of_individuals",
                "languages",
                "created",
                "updated",
                "loaded",
                "file_location",
                "base_uris"
            ])
        );
    }

    #[test]
    fn test_term_boolean_defaults() {
        let raw: RawTerm = serde_json::from_value(json!({
            "id": "GO:0008150",
            "label": "biological_process"
        }))
        .unwrap();
        let term = OntologyTerm::from(raw);

        assert!(!term.is_obsolete);
        assert!(!term.has_children);
        assert!(!term.is_root);
        assert!(term.synonyms.is_empty());
        assert!(term.description.is_empty());
        assert!(term.iri.is_none());
    }

    #[test]
    fn test_term_explicit_flags() {
        let raw: RawTerm = serde_json::from_value(json!({
            "id": "GO:0008150",
            "synonyms": ["biological process"],
            "is_obsolete": false,
            "has_children": true,
            "is_root": true,
            "annotation": {"created_by": "jl"}
        }))
        .unwrap();
        let term = OntologyTerm::from(raw);

        assert!(term.has_children);
        assert!(term.is_root);
        assert_eq!(term.synonyms, vec!["biological process"]);
        assert_eq!(keys(&term).len(), 13);
        assert!(!keys(&term).contains("annotation"));
    }

    #[test]
    fn test_similar_term_literal_example() {
        let raw: RawSimilarTerm = serde_json::from_value(json!({
            "curie": "BAO:0000264",
            "iri": "http://www.bioassayontology.org/bao#BAO_0000264",
            "label": ["biological process"],
            "definition": ["...definition text..."],
            "score": 0.9899990558624268
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(SimilarTerm::from(raw)).unwrap(),
            json!({
                "id": "BAO:0000264",
                "iri": "http://www.bioassayontology.org/bao#BAO_0000264",
                "label": "biological process",
                "definition": "...definition text...",
                "score": 0.9899990558624268
            })
        );
    }

    #[test]
    fn test_similar_term_reified_definition() {
        let raw: RawSimilarTerm = serde_json::from_value(json!({
            "curie": "GO:0008150",
            "label": ["biological_process"],
            "definition": [
                {"type": ["reification"], "value": "A biological process.", "axioms": []},
                "Note that this is the root."
            ],
            "score": 0.99
        }))
        .unwrap();
        let term = SimilarTerm::from(raw);

        assert_eq!(term.definition, "A biological process.");
    }

    #[test]
    fn test_similar_term_empty_sequences() {
        let raw: RawSimilarTerm =
            serde_json::from_value(json!({"curie": "X:1", "label": [], "definition": []}))
                .unwrap();
        let term = SimilarTerm::from(raw);

        assert_eq!(term.label, "");
        assert_eq!(term.definition, "");
        assert_eq!(term.score, MISSING_SCORE);
        assert!(term.iri.is_none());
    }

    #[test]
    fn test_similar_term_idempotent() {
        let raw: RawSimilarTerm = serde_json::from_value(json!({
            "curie": "BAO:0000264",
            "label": ["biological process"],
            "definition": [{"value": "text"}],
            "score": 0.5
        }))
        .unwrap();

        assert_eq!(SimilarTerm::from(&raw), SimilarTerm::from(&raw));
    }

    #[test]
    fn test_definition_text_shapes() {
        assert_eq!(definition_text(&json!("plain")), "plain");
        assert_eq!(definition_text(&json!({"value": "boxed"})), "boxed");
        assert_eq!(definition_text(&json!({"type": ["reification"]})), "");
        assert_eq!(definition_text(&json!({"value": null})), "");
        assert_eq!(definition_text(&json!({"value": 7})), "7");
        assert_eq!(definition_text(&json!(42)), "42");
        assert_eq!(definition_text(&json!(true)), "true");
        assert_eq!(definition_text(&json!(["a", "b"])), r#"["a","b"]"#);
        assert_eq!(definition_text(&Value::Null), "");
    }

    #[test]
    fn test_project_lists_preserve_order() {
        let docs = vec![
            RawSearchDoc {
                id: Some("A".into()),
                ..Default::default()
            },
            RawSearchDoc {
                id: Some("B".into()),
                ..Default::default()
            },
        ];
        let ids: Vec<_> = project_search_results(docs)
            .into_iter()
            .map(|r| r.id.unwrap())
            .collect();
        assert_eq!(ids, vec!["A", "B"]);
        assert!(project_terms(Vec::new()).is_empty());
        assert!(project_similar_terms(Vec::new()).is_empty());
    }
}
