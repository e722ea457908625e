//! Core types: raw OLS responses, projected records and tool plumbing.

pub mod raw;
pub mod records;
mod tool;

pub use raw::{
    RawOntology, RawOntologyConfig, RawSearchDoc, RawSimilarTerm, RawTerm, SearchEnvelope,
    SimilarEnvelope, TermsEnvelope,
};
pub use records::{
    MISSING_SCORE, OntologyDetails, OntologyTerm, SearchResult, SimilarTerm, definition_text,
    project_search_results, project_similar_terms, project_terms,
};
pub use tool::{ToolDefinition, ToolError, ToolOutput, ToolResult};
