//! Prelude module for convenient imports.
//!
//! ```rust
//! use ols_tools::prelude::*;
//! ```

pub use crate::Error;
pub use crate::Result;

// Client
pub use crate::client::{OlsClient, OlsClientBuilder, OlsConfig};

// Operations
pub use crate::tools::{
    get_ontology_info, get_similar_ontology_terms, get_terms_from_ontology, search_all_ontologies,
};

// Tools
pub use crate::tools::{SchemaTool, Tool, ToolAccess, ToolRegistry};
pub use crate::types::{ToolDefinition, ToolResult};

// Records
pub use crate::types::{OntologyDetails, OntologyTerm, SearchResult, SimilarTerm};
