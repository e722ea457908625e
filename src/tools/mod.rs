//! OLS tools: the four public operations and their agent-facing wrappers.
//!
//! Each operation calls the client once and projects the raw response into
//! records. The `*Tool` types expose the same operations behind [`Tool`] for
//! hosts that dispatch by name through a [`ToolRegistry`].

mod access;
mod ontology;
mod registry;
mod search;
mod similar;
mod traits;

pub use access::ToolAccess;
pub use ontology::{
    GetOntologyInfoInput, GetOntologyInfoTool, GetTermsFromOntologyInput,
    GetTermsFromOntologyTool, get_ontology_info, get_terms_from_ontology,
};
pub use registry::ToolRegistry;
pub use search::{
    SearchAllOntologiesInput, SearchAllOntologiesTool, parse_ontology_filter,
    search_all_ontologies,
};
pub use similar::{
    GetSimilarOntologyTermsInput, GetSimilarOntologyTermsTool, get_similar_ontology_terms,
};
pub use traits::{SchemaTool, Tool};
