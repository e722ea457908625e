//! Tool registry.

use std::collections::HashMap;
use std::sync::Arc;

use super::{
    GetOntologyInfoTool, GetSimilarOntologyTermsTool, GetTermsFromOntologyTool,
    SearchAllOntologiesTool, Tool, ToolAccess,
};
use crate::client::OlsClient;
use crate::types::{ToolDefinition, ToolError, ToolResult};

/// Name-to-handler map built once at startup.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registry holding the four OLS tools allowed by `access`, sharing `client`.
    pub fn ols(client: OlsClient, access: &ToolAccess) -> Self {
        let client = Arc::new(client);
        let mut registry = Self::new();

        let all_tools: Vec<Arc<dyn Tool>> = vec![
            Arc::new(SearchAllOntologiesTool::new(client.clone())),
            Arc::new(GetOntologyInfoTool::new(client.clone())),
            Arc::new(GetTermsFromOntologyTool::new(client.clone())),
            Arc::new(GetSimilarOntologyTermsTool::new(client)),
        ];

        for tool in all_tools {
            if access.is_allowed(tool.name()) {
                registry.register(tool);
            }
        }

        tracing::debug!(tools = registry.tools.len(), "OLS tool registry built");
        registry
    }

    /// Registers `tool`, replacing any tool with the same name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    pub async fn execute(&self, name: &str, input: serde_json::Value) -> ToolResult {
        match self.tools.get(name) {
            Some(tool) => tool.execute(input).await,
            None => ToolError::unknown_tool(name).into(),
        }
    }

    /// Definitions of every registered tool, sorted by name.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut definitions: Vec<_> = self.tools.values().map(|t| t.definition()).collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}
