//! Tool execution output types.

use serde::Serialize;

use super::error::ToolError;

#[derive(Debug, Clone)]
pub enum ToolOutput {
    Success(String),
    Error(ToolError),
}

impl ToolOutput {
    pub fn success(content: impl Into<String>) -> Self {
        Self::Success(content.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(ToolError::execution_failed(message))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn as_error(&self) -> Option<&ToolError> {
        match self {
            Self::Error(e) => Some(e),
            Self::Success(_) => None,
        }
    }

    pub fn error_message(&self) -> String {
        self.as_error().map(ToString::to_string).unwrap_or_default()
    }

    pub fn text(&self) -> String {
        match self {
            Self::Success(content) => content.clone(),
            Self::Error(e) => e.to_string(),
        }
    }
}

impl From<ToolError> for ToolOutput {
    fn from(error: ToolError) -> Self {
        Self::Error(error)
    }
}

/// Result of a tool invocation.
///
/// Successful OLS tools carry their records twice: as pretty JSON text for
/// hosts that only forward text, and as a structured value.
#[derive(Debug, Clone)]
pub struct ToolResult {
    pub output: ToolOutput,
    pub structured: Option<serde_json::Value>,
}

impl ToolResult {
    pub fn success(content: impl Into<String>) -> Self {
        ToolOutput::success(content).into()
    }

    pub fn error(message: impl Into<String>) -> Self {
        ToolOutput::error(message).into()
    }

    /// Serializes `records` into both the text and structured forms.
    pub fn json<T: Serialize + ?Sized>(records: &T) -> Self {
        let value = match serde_json::to_value(records) {
            Ok(value) => value,
            Err(e) => return Self::error(format!("Failed to serialize result: {}", e)),
        };
        let text = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
        Self {
            output: ToolOutput::Success(text),
            structured: Some(value),
        }
    }

    pub fn is_error(&self) -> bool {
        self.output.is_error()
    }

    pub fn text(&self) -> String {
        self.output.text()
    }

    pub fn error_message(&self) -> String {
        self.output.error_message()
    }

    pub fn as_error(&self) -> Option<&ToolError> {
        self.output.as_error()
    }
}

impl From<ToolOutput> for ToolResult {
    fn from(output: ToolOutput) -> Self {
        Self {
            output,
            structured: None,
        }
    }
}

impl From<ToolError> for ToolResult {
    fn from(error: ToolError) -> Self {
        ToolOutput::Error(error).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_output_kinds() {
        assert!(!ToolOutput::success("ok").is_error());
        assert_eq!(ToolOutput::success("ok").error_message(), "");
        assert!(ToolOutput::error("fail").is_error());
        assert_eq!(
            ToolOutput::error("fail").text(),
            "execution failed: fail"
        );
    }

    #[test]
    fn test_json_result_carries_structured_value() {
        let result = ToolResult::json(&vec![json!({"id": "GO:0008150"})]);
        assert!(!result.is_error());
        assert_eq!(result.structured, Some(json!([{"id": "GO:0008150"}])));
        assert!(result.text().contains("\"id\": \"GO:0008150\""));
    }

    #[test]
    fn test_error_result_message() {
        let result: ToolResult = ToolError::unknown_tool("nope").into();
        assert!(result.is_error());
        assert_eq!(result.error_message(), "unknown tool: nope");
        assert!(result.structured.is_none());
    }
}
