//! Helpers shared by all Figma tool definitions.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde_json::Value;

use crate::core::api::ApiError;
use crate::domains::tools::ToolResult;

/// Prefix of every upstream failure reported to callers.
pub const API_ERROR_PREFIX: &str = "Figma API error: ";

/// Build the descriptor of a tool whose input is `P`.
pub fn descriptor<P>(name: &'static str, description: &'static str) -> Tool
where
    P: JsonSchema + 'static,
{
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Wrap an API response as pretty-printed JSON text.
pub fn json_result(data: &Value) -> ToolResult<CallToolResult> {
    let text = serde_json::to_string_pretty(data)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Wrap a fixed confirmation message.
pub fn text_result(text: &str) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.to_string())])
}

/// Soft error result for a failed Figma API call.
pub fn api_error_result(error: &ApiError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!(
        "{}{}",
        API_ERROR_PREFIX,
        error.upstream_message()
    ))])
}

#[cfg(test)]
pub(crate) mod test_support {
    use rmcp::model::{CallToolResult, RawContent, Tool};

    /// Text of the single content block of a result.
    pub fn text_of(result: &CallToolResult) -> &str {
        assert_eq!(result.content.len(), 1, "expected one content block");
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    /// Names listed under `required` in a tool's input schema.
    pub fn required_fields(tool: &Tool) -> Vec<String> {
        let mut fields: Vec<String> = tool
            .input_schema
            .get("required")
            .and_then(|v| v.as_array())
            .map(|fields| {
                fields
                    .iter()
                    .filter_map(|f| f.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();
        fields.sort();
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::text_of;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_result_two_space_indent() {
        let result = json_result(&json!({"name": "demo"})).unwrap();
        assert_eq!(text_of(&result), "{\n  \"name\": \"demo\"\n}");
        assert_eq!(result.is_error, Some(false));
    }

    #[test]
    fn test_json_result_keeps_key_order() {
        let raw = r#"{"version":"1","name":"b","lastModified":"x"}"#;
        let body: Value = serde_json::from_str(raw).unwrap();
        let result = json_result(&body).unwrap();
        let text = text_of(&result);
        let version = text.find("version").unwrap();
        let name = text.find("name").unwrap();
        let modified = text.find("lastModified").unwrap();
        assert!(version < name && name < modified);
    }

    #[test]
    fn test_api_error_result_text() {
        let result = api_error_result(&ApiError::status(404, Some("Not found".into())));
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Figma API error: Not found");
    }

    #[test]
    fn test_descriptor_carries_name_and_description() {
        #[derive(schemars::JsonSchema)]
        #[allow(dead_code)]
        struct Params {
            /// The Figma file key
            file_key: String,
        }

        let tool = descriptor::<Params>("get_file", "Get information about a Figma file");
        assert_eq!(tool.name, "get_file");
        assert_eq!(
            tool.description.as_deref(),
            Some("Get information about a Figma file")
        );
        assert_eq!(
            tool.input_schema["properties"]["file_key"]["description"],
            "The Figma file key"
        );
    }
}
