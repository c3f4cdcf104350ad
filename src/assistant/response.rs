use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::AssistantError;
use crate::suggestion::ExternalSuggestion;

/// Reformulated indication plus the optional protocol suggestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reformulation {
    pub reformulation: String,
    pub protocol: Option<ExternalSuggestion>,
}

/// Parse the service answer to the reformulation prompt.
///
/// Tolerates a ```json fence around the object. A missing reformulation is
/// empty; a missing, null or non-object protocol means no suggestion.
pub fn parse_reformulation_response(content: &str) -> Result<Reformulation, AssistantError> {
    let json_str = extract_json_block(content)?;

    let value: Value = serde_json::from_str(json_str)
        .map_err(|e| AssistantError::MalformedResponse(e.to_string()))?;
    let Value::Object(mut object) = value else {
        return Err(AssistantError::MalformedResponse(
            "Expected a JSON object".into(),
        ));
    };

    let reformulation = object
        .get("reformulation")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_string();

    let protocol = match object.remove("protocol") {
        Some(value @ Value::Object(_)) => Some(ExternalSuggestion::from_value(value)),
        _ => None,
    };

    Ok(Reformulation {
        reformulation,
        protocol,
    })
}

/// The JSON text, with an optional markdown code fence removed.
fn extract_json_block(content: &str) -> Result<&str, AssistantError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(AssistantError::EmptyResponse);
    }

    let Some(fence_start) = trimmed.find("```") else {
        return Ok(trimmed);
    };

    let after_fence = &trimmed[fence_start + 3..];
    let body_start = after_fence.find('\n').map_or(0, |i| i + 1);
    let body = &after_fence[body_start..];
    let body_end = body
        .find("```")
        .ok_or_else(|| AssistantError::MalformedResponse("Unclosed JSON block".into()))?;

    Ok(body[..body_end].trim())
}
