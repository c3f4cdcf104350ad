//! Boundary with the external generative service.
//!
//! Transport lives outside this crate: callers provide a [`LanguageModel`]
//! and the crate supplies the prompts and reads the answers back.

pub mod prompts;
pub mod response;

pub use prompts::*;
pub use response::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Indication text is empty")]
    EmptyInput,

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Empty response from generative service")]
    EmptyResponse,

    #[error("Malformed generative response: {0}")]
    MalformedResponse(String),
}

/// Text generation by the external service (allows mocking).
pub trait LanguageModel {
    /// `system` may be empty for single-turn prompts.
    fn generate(&self, system: &str, prompt: &str) -> Result<String, AssistantError>;
}

/// Reformulate a raw indication and collect the suggested protocol.
pub fn reformulate_indication<M: LanguageModel + ?Sized>(
    model: &M,
    indication: &str,
) -> Result<Reformulation, AssistantError> {
    let indication = indication.trim();
    if indication.is_empty() {
        return Err(AssistantError::EmptyInput);
    }

    let content = model.generate(REFORMULATION_SYSTEM_PROMPT, indication)?;
    let parsed = parse_reformulation_response(&content)?;
    tracing::info!(
        chars = parsed.reformulation.chars().count(),
        has_protocol = parsed.protocol.is_some(),
        "Indication reformulated"
    );
    Ok(parsed)
}
