use serde::{Deserialize, Serialize};
use thiserror::Error;

use iglobal_core::{Language, Region};

/// Advisory context forwarded with every prompt.
///
/// Mirrors what the buyer is currently looking at: answers should speak to
/// the selected purchasing region, in the selected language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantContext {
    pub region: Region,
    pub language: Language,
}

/// Advisory text returned by an assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub content: String,
}

impl AssistantReply {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssistantError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("assistant unavailable: {0}")]
    Unavailable(String),
}

/// Injected advisory capability.
///
/// Implementations move text and nothing else; they must not touch domain
/// state. Network transport and its cancellation/timeout discipline belong to
/// the implementation, not to callers of this trait.
pub trait Assistant: Send + Sync {
    fn advise(
        &self,
        prompt: &str,
        context: &AssistantContext,
    ) -> Result<AssistantReply, AssistantError>;
}
