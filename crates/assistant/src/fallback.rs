use iglobal_i18n::Translations;

use crate::capability::{Assistant, AssistantContext, AssistantError, AssistantReply};

/// Decorator that degrades assistant failures to a fixed localized message.
///
/// Empty prompts are still rejected before reaching the inner assistant —
/// that is caller input to fix, not a collaborator outage to paper over.
#[derive(Debug, Clone)]
pub struct FallbackAssistant<A> {
    inner: A,
}

impl<A: Assistant> FallbackAssistant<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
}

impl<A: Assistant> Assistant for FallbackAssistant<A> {
    fn advise(
        &self,
        prompt: &str,
        context: &AssistantContext,
    ) -> Result<AssistantReply, AssistantError> {
        if prompt.trim().is_empty() {
            return Err(AssistantError::EmptyPrompt);
        }

        match self.inner.advise(prompt, context) {
            Ok(reply) => Ok(reply),
            Err(err) => {
                tracing::warn!(error = %err, "assistant failed, serving fallback message");
                let copy = Translations::for_language(context.language);
                Ok(AssistantReply::new(copy.assistant_unavailable))
            }
        }
    }
}
