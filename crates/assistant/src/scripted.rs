use crate::capability::{Assistant, AssistantContext, AssistantError, AssistantReply};

/// In-process assistant that replays a fixed advisory script.
///
/// Stands in for the external generative-language collaborator in tests and
/// demos; real deployments inject their own [`Assistant`] implementation.
#[derive(Debug, Clone)]
pub struct ScriptedAssistant {
    script: String,
}

impl ScriptedAssistant {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

impl Assistant for ScriptedAssistant {
    fn advise(
        &self,
        prompt: &str,
        context: &AssistantContext,
    ) -> Result<AssistantReply, AssistantError> {
        if prompt.trim().is_empty() {
            return Err(AssistantError::EmptyPrompt);
        }
        tracing::debug!(region = %context.region, language = %context.language, "scripted reply");
        Ok(AssistantReply::new(self.script.clone()))
    }
}
