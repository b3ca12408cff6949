use crate::domain::{AppError, ChatMessage};

use super::GenerationInputs;

/// Assemble the messages a generation would send, without sending them.
pub async fn execute(inputs: &GenerationInputs) -> Result<Vec<ChatMessage>, AppError> {
    let (request, generator) = inputs.load()?;
    generator.assemble(&request).await
}

/// Human-readable rendering of assembled messages.
pub fn render_text(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|message| format!("=== {} ===\n{}", message.role, message.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}
