//! Character field generation: assemble → send → parse.

use tracing::info;

use crate::domain::{AppError, ChatMessage, GenerationRequest, parse_response};
use crate::ports::{HostPort, TemplateRenderer};
use crate::services::PromptAssembler;

/// Generates one character sheet field through the host's model backend.
///
/// Holds no state between calls; concurrent generations only share the
/// injected host and renderer.
pub struct CharacterFieldGenerator<H: HostPort, R: TemplateRenderer> {
    host: H,
    renderer: R,
}

impl<H: HostPort, R: TemplateRenderer> CharacterFieldGenerator<H, R> {
    pub fn new(host: H, renderer: R) -> Self {
        Self { host, renderer }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Assemble the messages for `request` without sending them.
    pub async fn assemble(&self, request: &GenerationRequest) -> Result<Vec<ChatMessage>, AppError> {
        PromptAssembler::new(&self.host, &self.renderer).assemble(request).await
    }

    /// Generate the target field and return its text.
    ///
    /// No retries: any assembly, backend or parse failure aborts the call.
    pub async fn run_character_field_generation(
        &self,
        request: &GenerationRequest,
    ) -> Result<String, AppError> {
        let messages = self.assemble(request).await?;

        info!(
            profile = %request.profile_id,
            field = %request.target_field,
            messages = messages.len(),
            max_tokens = request.max_response_tokens,
            "Sending field generation request"
        );
        let response = self
            .host
            .send_request(&request.profile_id, &messages, request.max_response_tokens)
            .await?;

        let value = parse_response(&response.content, request.output_format, &request.target_field)?;
        info!(field = %request.target_field, format = %request.output_format, chars = value.len(), "Parsed field value");
        Ok(value.trim().to_string())
    }
}
