//! Prompt assembly service.
//!
//! Turns a generation request into the ordered message list sent to the
//! model: the main-context recipe is walked in order, `chatHistory` splices in
//! the host's base prompt, every other entry renders a named template against
//! the request's template context.

use tracing::debug;

use crate::domain::prompt::{TemplateContext, substitute_preserving_placeholders};
use crate::domain::{AppError, ChatMessage, GenerationRequest};
use crate::ports::{HostPort, TemplateRenderer};

/// Builds the message list for one generation request.
pub struct PromptAssembler<'a, H: HostPort, R: TemplateRenderer> {
    host: &'a H,
    renderer: &'a R,
}

impl<'a, H: HostPort, R: TemplateRenderer> PromptAssembler<'a, H, R> {
    pub fn new(host: &'a H, renderer: &'a R) -> Self {
        Self { host, renderer }
    }

    /// Resolve the backend serving `profile_id`.
    ///
    /// Fails before any other host interaction when the profile is missing
    /// or its API cannot be mapped to a backend.
    pub fn resolve_backend(&self, profile_id: &str) -> Result<String, AppError> {
        if profile_id.trim().is_empty() {
            return Err(AppError::config_error("No connection profile selected"));
        }

        let profile = self
            .host
            .profile(profile_id)
            .ok_or_else(|| AppError::ProfileNotFound(profile_id.to_string()))?;

        profile.api.as_deref().and_then(|api| self.host.backend_for_api(api)).ok_or_else(|| {
            AppError::config_error(format!(
                "Could not determine the API for connection profile '{}'",
                profile.name
            ))
        })
    }

    /// Assemble the ordered messages for `request`.
    pub async fn assemble(&self, request: &GenerationRequest) -> Result<Vec<ChatMessage>, AppError> {
        let backend = self.resolve_backend(&request.profile_id)?;

        let user_instructions = self.host.substitute_params(&request.prompt);
        let context =
            TemplateContext::build(request, user_instructions, self.host.participant_names())?;

        let base_messages = self.host.build_base_prompt(&backend, &request.build_options).await?;

        let mut messages = Vec::new();
        for entry in &request.main_context {
            if entry.is_chat_history() {
                messages.extend(base_messages.iter().cloned());
                continue;
            }

            let Some(template) = request.prompts.get(&entry.prompt_name) else {
                debug!(prompt = %entry.prompt_name, "Skipping main context entry without a prompt");
                continue;
            };

            let rendered = self.renderer.render(&entry.prompt_name, &template.content, &context)?;
            let content = substitute_preserving_placeholders(&rendered, |text| {
                self.host.substitute_params(text)
            });

            if content.trim().is_empty() {
                debug!(prompt = %entry.prompt_name, "Dropping empty rendered prompt");
                continue;
            }
            messages.push(ChatMessage::new(entry.role, content));
        }

        debug!(backend = %backend, messages = messages.len(), "Assembled generation prompt");
        Ok(messages)
    }
}
