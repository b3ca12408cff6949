//! Chat host port definition.

use std::error::Error;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::prompt::ParticipantNames;
use crate::domain::{BuildPromptOptions, ChatMessage};

/// A saved connection profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionProfile {
    pub id: String,
    pub name: String,
    /// Backend API family, e.g. `openai` or `textgenerationwebui`.
    pub api: Option<String>,
}

/// Model response returned by the host's request service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendResponse {
    pub content: String,
}

/// Error raised by the host or its backend.
///
/// Carried through the pipeline untouched.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HostError {
    message: String,
    #[source]
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), source: None }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self { message: message.into(), source: Some(source.into()) }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Port for the chat host services consumed by field generation.
#[async_trait]
pub trait HostPort: Send + Sync {
    /// Look up a connection profile by id.
    fn profile(&self, profile_id: &str) -> Option<ConnectionProfile>;

    /// Backend identifier currently selected for an API family.
    fn backend_for_api(&self, api: &str) -> Option<String>;

    /// Active persona and character names, when the host has them.
    fn participant_names(&self) -> ParticipantNames;

    /// Expand host-level macros. Must be idempotent on already-resolved text.
    fn substitute_params(&self, text: &str) -> String;

    /// Build the chat context (system prompt, memory, history, persona) for a backend.
    async fn build_base_prompt(
        &self,
        backend: &str,
        options: &BuildPromptOptions,
    ) -> Result<Vec<ChatMessage>, HostError>;

    /// Send messages through a connection profile.
    async fn send_request(
        &self,
        profile_id: &str,
        messages: &[ChatMessage],
        max_response_tokens: u32,
    ) -> Result<BackendResponse, HostError>;
}
