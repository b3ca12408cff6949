//! charforge: generate character sheet fields for roleplay chat clients.
//!
//! A generation assembles role-tagged messages from named prompt templates,
//! the host's chat history and the character being authored, sends them
//! through the host's model backend and extracts the field value from the
//! reply. The host is injected through [`ports::HostPort`].

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::commands::{generate, parse, preview};

pub use app::commands::GenerationInputs;
pub use app::commands::parse::ParseOptions;
pub use app::commands::preview::render_text;
pub use domain::{
    AppError, BuildPromptOptions, Character, CharacterField, ChatMessage, CoreField,
    GenerationRequest, MainContextEntry, OutputFormat, PromptPreset, PromptTemplate, Role,
    Session, WorldInfoEntry, parse_response,
};
pub use ports::{BackendResponse, ConnectionProfile, HostError, HostPort, TemplateRenderer};
pub use services::{
    CharacterFieldGenerator, FixtureHost, MinijinjaTemplateRenderer, PromptAssembler,
    builtin_preset,
};

// =============================================================================
// Offline Command API
// =============================================================================

/// Assemble the messages for a request file against a host fixture.
pub async fn preview(inputs: &GenerationInputs) -> Result<Vec<ChatMessage>, AppError> {
    preview::execute(inputs).await
}

/// Run a full generation against a host fixture's canned response.
pub async fn generate(inputs: &GenerationInputs) -> Result<String, AppError> {
    generate::execute(inputs).await
}

/// Extract a field value from a saved model response.
pub fn parse(options: &ParseOptions) -> Result<String, AppError> {
    parse::execute(options)
}
