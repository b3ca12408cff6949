use std::fmt;

use serde::{Deserialize, Serialize};

/// Main-context entry name that splices in the host's chat history.
pub const CHAT_HISTORY_PROMPT: &str = "chatHistory";

/// Chat role carried by an assembled message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role-tagged message sent to the model backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

/// One step of the main-context recipe: which prompt to render and under which role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MainContextEntry {
    pub prompt_name: String,
    pub role: Role,
}

impl MainContextEntry {
    pub fn new(prompt_name: impl Into<String>, role: Role) -> Self {
        Self { prompt_name: prompt_name.into(), role }
    }

    /// Whether this entry splices in the chat history instead of rendering a template.
    pub fn is_chat_history(&self) -> bool {
        self.prompt_name == CHAT_HISTORY_PROMPT
    }
}
