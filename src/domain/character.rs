//! Host-owned records fed to prompt templates as pass-through data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A character known to the chat host.
///
/// Only the card fields the built-in prompts read are named; anything else the
/// host stores is kept in `extra` and stays visible to templates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub personality: String,
    #[serde(default)]
    pub scenario: String,
    #[serde(default)]
    pub first_mes: String,
    #[serde(default)]
    pub mes_example: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Character {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }
}

/// A lorebook (world info) entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldInfoEntry {
    #[serde(default)]
    pub uid: Option<i64>,
    #[serde(default)]
    pub key: Vec<String>,
    #[serde(default)]
    pub keysecondary: Vec<String>,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub content: String,
    /// Disabled entries never reach a template.
    #[serde(default)]
    pub disable: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorldInfoEntry {
    pub fn new(comment: impl Into<String>, content: impl Into<String>) -> Self {
        Self { comment: comment.into(), content: content.into(), ..Self::default() }
    }

    pub fn disabled(mut self) -> Self {
        self.disable = true;
        self
    }

    pub fn is_enabled(&self) -> bool {
        !self.disable
    }
}
