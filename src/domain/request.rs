use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{Character, MainContextEntry, Session, WorldInfoEntry};

/// Shape the model is asked to answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Xml,
    Json,
    None,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Xml => "xml",
            OutputFormat::Json => "json",
            OutputFormat::None => "none",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xml" => Ok(OutputFormat::Xml),
            "json" => Ok(OutputFormat::Json),
            "none" => Ok(OutputFormat::None),
            other => Err(format!("unknown output format '{}': expected xml, json or none", other)),
        }
    }
}

/// A named prompt template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptTemplate {
    #[serde(default)]
    pub label: String,
    pub content: String,
}

impl PromptTemplate {
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self { label: label.into(), content: content.into() }
    }
}

/// Options forwarded untouched to the host's base prompt builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildPromptOptions {
    pub preset_name: Option<String>,
    pub context_name: Option<String>,
    pub instruct_name: Option<String>,
    pub sysprompt_name: Option<String>,
    pub ignore_character_fields: bool,
    pub ignore_world_info: bool,
    pub ignore_author_note: bool,
    pub include_names: bool,
    /// Token budget for the chat history, when the host should not use the profile's.
    pub max_context: Option<u32>,
}

/// Full input to one field generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub profile_id: String,
    /// Raw user instructions, before host parameter substitution.
    pub prompt: String,
    pub build_options: BuildPromptOptions,
    pub session: Session,
    pub all_characters: Vec<Character>,
    /// Lorebook entries grouped by world name.
    pub lorebooks: BTreeMap<String, Vec<WorldInfoEntry>>,
    pub prompts: BTreeMap<String, PromptTemplate>,
    /// Text exposed to templates as `active_format_instructions`.
    pub format_description: String,
    pub main_context: Vec<MainContextEntry>,
    pub max_response_tokens: u32,
    /// Identifier of the field to generate (core field id or draft key).
    pub target_field: String,
    pub output_format: OutputFormat,
}
