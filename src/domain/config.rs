//! Generator configuration domain model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, MainContextEntry, OutputFormat, PromptPreset, PromptTemplate};

/// Configuration loaded from `charforge.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub generation: GenerationDefaults,
    /// Prompt templates added to, or replacing, the built-in preset by name.
    #[serde(default)]
    pub prompts: BTreeMap<String, PromptTemplate>,
    /// Replaces the preset's main-context order when present.
    #[serde(default)]
    pub main_context: Option<Vec<MainContextEntry>>,
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.generation.validate()?;
        if let Some(order) = &self.main_context {
            if order.is_empty() {
                return Err(AppError::InvalidConfig(
                    "main_context must list at least one prompt".to_string(),
                ));
            }
            if order.iter().any(|entry| entry.prompt_name.trim().is_empty()) {
                return Err(AppError::InvalidConfig(
                    "main_context prompt_name must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Apply this configuration on top of `preset`.
    pub fn apply_to(&self, preset: PromptPreset) -> PromptPreset {
        preset.with_overrides(self.prompts.clone(), self.main_context.clone())
    }
}

/// Defaults for requests that do not pick their own format or budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationDefaults {
    #[serde(default)]
    pub output_format: OutputFormat,
    #[serde(default = "default_max_response_tokens")]
    pub max_response_tokens: u32,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self { output_format: OutputFormat::default(), max_response_tokens: default_max_response_tokens() }
    }
}

impl GenerationDefaults {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_response_tokens == 0 {
            return Err(AppError::InvalidConfig(
                "max_response_tokens must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_max_response_tokens() -> u32 {
    1024
}
