use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{
    AppError, BuildPromptOptions, Character, GenerationDefaults, GenerationRequest, OutputFormat,
    PromptPreset, Session, WorldInfoEntry,
};

/// Generation input read from a JSON file.
///
/// Prompts, their order and the format description are not part of the file;
/// they come from the resolved preset.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestFile {
    pub profile_id: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub build_options: BuildPromptOptions,
    #[serde(default)]
    pub session: Session,
    #[serde(default)]
    pub characters: Vec<Character>,
    #[serde(default)]
    pub lorebooks: BTreeMap<String, Vec<WorldInfoEntry>>,
    pub target_field: String,
    #[serde(default)]
    pub output_format: Option<OutputFormat>,
    #[serde(default)]
    pub max_response_tokens: Option<u32>,
}

impl RequestFile {
    pub fn from_json(content: &str) -> Result<Self, AppError> {
        serde_json::from_str(content).map_err(|err| AppError::InputParse {
            what: "request file".to_string(),
            details: err.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Complete the request with the preset and configured defaults.
    pub fn into_request(self, preset: &PromptPreset, defaults: &GenerationDefaults) -> GenerationRequest {
        let output_format = self.output_format.unwrap_or(defaults.output_format);
        GenerationRequest {
            profile_id: self.profile_id,
            prompt: self.prompt,
            build_options: self.build_options,
            session: self.session,
            all_characters: self.characters,
            lorebooks: self.lorebooks,
            prompts: preset.prompts.clone(),
            format_description: preset.format_instructions(output_format),
            main_context: preset.main_context.clone(),
            max_response_tokens: self.max_response_tokens.unwrap_or(defaults.max_response_tokens),
            target_field: self.target_field,
            output_format,
        }
    }
}
