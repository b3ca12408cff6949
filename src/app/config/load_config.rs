//! Generator configuration loading.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, GeneratorConfig, PromptPreset};
use crate::services::builtin_preset;

/// Load and validate `charforge.toml`; no path means built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig, AppError> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };

    let content = fs::read_to_string(path)?;
    let config: GeneratorConfig = toml::from_str(&content).map_err(|err| AppError::InputParse {
        what: path.display().to_string(),
        details: err.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}

/// Built-in prompt preset with `config` applied.
pub fn resolve_preset(config: &GeneratorConfig) -> Result<PromptPreset, AppError> {
    Ok(config.apply_to(builtin_preset()?))
}
