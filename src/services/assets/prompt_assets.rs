use std::collections::BTreeMap;

use include_dir::{Dir, include_dir};
use serde::Deserialize;

use crate::domain::{AppError, MainContextEntry, PromptPreset, PromptTemplate};

static PROMPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

const PRESET_MANIFEST: &str = "preset.toml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PresetManifest {
    prompts: BTreeMap<String, PromptManifestEntry>,
    main_context: Vec<MainContextEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PromptManifestEntry {
    label: String,
    file: String,
}

/// Load the prompt preset shipped with the crate.
pub fn builtin_preset() -> Result<PromptPreset, AppError> {
    let manifest = prompt_file_content(PRESET_MANIFEST)?;
    let manifest: PresetManifest = toml::from_str(&manifest)
        .map_err(|err| AppError::Internal(format!("Malformed {}: {}", PRESET_MANIFEST, err)))?;

    let mut prompts = BTreeMap::new();
    for (name, entry) in manifest.prompts {
        let content = prompt_file_content(&entry.file)?;
        prompts.insert(name, PromptTemplate::new(entry.label, content.trim_end()));
    }

    Ok(PromptPreset { prompts, main_context: manifest.main_context })
}

fn prompt_file_content(path: &str) -> Result<String, AppError> {
    PROMPTS_DIR
        .get_file(path)
        .and_then(|file| file.contents_utf8())
        .map(|s| s.to_string())
        .ok_or_else(|| AppError::Internal(format!("Missing prompt asset: {}", path)))
}
