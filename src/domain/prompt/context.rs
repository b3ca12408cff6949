//! Template context for one generation call.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use crate::domain::{AppError, Character, CharacterField, GenerationRequest, WorldInfoEntry};

/// Literal placeholder used when the host has no active character name.
pub const CHAR_PLACEHOLDER: &str = "{{char}}";
/// Literal placeholder used when the host has no active persona name.
pub const USER_PLACEHOLDER: &str = "{{user}}";

/// Names of the two chat participants, when the host has them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantNames {
    pub user: Option<String>,
    pub char: Option<String>,
}

/// Every key a prompt template can read.
///
/// Rendering runs with strict undefined handling, so a misspelled key fails
/// the call instead of rendering as an empty string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateContext {
    /// User prompt after host parameter substitution.
    pub user_instructions: String,
    pub field_specific_instructions: String,
    pub target_field: String,
    pub active_format_instructions: String,
    #[serde(rename = "char")]
    pub char_name: String,
    #[serde(rename = "user")]
    pub user_name: String,
    pub characters: Vec<Character>,
    /// Selected worlds with at least one enabled entry, enabled entries only.
    pub lorebooks: BTreeMap<String, Vec<WorldInfoEntry>>,
    pub fields: FieldValues,
}

/// Current field values keyed by display label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldValues {
    pub core: BTreeMap<String, String>,
    pub draft: BTreeMap<String, String>,
}

impl TemplateContext {
    /// Build the context from a request.
    ///
    /// `user_instructions` must already have gone through host parameter
    /// substitution.
    pub fn build(
        request: &GenerationRequest,
        user_instructions: String,
        names: ParticipantNames,
    ) -> Result<Self, AppError> {
        let target = request.session.resolve_field(&request.target_field).ok_or_else(|| {
            AppError::config_error(format!(
                "Unknown target field '{}': not a core field or draft field of this session",
                request.target_field
            ))
        })?;

        Ok(Self {
            user_instructions,
            field_specific_instructions: target.prompt.clone(),
            target_field: request.target_field.clone(),
            active_format_instructions: request.format_description.clone(),
            char_name: names.char.unwrap_or_else(|| CHAR_PLACEHOLDER.to_string()),
            user_name: names.user.unwrap_or_else(|| USER_PLACEHOLDER.to_string()),
            characters: select_characters(
                &request.session.selected_character_indexes,
                &request.all_characters,
            ),
            lorebooks: select_lorebooks(&request.lorebooks, &request.session.selected_world_names),
            fields: collect_field_values(
                request.session.fields.values(),
                request.session.draft_fields.values(),
            )?,
        })
    }
}

/// Resolve selected roster indexes; anything that is not a valid index is skipped.
pub fn select_characters(indexes: &[String], all_characters: &[Character]) -> Vec<Character> {
    indexes
        .iter()
        .filter_map(|raw| {
            let character = raw.parse::<usize>().ok().and_then(|index| all_characters.get(index));
            if character.is_none() {
                debug!(index = %raw, roster = all_characters.len(), "Skipping unresolved character index");
            }
            character.cloned()
        })
        .collect()
}

/// Keep selected worlds that still have enabled entries, dropping disabled entries.
pub fn select_lorebooks(
    lorebooks: &BTreeMap<String, Vec<WorldInfoEntry>>,
    selected: &BTreeSet<String>,
) -> BTreeMap<String, Vec<WorldInfoEntry>> {
    lorebooks
        .iter()
        .filter(|(world, entries)| !entries.is_empty() && selected.contains(*world))
        .filter_map(|(world, entries)| {
            let enabled: Vec<WorldInfoEntry> =
                entries.iter().filter(|entry| entry.is_enabled()).cloned().collect();
            if enabled.is_empty() { None } else { Some((world.clone(), enabled)) }
        })
        .collect()
}

fn collect_field_values<'a>(
    core: impl Iterator<Item = &'a CharacterField>,
    draft: impl Iterator<Item = &'a CharacterField>,
) -> Result<FieldValues, AppError> {
    let mut seen = BTreeSet::new();
    let core = values_by_label(core, &mut seen)?;
    let draft = values_by_label(draft, &mut seen)?;
    Ok(FieldValues { core, draft })
}

fn values_by_label<'a>(
    fields: impl Iterator<Item = &'a CharacterField>,
    seen: &mut BTreeSet<String>,
) -> Result<BTreeMap<String, String>, AppError> {
    let mut values = BTreeMap::new();
    for field in fields {
        if !seen.insert(field.label.clone()) {
            return Err(AppError::config_error(format!(
                "Duplicate field label '{}': labels must be unique across core and draft fields",
                field.label
            )));
        }
        values.insert(field.label.clone(), field.value.clone());
    }
    Ok(values)
}
