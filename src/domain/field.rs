//! Character sheet fields and the authoring session that owns them.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// The six built-in character card fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoreField {
    Name,
    Description,
    Personality,
    Scenario,
    #[serde(rename = "first_mes")]
    FirstMessage,
    #[serde(rename = "mes_example")]
    ExampleDialogue,
}

impl CoreField {
    pub const ALL: [CoreField; 6] = [
        CoreField::Name,
        CoreField::Description,
        CoreField::Personality,
        CoreField::Scenario,
        CoreField::FirstMessage,
        CoreField::ExampleDialogue,
    ];

    /// Field identifier as used in requests, XML tags and JSON keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            CoreField::Name => "name",
            CoreField::Description => "description",
            CoreField::Personality => "personality",
            CoreField::Scenario => "scenario",
            CoreField::FirstMessage => "first_mes",
            CoreField::ExampleDialogue => "mes_example",
        }
    }

    pub fn default_label(&self) -> &'static str {
        match self {
            CoreField::Name => "Name",
            CoreField::Description => "Description",
            CoreField::Personality => "Personality",
            CoreField::Scenario => "Scenario",
            CoreField::FirstMessage => "First Message",
            CoreField::ExampleDialogue => "Example Dialogue",
        }
    }
}

impl fmt::Display for CoreField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoreField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoreField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unknown character field '{}'", s))
    }
}

/// One editable field of the character sheet.
///
/// `label` doubles as the template lookup key, so it must be unique across
/// the core and draft fields of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterField {
    /// Field-specific generation instructions.
    #[serde(default)]
    pub prompt: String,
    /// Current text.
    #[serde(default)]
    pub value: String,
    pub label: String,
}

impl CharacterField {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), ..Self::default() }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

/// Editable state of the character being authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Indexes into the host's character roster, in string form.
    #[serde(default)]
    pub selected_character_indexes: Vec<String>,
    #[serde(default)]
    pub selected_world_names: BTreeSet<String>,
    /// Always holds all six core fields; supplied entries overlay the defaults.
    #[serde(default = "default_core_fields", deserialize_with = "deserialize_core_fields")]
    pub fields: BTreeMap<CoreField, CharacterField>,
    /// User-defined fields keyed by identifier.
    #[serde(default)]
    pub draft_fields: BTreeMap<String, CharacterField>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Session with every core field present, labelled and empty.
    pub fn new() -> Self {
        Self {
            selected_character_indexes: Vec::new(),
            selected_world_names: BTreeSet::new(),
            fields: default_core_fields(),
            draft_fields: BTreeMap::new(),
        }
    }

    pub fn field_mut(&mut self, field: CoreField) -> &mut CharacterField {
        self.fields.entry(field).or_insert_with(|| CharacterField::new(field.default_label()))
    }

    /// Resolve a target field identifier.
    ///
    /// Precedence: a draft field with that key wins; otherwise the core field
    /// whose identifier matches. Callers may deliberately shadow a core field
    /// with a draft of the same name.
    pub fn resolve_field(&self, target: &str) -> Option<&CharacterField> {
        if let Some(field) = self.draft_fields.get(target) {
            return Some(field);
        }
        target.parse::<CoreField>().ok().and_then(|core| self.fields.get(&core))
    }
}

fn default_core_fields() -> BTreeMap<CoreField, CharacterField> {
    CoreField::ALL
        .into_iter()
        .map(|field| (field, CharacterField::new(field.default_label())))
        .collect()
}

fn deserialize_core_fields<'de, D>(deserializer: D) -> Result<BTreeMap<CoreField, CharacterField>, D::Error>
where
    D: Deserializer<'de>,
{
    let supplied = BTreeMap::<CoreField, CharacterField>::deserialize(deserializer)?;
    let mut fields = default_core_fields();
    fields.extend(supplied);
    Ok(fields)
}
