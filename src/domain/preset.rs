use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{MainContextEntry, OutputFormat, PromptTemplate};

/// Named prompt templates plus the order they are sent in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPreset {
    pub prompts: BTreeMap<String, PromptTemplate>,
    pub main_context: Vec<MainContextEntry>,
}

impl PromptPreset {
    /// Prompt name holding the format description for `format`.
    pub fn format_prompt_name(format: OutputFormat) -> String {
        format!("format_{}", format.as_str())
    }

    /// Format description text for `format`, empty when the preset has none.
    pub fn format_instructions(&self, format: OutputFormat) -> String {
        self.prompts
            .get(&Self::format_prompt_name(format))
            .map(|prompt| prompt.content.clone())
            .unwrap_or_default()
    }

    /// Layer overrides on top of this preset.
    ///
    /// Prompts are replaced or added by name; a non-empty main context replaces
    /// the whole order.
    pub fn with_overrides(
        mut self,
        prompts: BTreeMap<String, PromptTemplate>,
        main_context: Option<Vec<MainContextEntry>>,
    ) -> Self {
        self.prompts.extend(prompts);
        if let Some(order) = main_context.filter(|order| !order.is_empty()) {
            self.main_context = order;
        }
        self
    }
}
