//! Prompt context construction and placeholder handling.

pub mod context;
pub mod placeholder;

pub use context::{
    CHAR_PLACEHOLDER, FieldValues, ParticipantNames, TemplateContext, USER_PLACEHOLDER,
    select_characters, select_lorebooks,
};
pub use placeholder::substitute_preserving_placeholders;
