pub mod character;
pub mod config;
pub mod error;
pub mod field;
pub mod message;
pub mod preset;
pub mod prompt;
pub mod request;
pub mod response;

pub use character::{Character, WorldInfoEntry};
pub use config::{GenerationDefaults, GeneratorConfig};
pub use error::AppError;
pub use field::{CharacterField, CoreField, Session};
pub use message::{CHAT_HISTORY_PROMPT, ChatMessage, MainContextEntry, Role};
pub use preset::PromptPreset;
pub use request::{BuildPromptOptions, GenerationRequest, OutputFormat, PromptTemplate};
pub use response::parse_response;
