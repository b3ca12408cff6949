mod assets;
mod field_generation;
mod fixture_host;
mod prompt_assembly;
mod template_minijinja;

pub use assets::builtin_preset;
pub use field_generation::CharacterFieldGenerator;
pub use fixture_host::{FixtureHost, HostFixture, ProfileFixture};
pub use prompt_assembly::PromptAssembler;
pub use template_minijinja::MinijinjaTemplateRenderer;
