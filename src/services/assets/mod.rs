mod prompt_assets;

pub use prompt_assets::builtin_preset;
