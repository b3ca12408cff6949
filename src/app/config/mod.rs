//! File-backed configuration loading.
//!
//! The configuration schema and its validation live in `domain::config`.

mod load_config;

pub use load_config::{load_config, resolve_preset};
