use std::path::PathBuf;

use crate::app::config::{load_config, resolve_preset};
use crate::domain::{AppError, GenerationRequest};
use crate::services::{CharacterFieldGenerator, FixtureHost, MinijinjaTemplateRenderer};

use super::request_file::RequestFile;

/// Files describing one offline generation.
#[derive(Debug, Clone)]
pub struct GenerationInputs {
    /// JSON request file.
    pub request: PathBuf,
    /// JSON host fixture.
    pub host: PathBuf,
    /// Optional `charforge.toml`.
    pub config: Option<PathBuf>,
}

pub(crate) type FixtureGenerator = CharacterFieldGenerator<FixtureHost, MinijinjaTemplateRenderer>;

impl GenerationInputs {
    /// Load every input and wire a generator around the fixture host.
    pub(crate) fn load(&self) -> Result<(GenerationRequest, FixtureGenerator), AppError> {
        let config = load_config(self.config.as_deref())?;
        let preset = resolve_preset(&config)?;
        let request = RequestFile::load(&self.request)?.into_request(&preset, &config.generation);
        let host = FixtureHost::load(&self.host)?;

        Ok((request, CharacterFieldGenerator::new(host, MinijinjaTemplateRenderer::new())))
    }
}
