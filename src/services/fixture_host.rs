//! File-backed chat host for running the pipeline outside a chat client.
//!
//! The fixture is a JSON document:
//!
//! ```json
//! {
//!   "profiles": [{ "id": "local", "name": "Local", "api": "openai" }],
//!   "backends": { "openai": "openai" },
//!   "macros": { "user": "Alex", "char": "Mira" },
//!   "chat_history": [{ "role": "system", "content": "..." }],
//!   "response": "<description>...</description>"
//! }
//! ```
//!
//! `macros` drives parameter substitution (`{{key}}` → value); its `user` and
//! `char` entries are the participant names. `response` is the canned model
//! reply returned by `send_request`; no network I/O is performed.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::domain::prompt::ParticipantNames;
use crate::domain::{AppError, BuildPromptOptions, ChatMessage};
use crate::ports::{BackendResponse, ConnectionProfile, HostError, HostPort};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostFixture {
    #[serde(default)]
    pub profiles: Vec<ProfileFixture>,
    /// API family → selected backend identifier.
    #[serde(default)]
    pub backends: BTreeMap<String, String>,
    #[serde(default)]
    pub macros: BTreeMap<String, String>,
    #[serde(default)]
    pub chat_history: Vec<ChatMessage>,
    #[serde(default)]
    pub response: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileFixture {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub api: Option<String>,
}

/// Host backed by a [`HostFixture`].
#[derive(Debug, Clone)]
pub struct FixtureHost {
    fixture: HostFixture,
}

impl FixtureHost {
    pub fn new(fixture: HostFixture) -> Self {
        Self { fixture }
    }

    pub fn from_json(content: &str) -> Result<Self, AppError> {
        let fixture = serde_json::from_str(content).map_err(|err| AppError::InputParse {
            what: "host fixture".to_string(),
            details: err.to_string(),
        })?;
        Ok(Self::new(fixture))
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

#[async_trait]
impl HostPort for FixtureHost {
    fn profile(&self, profile_id: &str) -> Option<ConnectionProfile> {
        self.fixture.profiles.iter().find(|profile| profile.id == profile_id).map(|profile| {
            ConnectionProfile {
                id: profile.id.clone(),
                name: profile.name.clone(),
                api: profile.api.clone(),
            }
        })
    }

    fn backend_for_api(&self, api: &str) -> Option<String> {
        self.fixture.backends.get(api).cloned()
    }

    fn participant_names(&self) -> ParticipantNames {
        ParticipantNames {
            user: self.fixture.macros.get("user").cloned(),
            char: self.fixture.macros.get("char").cloned(),
        }
    }

    fn substitute_params(&self, text: &str) -> String {
        self.fixture.macros.iter().fold(text.to_string(), |acc, (key, value)| {
            acc.replace(&format!("{{{{{key}}}}}"), value)
        })
    }

    async fn build_base_prompt(
        &self,
        backend: &str,
        options: &BuildPromptOptions,
    ) -> Result<Vec<ChatMessage>, HostError> {
        debug!(backend, preset = ?options.preset_name, "Serving fixture chat history");
        Ok(self.fixture.chat_history.clone())
    }

    async fn send_request(
        &self,
        profile_id: &str,
        _messages: &[ChatMessage],
        _max_response_tokens: u32,
    ) -> Result<BackendResponse, HostError> {
        self.fixture
            .response
            .clone()
            .map(|content| BackendResponse { content })
            .ok_or_else(|| {
                HostError::new(format!(
                    "Host fixture has no canned response for profile '{}'",
                    profile_id
                ))
            })
    }
}
