use std::collections::BTreeMap;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::prompt::ParticipantNames;
use crate::domain::{BuildPromptOptions, ChatMessage};
use crate::ports::{BackendResponse, ConnectionProfile, HostError, HostPort};

/// A request captured by [`FakeHost::send_request`].
#[derive(Debug, Clone, PartialEq)]
pub struct SentRequest {
    pub profile_id: String,
    pub messages: Vec<ChatMessage>,
    pub max_response_tokens: u32,
}

/// In-memory host: profile `local` on the `openai` API, participants Alex and Mira.
///
/// Substitution expands `{{user}}`, `{{char}}` and `{{persona}}` unconditionally.
#[derive(Clone)]
pub struct FakeHost {
    profiles: BTreeMap<String, ConnectionProfile>,
    backends: BTreeMap<String, String>,
    participants: ParticipantNames,
    base_prompt: Result<Vec<ChatMessage>, String>,
    response: Result<String, String>,
    base_prompt_calls: Arc<Mutex<usize>>,
    sent_requests: Arc<Mutex<Vec<SentRequest>>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            profiles: BTreeMap::new(),
            backends: BTreeMap::from([("openai".to_string(), "openai".to_string())]),
            participants: ParticipantNames {
                user: Some("Alex".to_string()),
                char: Some("Mira".to_string()),
            },
            base_prompt: Ok(Vec::new()),
            response: Ok(String::new()),
            base_prompt_calls: Arc::new(Mutex::new(0)),
            sent_requests: Arc::new(Mutex::new(Vec::new())),
        }
        .with_profile("local", Some("openai"))
    }

    pub fn with_profile(mut self, id: &str, api: Option<&str>) -> Self {
        self.profiles.insert(
            id.to_string(),
            ConnectionProfile {
                id: id.to_string(),
                name: format!("{} profile", id),
                api: api.map(str::to_string),
            },
        );
        self
    }

    pub fn without_participants(mut self) -> Self {
        self.participants = ParticipantNames::default();
        self
    }

    pub fn with_base_prompt(mut self, messages: Vec<ChatMessage>) -> Self {
        self.base_prompt = Ok(messages);
        self
    }

    pub fn failing_base_prompt(mut self, message: &str) -> Self {
        self.base_prompt = Err(message.to_string());
        self
    }

    pub fn with_response(mut self, content: &str) -> Self {
        self.response = Ok(content.to_string());
        self
    }

    pub fn failing_request(mut self, message: &str) -> Self {
        self.response = Err(message.to_string());
        self
    }

    pub fn base_prompt(&self) -> Vec<ChatMessage> {
        self.base_prompt.clone().unwrap_or_default()
    }

    pub fn base_prompt_calls(&self) -> usize {
        *self.base_prompt_calls.lock().unwrap()
    }

    pub fn sent_requests(&self) -> Vec<SentRequest> {
        self.sent_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HostPort for FakeHost {
    fn profile(&self, profile_id: &str) -> Option<ConnectionProfile> {
        self.profiles.get(profile_id).cloned()
    }

    fn backend_for_api(&self, api: &str) -> Option<String> {
        self.backends.get(api).cloned()
    }

    fn participant_names(&self) -> ParticipantNames {
        self.participants.clone()
    }

    fn substitute_params(&self, text: &str) -> String {
        text.replace("{{user}}", "Alex").replace("{{char}}", "Mira").replace("{{persona}}", "Alex")
    }

    async fn build_base_prompt(
        &self,
        _backend: &str,
        _options: &BuildPromptOptions,
    ) -> Result<Vec<ChatMessage>, HostError> {
        *self.base_prompt_calls.lock().unwrap() += 1;
        self.base_prompt.clone().map_err(HostError::new)
    }

    async fn send_request(
        &self,
        profile_id: &str,
        messages: &[ChatMessage],
        max_response_tokens: u32,
    ) -> Result<BackendResponse, HostError> {
        self.sent_requests.lock().unwrap().push(SentRequest {
            profile_id: profile_id.to_string(),
            messages: messages.to_vec(),
            max_response_tokens,
        });
        self.response.clone().map(|content| BackendResponse { content }).map_err(|cause| {
            HostError::with_source("Backend request failed", io::Error::other(cause))
        })
    }
}
