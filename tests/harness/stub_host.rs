//! Scriptable host for library contract tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use charforge::domain::prompt::ParticipantNames;
use charforge::{BackendResponse, BuildPromptOptions, ChatMessage, ConnectionProfile, HostError, HostPort};

/// Host with a single `main` profile; substitution expands participant tokens unconditionally.
#[derive(Clone, Default)]
pub(crate) struct StubHost {
    pub(crate) history: Vec<ChatMessage>,
    pub(crate) response: String,
    pub(crate) names: Option<(String, String)>,
    pub(crate) dispatched: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

impl StubHost {
    pub(crate) fn with_history(history: Vec<ChatMessage>) -> Self {
        Self { history, ..Self::default() }
    }

    pub(crate) fn dispatch_count(&self) -> usize {
        self.dispatched.lock().unwrap().len()
    }
}

#[async_trait]
impl HostPort for StubHost {
    fn profile(&self, profile_id: &str) -> Option<ConnectionProfile> {
        (profile_id == "main").then(|| ConnectionProfile {
            id: "main".to_string(),
            name: "Main".to_string(),
            api: Some("textgenerationwebui".to_string()),
        })
    }

    fn backend_for_api(&self, api: &str) -> Option<String> {
        (api == "textgenerationwebui").then(|| "koboldcpp".to_string())
    }

    fn participant_names(&self) -> ParticipantNames {
        match &self.names {
            Some((user, char)) => {
                ParticipantNames { user: Some(user.clone()), char: Some(char.clone()) }
            }
            None => ParticipantNames::default(),
        }
    }

    fn substitute_params(&self, text: &str) -> String {
        text.replace("{{user}}", "USER").replace("{{char}}", "CHAR")
    }

    async fn build_base_prompt(
        &self,
        backend: &str,
        _options: &BuildPromptOptions,
    ) -> Result<Vec<ChatMessage>, HostError> {
        assert_eq!(backend, "koboldcpp");
        Ok(self.history.clone())
    }

    async fn send_request(
        &self,
        _profile_id: &str,
        messages: &[ChatMessage],
        _max_response_tokens: u32,
    ) -> Result<BackendResponse, HostError> {
        self.dispatched.lock().unwrap().push(messages.to_vec());
        Ok(BackendResponse { content: self.response.clone() })
    }
}
