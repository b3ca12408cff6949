//! Shared testing harness for `charforge` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Host fixture with one `local` profile on the `openai` API.
pub(crate) const HOST_FIXTURE: &str = r#"{
    "profiles": [
        {"id": "local", "name": "Local model", "api": "openai"},
        {"id": "legacy", "name": "Legacy", "api": "horde"}
    ],
    "backends": {"openai": "openai"},
    "macros": {"user": "Alex", "char": "Mira", "persona": "a cartographer"},
    "chat_history": [
        {"role": "system", "content": "Mira runs the harbor inn."},
        {"role": "user", "content": "Tell me about yourself."}
    ],
    "response": "<description>\nWeathered hands, a sailor's squint.\n</description>"
}"#;

/// Request selecting one reference character and one world.
pub(crate) const REQUEST: &str = r#"{
    "profile_id": "local",
    "prompt": "Make her look like {{persona}} would draw her",
    "session": {
        "selected_character_indexes": ["0", "7"],
        "selected_world_names": ["Harbor"],
        "fields": {
            "name": {"label": "Name", "value": "Mira"},
            "description": {"label": "Description", "prompt": "Focus on appearance"}
        },
        "draft_fields": {
            "quirks": {"label": "Quirks", "value": "Hums sea shanties"}
        }
    },
    "characters": [{"name": "Bren", "description": "The harbormaster."}],
    "lorebooks": {
        "Harbor": [
            {"comment": "Bell", "content": "The bell rings at dusk.", "disable": false},
            {"comment": "Smugglers", "content": "Hidden coves.", "disable": true}
        ],
        "Desert": [{"comment": "Dunes", "content": "Sand everywhere."}]
    },
    "target_field": "description"
}"#;

/// Testing harness providing an isolated directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub(crate) fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Write a file into the work directory and return its path.
    pub(crate) fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write the default request and host fixture.
    pub(crate) fn write_default_inputs(&self) -> (PathBuf, PathBuf) {
        (self.write("request.json", REQUEST), self.write("host.json", HOST_FIXTURE))
    }

    /// Build a command for invoking the compiled `charforge` binary.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("charforge").expect("Failed to locate charforge binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }
}
