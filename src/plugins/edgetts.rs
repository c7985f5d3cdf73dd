//! EdgeTTS plugin wiring.

use super::base::Tool;
use crate::config::{Credentials, PluginEnv};
use crate::provider::EdgeTtsProvider;
use crate::tool::TextToSpeechTool;
use crate::tts::{HttpSpeechClient, SpeechSynthesizer};
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use tracing::debug;

/// The plugin as a host sees it: one provider and its tools, sharing a single
/// synthesizer built once at start-up.
#[derive(Clone)]
pub struct EdgeTtsPlugin {
    env: PluginEnv,
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl EdgeTtsPlugin {
    /// Build the plugin from `EDGETTS_*` environment settings.
    pub fn from_env() -> Result<Self> {
        Self::new(PluginEnv::from_env()?)
    }

    pub fn new(env: PluginEnv) -> Result<Self> {
        let client = HttpSpeechClient::builder().env(env.clone()).build()?;
        debug!(timeout_secs = env.request_timeout.as_secs(), "EdgeTTS plugin initialised");
        Ok(Self::with_synthesizer(env, Arc::new(client)))
    }

    /// Use a custom synthesizer, e.g. a local engine or a test double.
    pub fn with_synthesizer(env: PluginEnv, synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { env, synthesizer }
    }

    pub fn provider(&self) -> EdgeTtsProvider {
        EdgeTtsProvider::new(Arc::clone(&self.synthesizer))
    }

    pub fn text_to_speech(&self, credentials: Credentials) -> TextToSpeechTool {
        TextToSpeechTool::new(Arc::clone(&self.synthesizer), credentials)
            .with_output_dir(self.env.output_dir())
    }

    /// Look a tool up by the name the host uses for it.
    pub fn tool(&self, name: &str, credentials: Credentials) -> Result<Box<dyn Tool>> {
        match name {
            "text_to_speech" => Ok(Box::new(self.text_to_speech(credentials))),
            other => Err(Error::configuration_with_context(
                format!("Unknown tool: {}", other),
                ErrorContext::new()
                    .with_field_path("tool")
                    .with_source("edgetts_plugin"),
            )),
        }
    }
}
