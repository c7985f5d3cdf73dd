//! 文字转语音工具：校验参数、调用一次合成接口，并按顺序流式返回消息。
//!
//! Text-to-speech tool invocation.
//!
//! An invocation is a small state machine driven by the consumer of its
//! [`MessageStream`]. Each stage queues the messages it produces; the next
//! stage only runs once the queue has been drained, so the network call is
//! issued after the caller has seen the "calling API" message and not before.
//!
//! ```text
//! Validate ──ok──▶ Synthesize ──audio──▶ Persist ──▶ Done
//!    │                 │
//!    └──err──▶ Done    └──err/empty──▶ Done
//! ```

use super::params::ToolParameters;
use super::persist::{audio_filename, save_audio};
use crate::config::Credentials;
use crate::error_code::FailureClass;
use crate::tts::{SpeechRequest, SpeechSynthesizer};
use crate::types::{BlobMeta, MessageStream, ToolMessage};
use crate::Error;
use bytes::Bytes;
use futures::{stream, StreamExt};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Converts text to speech through a configured [`SpeechSynthesizer`].
#[derive(Clone)]
pub struct TextToSpeechTool {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    credentials: Credentials,
    output_dir: PathBuf,
}

impl TextToSpeechTool {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>, credentials: Credentials) -> Self {
        Self {
            synthesizer,
            credentials,
            output_dir: std::env::temp_dir(),
        }
    }

    /// Directory the audio copy is written to (the system temp dir by default).
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Start an invocation with the host's raw parameters.
    ///
    /// Nothing runs until the stream is polled. Every failure ends the stream
    /// with a text message; none is returned as an error.
    pub fn invoke(&self, parameters: serde_json::Value) -> MessageStream {
        let invocation = Invocation {
            id: Uuid::new_v4(),
            synthesizer: Arc::clone(&self.synthesizer),
            credentials: self.credentials.clone(),
            output_dir: self.output_dir.clone(),
            pending: VecDeque::new(),
            stage: Stage::Validate(parameters),
        };

        Box::pin(stream::unfold(invocation, |mut invocation| async move {
            loop {
                if let Some(message) = invocation.pending.pop_front() {
                    return Some((message, invocation));
                }
                if !invocation.advance().await {
                    return None;
                }
            }
        })
        .fuse())
    }
}

enum Stage {
    Validate(serde_json::Value),
    Synthesize(SpeechRequest),
    Persist { request: SpeechRequest, audio: Bytes },
    Done,
}

struct Invocation {
    id: Uuid,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    credentials: Credentials,
    output_dir: PathBuf,
    pending: VecDeque<ToolMessage>,
    stage: Stage,
}

impl Invocation {
    /// Run the current stage. Returns `false` once there is nothing left to do.
    async fn advance(&mut self) -> bool {
        match std::mem::replace(&mut self.stage, Stage::Done) {
            Stage::Validate(parameters) => self.validate(parameters),
            Stage::Synthesize(request) => self.synthesize(request).await,
            Stage::Persist { request, audio } => self.persist(request, audio).await,
            Stage::Done => return false,
        }
        true
    }

    fn say(&mut self, text: impl Into<String>) {
        self.pending.push_back(ToolMessage::text(text));
    }

    fn validate(&mut self, parameters: serde_json::Value) {
        let request = match ToolParameters::from_value(parameters).and_then(ToolParameters::into_request) {
            Ok(request) => request,
            Err(e) => {
                debug!(invocation = %self.id, error = %e, "rejected tool parameters");
                self.say(format!("❌ {}", e));
                return;
            }
        };

        info!(
            invocation = %self.id,
            chars = request.input.chars().count(),
            voice = %request.voice,
            model = %request.model,
            "speech synthesis started"
        );
        self.say("🚀 Starting speech generation...");
        self.say(format!("📝 Text length: {} characters", request.input.chars().count()));
        self.say(format!("🎵 Voice: {}", request.voice));
        self.say(format!("⚡ Speed: {:?}x", request.speed));
        self.say("🔄 Calling EdgeTTS API...");
        self.stage = Stage::Synthesize(request);
    }

    async fn synthesize(&mut self, request: SpeechRequest) {
        let result = self.synthesizer.synthesize(&self.credentials, &request).await;
        match result {
            Ok(audio) if !audio.is_empty() => {
                self.say("✅ Speech generated successfully");
                self.say(format!("📊 Audio size: {} bytes", audio.len()));
                self.say("💾 Saving audio file locally...");
                self.stage = Stage::Persist { request, audio };
            }
            Ok(_) => {
                warn!(invocation = %self.id, "EdgeTTS API returned an empty body");
                self.say("❌ EdgeTTS API returned an empty response");
            }
            Err(e) => {
                let class = FailureClass::of(&e);
                warn!(invocation = %self.id, class = %class, error = %e, "speech synthesis failed");
                self.say(failure_message(class, &e));
            }
        }
    }

    async fn persist(&mut self, request: SpeechRequest, audio: Bytes) {
        let filename = audio_filename(&request.response_format, SystemTime::now());
        let meta = BlobMeta::new(request.mime_type());

        match save_audio(&self.output_dir, &filename, &audio).await {
            Ok(path) => {
                self.say(format!("✅ Audio file saved to: {}", path.display()));
                let meta = meta.saved_as(filename, path, audio.len() as u64);
                self.pending.push_back(ToolMessage::blob(audio, meta));
            }
            Err(e) => {
                warn!(invocation = %self.id, error = %e, "could not save audio locally");
                self.say(format!("⚠️ Local save failed: {}", e));
                self.say("📁 Returning audio content");
                self.pending.push_back(ToolMessage::blob(audio, meta));
            }
        }

        info!(invocation = %self.id, "speech synthesis completed");
        self.say("🎉 Speech conversion complete!");
    }
}

fn failure_message(class: FailureClass, error: &Error) -> String {
    match class {
        FailureClass::Unauthorized => "❌ EdgeTTS API key is invalid or expired".to_string(),
        FailureClass::Forbidden => "❌ EdgeTTS API key lacks permission".to_string(),
        FailureClass::NotFound => {
            "❌ EdgeTTS API endpoint not found, check the base_url setting".to_string()
        }
        FailureClass::RateLimited => {
            "❌ EdgeTTS API rate limit exceeded, please retry later".to_string()
        }
        FailureClass::ServerError => "❌ EdgeTTS server internal error".to_string(),
        FailureClass::Timeout => {
            "❌ EdgeTTS API connection timed out, check the network connection".to_string()
        }
        FailureClass::Unknown => format!("❌ Speech generation failed: {}", error),
    }
}
