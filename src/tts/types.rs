//! TTS (Text-to-Speech) types.

use serde::{Deserialize, Serialize};

pub const DEFAULT_VOICE: &str = "zh-CN-XiaoxiaoNeural";
pub const DEFAULT_MODEL: &str = "tts-1";
pub const DEFAULT_RESPONSE_FORMAT: &str = "mp3";
pub const DEFAULT_SPEED: f64 = 1.0;

/// Body of one OpenAI-compatible `audio/speech` request.
///
/// Field order matches the wire payload: `{model, input, voice, response_format, speed}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub model: String,
    pub input: String,
    pub voice: String,
    pub response_format: String,
    pub speed: f64,
}

impl SpeechRequest {
    /// A request for `input` using the default model, voice, format and speed.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            input: input.into(),
            voice: DEFAULT_VOICE.to_string(),
            response_format: DEFAULT_RESPONSE_FORMAT.to_string(),
            speed: DEFAULT_SPEED,
        }
    }

    pub fn voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    pub fn response_format(mut self, format: impl Into<String>) -> Self {
        self.response_format = format.into();
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// MIME type reported for the audio: `audio/<response_format>`.
    pub fn mime_type(&self) -> String {
        format!("audio/{}", self.response_format)
    }
}
