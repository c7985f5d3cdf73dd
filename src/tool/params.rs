//! Per-invocation parameters and their validation.

use crate::tts::{SpeechRequest, DEFAULT_MODEL, DEFAULT_RESPONSE_FORMAT, DEFAULT_SPEED, DEFAULT_VOICE};
use serde::Deserialize;
use std::ops::RangeInclusive;
use thiserror::Error;

pub const SPEED_RANGE: RangeInclusive<f64> = 0.25..=4.0;

/// Longest accepted input, in characters.
pub const MAX_INPUT_CHARS: usize = 5000;

/// Parameters as forwarded by the host for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ToolParameters {
    pub input_text: Option<String>,
    pub voice: Option<String>,
    pub model: Option<String>,
    pub speed: Option<f64>,
    pub response_format: Option<String>,
}

/// A parameter problem, reported to the user as text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid tool parameters: {0}")]
    Malformed(String),

    #[error("Text content must not be empty")]
    EmptyText,

    #[error("Speed must be between 0.25 and 4.0 (got {0})")]
    SpeedOutOfRange(f64),

    #[error("Text must not exceed 5000 characters (got {0})")]
    TextTooLong(usize),
}

impl ToolParameters {
    /// Parse the host's parameter object.
    ///
    /// Missing or blank `input_text` is reported before any other field is
    /// type-checked.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ValidationError> {
        let text_is_blank = match value.get("input_text") {
            None | Some(serde_json::Value::Null) => true,
            Some(serde_json::Value::String(text)) => text.trim().is_empty(),
            Some(_) => false,
        };
        if text_is_blank {
            return Err(ValidationError::EmptyText);
        }
        serde_json::from_value(value).map_err(|e| ValidationError::Malformed(e.to_string()))
    }

    /// Validate and turn the parameters into a request, filling in defaults.
    ///
    /// Checks run in order: non-blank text, speed range, text length.
    pub fn into_request(self) -> Result<SpeechRequest, ValidationError> {
        let input = match self.input_text {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Err(ValidationError::EmptyText),
        };

        let speed = self.speed.unwrap_or(DEFAULT_SPEED);
        if !SPEED_RANGE.contains(&speed) {
            return Err(ValidationError::SpeedOutOfRange(speed));
        }

        let chars = input.chars().count();
        if chars > MAX_INPUT_CHARS {
            return Err(ValidationError::TextTooLong(chars));
        }

        Ok(SpeechRequest {
            model: or_default(self.model, DEFAULT_MODEL),
            input,
            voice: or_default(self.voice, DEFAULT_VOICE),
            response_format: or_default(self.response_format, DEFAULT_RESPONSE_FORMAT),
            speed,
        })
    }
}

// Hosts send blank strings for untouched optional form fields.
fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
