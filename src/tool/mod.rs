//! The `text_to_speech` tool.

mod invoke;
mod params;
mod persist;

pub use invoke::TextToSpeechTool;
pub use params::{ToolParameters, ValidationError, MAX_INPUT_CHARS, SPEED_RANGE};
