//! TTS（文字转语音）模块：调用兼容 OpenAI 的语音合成接口，返回原始音频字节。

mod client;
mod types;

pub use client::{HttpSpeechClient, HttpSpeechClientBuilder, SpeechSynthesizer};
pub use types::{
    SpeechRequest, DEFAULT_MODEL, DEFAULT_RESPONSE_FORMAT, DEFAULT_SPEED, DEFAULT_VOICE,
};
