//! # edgetts-plugin
//!
//! 文字转语音插件：调用兼容 OpenAI 的 EdgeTTS 接口，把文本合成为音频。
//!
//! Text-to-speech plugin backed by an OpenAI-compatible EdgeTTS endpoint.
//!
//! ## Overview
//!
//! A host runtime configures the plugin once with [`Credentials`] (validated by
//! [`provider::EdgeTtsProvider`] with a single probe request) and then invokes
//! the `text_to_speech` tool with per-call parameters. Each invocation performs
//! at most one synthesis request and streams [`ToolMessage`]s back: progress
//! text, then the audio as one blob.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use edgetts_plugin::{Credentials, EdgeTtsPlugin, ToolMessage};
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> edgetts_plugin::Result<()> {
//!     let plugin = EdgeTtsPlugin::from_env()?;
//!     let credentials = Credentials::new("your-api-key");
//!     plugin.provider().validate_credentials(&credentials).await?;
//!
//!     let tool = plugin.text_to_speech(credentials);
//!     let mut messages = tool.invoke(serde_json::json!({ "input_text": "你好，世界" }));
//!     while let Some(message) = messages.next().await {
//!         match message {
//!             ToolMessage::Text(text) => println!("{text}"),
//!             ToolMessage::Blob { blob, meta } => println!("{} bytes of {}", blob.len(), meta.mime_type),
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`tts`] | Speech synthesis adapter (HTTP client and trait) |
//! | [`provider`] | Configuration-time credential validation |
//! | [`tool`] | The `text_to_speech` tool and its parameters |
//! | [`types`] | Messages streamed back to the host |
//! | [`plugins`] | Host-facing traits and plugin wiring |
//! | [`error_code`] | Failure classification for adapter errors |
//! | [`config`] | Credentials and environment settings |

pub mod config;
pub mod error_code;
pub mod plugins;
pub mod provider;
pub mod tool;
pub mod transport;
pub mod tts;
pub mod types;

// Re-export main types for convenience
pub use config::{Credentials, PluginEnv};
pub use plugins::{EdgeTtsPlugin, Tool, ToolProvider};
pub use provider::{CredentialError, EdgeTtsProvider};
pub use tool::TextToSpeechTool;
pub use types::{BlobMeta, MessageStream, ToolMessage};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
