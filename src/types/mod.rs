//! 类型模块：工具向宿主流式返回的消息类型。
//!
//! # Types Module
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ToolMessage`] | Status text or binary payload streamed to the host |
//! | [`BlobMeta`] | Metadata map attached to a binary payload |
//! | [`MessageStream`] | Lazy, single-use stream of [`ToolMessage`]s |
//!
//! ## Example
//!
//! ```rust
//! use edgetts_plugin::types::{BlobMeta, ToolMessage};
//!
//! let status = ToolMessage::text("🚀 Starting speech generation...");
//! assert_eq!(status.as_text(), Some("🚀 Starting speech generation..."));
//!
//! let audio = ToolMessage::blob(bytes::Bytes::from_static(b"ID3"), BlobMeta::new("audio/mp3"));
//! assert!(audio.is_blob());
//! ```

pub mod message;

pub use message::{BlobMeta, MessageStream, ToolMessage};
