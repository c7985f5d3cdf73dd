//! Shared test doubles.
#![allow(dead_code)]

pub mod mock_server;

use async_trait::async_trait;
use bytes::Bytes;
use edgetts_plugin::tts::{SpeechRequest, SpeechSynthesizer};
use edgetts_plugin::{Credentials, Error, Result};
use std::sync::{Arc, Mutex};

type Reply = Box<dyn Fn() -> Result<Bytes> + Send + Sync>;

/// Synthesizer that answers from a script and records every call.
pub struct MockSynthesizer {
    reply: Reply,
    calls: Mutex<Vec<(String, SpeechRequest)>>,
}

impl MockSynthesizer {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn returning(audio: impl Into<Bytes>) -> Arc<Self> {
        let audio = audio.into();
        Self::new(Box::new(move || Ok(audio.clone())))
    }

    /// Fails with a runtime error whose text is `message`.
    pub fn failing(message: &'static str) -> Arc<Self> {
        Self::new(Box::new(move || Err(Error::runtime(message))))
    }

    pub fn failing_with(error: impl Fn() -> Error + Send + Sync + 'static) -> Arc<Self> {
        Self::new(Box::new(move || Err(error())))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// `(base_url, request)` for every call so far.
    pub fn calls(&self) -> Vec<(String, SpeechRequest)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(&self, credentials: &Credentials, request: &SpeechRequest) -> Result<Bytes> {
        self.calls
            .lock()
            .unwrap()
            .push((credentials.base_url().to_string(), request.clone()));
        (self.reply)()
    }
}

/// A fresh, existing directory under the system temp dir.
pub fn scratch_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("edgetts-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
