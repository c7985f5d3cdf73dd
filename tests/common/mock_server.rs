//! Mock HTTP server setup for adapter tests

use edgetts_plugin::Credentials;
use mockito::{Matcher, Mock, Server, ServerGuard};

pub const SPEECH_PATH: &str = "/v1/audio/speech";
pub const API_KEY: &str = "test-key";

/// Test fixture that manages a mock speech endpoint
pub struct MockServerFixture {
    pub server: ServerGuard,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        Self {
            server: Server::new_async().await,
        }
    }

    /// Credentials pointing at the mock server's `/v1` base
    pub fn credentials(&self) -> Credentials {
        Credentials::new(API_KEY).with_base_url(format!("{}/v1", self.server.url()))
    }

    /// Mock `hits` successful syntheses returning `audio`
    pub async fn mock_audio(&mut self, audio: Vec<u8>, hits: usize) -> Mock {
        self.server
            .mock("POST", SPEECH_PATH)
            .match_header("authorization", format!("Bearer {}", API_KEY).as_str())
            .match_header("content-type", Matcher::Regex("application/json".into()))
            .with_status(200)
            .with_header("content-type", "audio/mpeg")
            .with_body(audio)
            .expect(hits)
            .create_async()
            .await
    }

    /// Mock an error response
    pub async fn mock_error_response(&mut self, status: usize, error_body: &str) -> Mock {
        self.server
            .mock("POST", SPEECH_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(error_body)
            .create_async()
            .await
    }
}
