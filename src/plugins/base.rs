//! Base plugin types: the seams a host runtime drives.

use crate::config::Credentials;
use crate::provider::EdgeTtsProvider;
use crate::tool::TextToSpeechTool;
use crate::types::MessageStream;
use crate::Result;
use async_trait::async_trait;

/// Configuration-time side of a plugin.
///
/// An `Err` rejects the configuration before any tool is invoked.
#[async_trait]
pub trait ToolProvider: Send + Sync {
    fn name(&self) -> &str;
    async fn validate_credentials(&self, credentials: &Credentials) -> Result<()>;
}

/// Invocation-time side of a plugin.
///
/// Tools report every problem inside the returned stream; there is no error path.
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn invoke(&self, parameters: serde_json::Value) -> MessageStream;
}

#[async_trait]
impl ToolProvider for EdgeTtsProvider {
    fn name(&self) -> &str {
        "edgetts"
    }
    async fn validate_credentials(&self, credentials: &Credentials) -> Result<()> {
        EdgeTtsProvider::validate_credentials(self, credentials).await?;
        Ok(())
    }
}

impl Tool for TextToSpeechTool {
    fn name(&self) -> &str {
        "text_to_speech"
    }
    fn invoke(&self, parameters: serde_json::Value) -> MessageStream {
        TextToSpeechTool::invoke(self, parameters)
    }
}
