//! 凭据校验：结构检查后发送一次最小的合成探测请求。
//!
//! Credential validation.

use super::error::CredentialError;
use crate::config::Credentials;
use crate::error_code::FailureClass;
use crate::tts::{SpeechRequest, SpeechSynthesizer};
use std::sync::Arc;
use tracing::{info, warn};

/// Text sent by the probe; short enough to be cheap.
const PROBE_INPUT: &str = "测试";

/// Any real audio file is at least this long.
const MIN_PROBE_AUDIO_BYTES: usize = 100;

/// Validates EdgeTTS credentials before the host accepts a configuration.
#[derive(Clone)]
pub struct EdgeTtsProvider {
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl EdgeTtsProvider {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { synthesizer }
    }

    /// Check `credentials`, short-circuiting on the first problem.
    ///
    /// Structural checks run before any network traffic; only credentials that
    /// pass them are tried against the endpoint with one probe request.
    pub async fn validate_credentials(&self, credentials: &Credentials) -> Result<(), CredentialError> {
        check_structure(credentials)?;
        self.probe(credentials).await?;
        info!(base_url = credentials.base_url(), "EdgeTTS credentials validated");
        Ok(())
    }

    async fn probe(&self, credentials: &Credentials) -> Result<(), CredentialError> {
        let request = SpeechRequest::new(PROBE_INPUT);
        let audio = match self.synthesizer.synthesize(credentials, &request).await {
            Ok(audio) => audio,
            Err(e) => {
                let class = FailureClass::for_credentials(&e);
                warn!(class = %class, error = %e, "EdgeTTS credential probe failed");
                return Err(CredentialError::from_probe_failure(class, e.to_string()));
            }
        };

        if audio.is_empty() {
            return Err(CredentialError::InvalidResponse("empty audio body".into()));
        }
        if audio.len() < MIN_PROBE_AUDIO_BYTES {
            return Err(CredentialError::InvalidResponse(format!(
                "audio body of {} bytes is too short",
                audio.len()
            )));
        }
        Ok(())
    }
}

fn check_structure(credentials: &Credentials) -> Result<(), CredentialError> {
    if credentials.api_key.trim().is_empty() {
        return Err(CredentialError::MissingField("api_key"));
    }
    let base_url = credentials.base_url();
    if base_url.is_empty() || !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(CredentialError::InvalidUrlFormat(base_url.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structure_checks() {
        assert_eq!(
            check_structure(&Credentials::new("  ")),
            Err(CredentialError::MissingField("api_key"))
        );
        assert_eq!(
            check_structure(&Credentials::new("k").with_base_url("")),
            Err(CredentialError::InvalidUrlFormat(String::new()))
        );
        assert_eq!(
            check_structure(&Credentials::new("k").with_base_url("ftp://tts.example.com")),
            Err(CredentialError::InvalidUrlFormat("ftp://tts.example.com".into()))
        );
        assert!(check_structure(&Credentials::new("k")).is_ok());
        assert!(check_structure(&Credentials::new("k").with_base_url("http://127.0.0.1:5050/v1")).is_ok());
    }
}
