//! Configuration-time credential validation

mod common;

use common::MockSynthesizer;
use edgetts_plugin::config::DEFAULT_BASE_URL;
use edgetts_plugin::tts::SpeechRequest;
use edgetts_plugin::{CredentialError, Credentials, EdgeTtsProvider, Error, ToolProvider};

fn valid_credentials() -> Credentials {
    Credentials::new("sk-test").with_base_url("https://tts.example.com/v1")
}

#[tokio::test]
async fn test_empty_api_key_fails_before_any_call() {
    let mock = MockSynthesizer::returning(vec![0u8; 512]);
    let provider = EdgeTtsProvider::new(mock.clone());

    let err = provider
        .validate_credentials(&Credentials::new(""))
        .await
        .unwrap_err();

    assert_eq!(err, CredentialError::MissingField("api_key"));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_bad_url_scheme_fails_before_any_call() {
    let mock = MockSynthesizer::returning(vec![0u8; 512]);
    let provider = EdgeTtsProvider::new(mock.clone());

    for url in ["", "tts.example.com/v1", "ftp://tts.example.com/v1"] {
        let err = provider
            .validate_credentials(&Credentials::new("sk-test").with_base_url(url))
            .await
            .unwrap_err();
        assert!(
            matches!(err, CredentialError::InvalidUrlFormat(_)),
            "{url:?} gave {err:?}"
        );
    }
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_probe_uses_fixed_minimal_request() {
    let mock = MockSynthesizer::returning(vec![1u8; 512]);
    let provider = EdgeTtsProvider::new(mock.clone());

    provider
        .validate_credentials(&Credentials::new("sk-test"))
        .await
        .expect("credentials should validate");

    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    let (base_url, request) = &calls[0];
    assert_eq!(base_url, DEFAULT_BASE_URL);
    assert_eq!(
        request,
        &SpeechRequest {
            model: "tts-1".into(),
            input: "测试".into(),
            voice: "zh-CN-XiaoxiaoNeural".into(),
            response_format: "mp3".into(),
            speed: 1.0,
        }
    );
}

#[tokio::test]
async fn test_probe_error_mentioning_401_is_unauthorized() {
    let mock = MockSynthesizer::failing("Error code: 401 - {'error': 'bad key'}");
    let provider = EdgeTtsProvider::new(mock.clone());

    let err = provider
        .validate_credentials(&valid_credentials())
        .await
        .unwrap_err();

    assert_eq!(err, CredentialError::Unauthorized);
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_probe_failures_are_classified() {
    let cases: Vec<(std::sync::Arc<MockSynthesizer>, CredentialError)> = vec![
        (
            MockSynthesizer::failing_with(|| Error::Remote {
                status: 403,
                message: "nope".into(),
            }),
            CredentialError::Forbidden,
        ),
        (
            MockSynthesizer::failing("404 page Not Found"),
            CredentialError::EndpointNotFound,
        ),
        (
            MockSynthesizer::failing("request timeout after 60s"),
            CredentialError::Timeout,
        ),
        (
            MockSynthesizer::failing("request timeout after 500ms"),
            CredentialError::Timeout,
        ),
        (
            MockSynthesizer::failing("rate limit gateway timeout"),
            CredentialError::Timeout,
        ),
    ];

    for (mock, expected) in cases {
        let err = EdgeTtsProvider::new(mock)
            .validate_credentials(&valid_credentials())
            .await
            .unwrap_err();
        assert_eq!(err, expected);
    }
}

#[tokio::test]
async fn test_unclassified_probe_failure_keeps_detail() {
    let mock = MockSynthesizer::failing_with(|| Error::Remote {
        status: 429,
        message: "slow down".into(),
    });

    let err = EdgeTtsProvider::new(mock)
        .validate_credentials(&valid_credentials())
        .await
        .unwrap_err();

    match err {
        CredentialError::Unknown(detail) => assert!(detail.contains("slow down"), "{detail}"),
        other => panic!("expected Unknown, got {other:?}"),
    }
}

#[tokio::test]
async fn test_short_or_empty_audio_is_invalid_response() {
    for len in [0usize, 1, 99] {
        let mock = MockSynthesizer::returning(vec![0u8; len]);
        let err = EdgeTtsProvider::new(mock)
            .validate_credentials(&valid_credentials())
            .await
            .unwrap_err();
        assert!(matches!(err, CredentialError::InvalidResponse(_)), "{len} bytes");
    }

    let mock = MockSynthesizer::returning(vec![0u8; 100]);
    assert!(EdgeTtsProvider::new(mock)
        .validate_credentials(&valid_credentials())
        .await
        .is_ok());
}

#[tokio::test]
async fn test_host_trait_surfaces_credential_error() {
    let provider = EdgeTtsProvider::new(MockSynthesizer::failing("401 Unauthorized"));
    let provider: &dyn ToolProvider = &provider;

    let err = provider
        .validate_credentials(&valid_credentials())
        .await
        .unwrap_err();

    assert_eq!(provider.name(), "edgetts");
    assert!(matches!(err, Error::Credential(CredentialError::Unauthorized)));
}
