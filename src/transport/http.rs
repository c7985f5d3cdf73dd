use crate::config::PluginEnv;
use crate::Result;
use reqwest::Proxy;

/// Build the shared HTTP client from process-wide settings.
///
/// The request timeout is fixed here, once; callers cannot override it per request.
pub fn build_client(env: &PluginEnv) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .timeout(env.request_timeout)
        .user_agent(concat!("edgetts-plugin/", env!("CARGO_PKG_VERSION")));

    if let Some(proxy_url) = &env.proxy_url {
        let proxy = Proxy::all(proxy_url)
            .map_err(|e| crate::Error::Transport(TransportError::Other(format!("invalid proxy url: {}", e))))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| crate::Error::Transport(TransportError::Other(e.to_string())))
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
