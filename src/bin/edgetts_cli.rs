//! edgetts-cli: 本地调试 EdgeTTS 插件的命令行工具
//!
//! Usage:
//!   edgetts-cli validate [CREDENTIALS]                   Validate credentials with one probe
//!   edgetts-cli speak --text <text> [OPTIONS] [CREDENTIALS]  Run the text_to_speech tool

use anyhow::{anyhow, bail, Context};
use edgetts_plugin::{Credentials, EdgeTtsPlugin, ToolMessage};
use futures::StreamExt;
use keyring::Entry;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "validate" => cmd_validate(&args[2..]).await,
        "speak" => cmd_speak(&args[2..]).await,
        "version" | "--version" | "-V" => {
            println!("edgetts-cli {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!(
        r#"edgetts-cli: EdgeTTS 插件命令行工具

USAGE:
    edgetts-cli <COMMAND> [OPTIONS]

COMMANDS:
    validate                    Validate credentials with one probe request
    speak --text <text>         Convert text to speech
    version                     Show version information
    help                        Show this help message

SPEAK OPTIONS:
    --voice <voice>             Voice id (default zh-CN-XiaoxiaoNeural)
    --model <model>             Model (default tts-1)
    --speed <speed>             0.25 - 4.0 (default 1.0)
    --format <format>           Response format (default mp3)
    --out <file>                Also copy the audio to <file>

CREDENTIALS:
    --api-key <key>             API key
    --base-url <url>            API base URL
    --credentials <file.yaml>   YAML file with api_key / base_url

ENVIRONMENT:
    EDGETTS_API_KEY             API key (after the system keyring)
    EDGETTS_BASE_URL            API base URL
    EDGETTS_HTTP_TIMEOUT_SECS   Request timeout in seconds (default 60)
    EDGETTS_PROXY_URL           Proxy for all requests
    EDGETTS_OUTPUT_DIR          Directory for saved audio (default: temp dir)
    RUST_LOG                    Log filter, e.g. edgetts_plugin=debug"#
    );
}

fn flag<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

/// Resolve credentials: flags, then the YAML file, then the keyring, then the environment.
fn resolve_credentials(args: &[String]) -> anyhow::Result<Credentials> {
    let mut credentials = match flag(args, "--credentials") {
        Some(path) => Credentials::from_yaml_file(path)
            .with_context(|| format!("reading credentials from {path}"))?,
        None => Credentials::new(String::new()),
    };

    if let Some(key) = flag(args, "--api-key") {
        credentials.api_key = key.to_string();
    }
    if credentials.api_key.is_empty() {
        credentials.api_key = keyring_api_key()
            .or_else(|| env::var("EDGETTS_API_KEY").ok())
            .unwrap_or_default();
    }

    if let Some(url) = flag(args, "--base-url") {
        credentials.base_url = Some(url.to_string());
    } else if credentials.base_url.is_none() {
        credentials.base_url = env::var("EDGETTS_BASE_URL").ok();
    }
    Ok(credentials)
}

fn keyring_api_key() -> Option<String> {
    Entry::new("edgetts", "api_key").ok()?.get_password().ok()
}

async fn cmd_validate(args: &[String]) -> anyhow::Result<()> {
    let credentials = resolve_credentials(args)?;
    let plugin = EdgeTtsPlugin::from_env()?;
    println!("Validating credentials against {}", credentials.base_url());
    match plugin.provider().validate_credentials(&credentials).await {
        Ok(()) => {
            println!("✅ Credentials are valid");
            Ok(())
        }
        Err(e) => Err(anyhow!("❌ {e}")),
    }
}

async fn cmd_speak(args: &[String]) -> anyhow::Result<()> {
    let text = flag(args, "--text").ok_or_else(|| anyhow!("--text is required"))?;
    let mut parameters = serde_json::json!({ "input_text": text });
    for (name, key) in [("--voice", "voice"), ("--model", "model"), ("--format", "response_format")] {
        if let Some(value) = flag(args, name) {
            parameters[key] = serde_json::Value::String(value.to_string());
        }
    }
    if let Some(speed) = flag(args, "--speed") {
        let speed: f64 = speed.parse().with_context(|| format!("invalid --speed '{speed}'"))?;
        parameters["speed"] = serde_json::json!(speed);
    }

    let credentials = resolve_credentials(args)?;
    let plugin = EdgeTtsPlugin::from_env()?;
    let tool = plugin.text_to_speech(credentials);

    let mut audio = None;
    let mut messages = tool.invoke(parameters);
    while let Some(message) = messages.next().await {
        match message {
            ToolMessage::Text(text) => println!("{text}"),
            ToolMessage::Blob { blob, meta } => {
                println!("🎵 Received {} bytes ({})", blob.len(), meta.mime_type);
                if let Some(path) = &meta.local_path {
                    println!("💾 Local path: {}", path.display());
                }
                audio = Some(blob);
            }
        }
    }

    let Some(audio) = audio else {
        bail!("no audio was produced");
    };
    if let Some(out) = flag(args, "--out") {
        let out = PathBuf::from(out);
        tokio::fs::write(&out, &audio)
            .await
            .with_context(|| format!("writing {}", out.display()))?;
        println!("📁 Copied audio to {}", out.display());
    }
    Ok(())
}
