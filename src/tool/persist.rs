//! Best-effort local copy of synthesized audio.

use crate::Result;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// `edgetts_audio_<unix-seconds>.<format>`. Two calls in the same second with
/// the same format share a name.
pub(crate) fn audio_filename(response_format: &str, now: SystemTime) -> String {
    let timestamp = now.duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
    format!("edgetts_audio_{}.{}", timestamp, response_format)
}

/// Write `audio` to `dir/filename`, overwriting any existing file.
pub(crate) async fn save_audio(dir: &Path, filename: &str, audio: &[u8]) -> Result<PathBuf> {
    let path = dir.join(filename);
    tokio::fs::write(&path, audio).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn filename_uses_unix_seconds() {
        let now = UNIX_EPOCH + Duration::from_millis(1_700_000_000_999);
        assert_eq!(audio_filename("mp3", now), "edgetts_audio_1700000000.mp3");
    }

    #[tokio::test]
    async fn save_into_missing_directory_fails() {
        let dir = std::env::temp_dir().join(format!("edgetts-missing-{}", uuid::Uuid::new_v4()));
        let err = save_audio(&dir, "a.mp3", b"abc").await.unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
