use anyhow::Result;
use ksong_model::SongInfo;
use reqwest::Client;
use std::path::PathBuf;

use crate::{fetch, output};

/// Download the song's audio asset next to its record.
///
/// A record without a usable play URL (absent upstream, or the `N/A`
/// sentinel) is skipped: no request, no file, `Ok(None)`.
pub async fn download(
    client: &Client,
    info: &SongInfo,
    output_dir: &str,
) -> Result<Option<PathBuf>> {
    if !info.has_play_url() {
        tracing::info!(song = %info.song_name, "No usable play URL, skipping audio download");
        return Ok(None);
    }

    tracing::info!(song = %info.song_name, url = %info.play_url, "Downloading audio");
    let audio = fetch::bytes(client, &info.play_url).await?;
    let path = output::write_audio(&audio, &info.song_name, output_dir)?;
    tracing::info!(path = %path.display(), "Audio download finished");

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_skip_without_play_url() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().to_str().unwrap();
        let client = fetch::client().unwrap();

        // The default record carries the N/A sentinel
        let info = SongInfo::default();
        assert!(download(&client, &info, out).await.unwrap().is_none());

        // An empty URL is skipped the same way
        let info = SongInfo {
            play_url: String::new(),
            ..SongInfo::default()
        };
        assert!(download(&client, &info, out).await.unwrap().is_none());

        // Nothing was written
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
