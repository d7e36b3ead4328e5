use anyhow::{Context, Result};
use ksong_model::SongInfo;
use serde_json::Value;

pub mod audio;
pub mod extract;
pub mod fetch;
pub mod output;

/// Extract and normalize the song record from fetched page text.
///
/// Network-free: this is the whole pipeline between the page fetch and the
/// record write. Every field of the embedded detail mapping is logged at
/// debug level before normalization, so the full payload can be inspected
/// without re-fetching the page.
pub fn song_from_page(html: &str) -> Result<SongInfo, extract::ExtractError> {
    let payload = extract::song_payload(html)?;
    log_detail_fields(&payload);
    Ok(SongInfo::from_payload(&payload))
}

/// Scrape one song page: fetch, extract, normalize, persist.
///
/// Writes `<output_dir>/<song_name>.json` and, when `with_audio` is set and
/// the page carries a play URL, `<output_dir>/<song_name>.m4a`. Returns the
/// normalized record.
pub async fn scrape(url: &str, output_dir: &str, with_audio: bool) -> Result<SongInfo> {
    let client = fetch::client()?;

    tracing::info!(url = %url, "Fetching song page");
    let html = fetch::text(&client, url)
        .await
        .context("Failed to fetch song page")?;
    tracing::info!(bytes = html.len(), "Received HTML");

    let info = song_from_page(&html).context("Failed to extract song data from page")?;
    tracing::info!(song = %info.song_name, singer = %info.singer, "Extracted song record");

    output::write_song_info(&info, output_dir)?;

    if with_audio {
        audio::download(&client, &info, output_dir).await?;
    }

    Ok(info)
}

fn log_detail_fields(payload: &Value) {
    if let Some(detail) = payload.get("detail").and_then(Value::as_object) {
        for (key, value) in detail {
            tracing::debug!(%key, %value, "Detail field");
        }
    }
}
