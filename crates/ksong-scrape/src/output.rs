use anyhow::{Context, Result};
use ksong_model::{SongInfo, UNKNOWN};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Directory records and audio land in when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "downloads";

/// Serialize a value as 4-space-indented JSON, non-ASCII verbatim.
///
/// The record files and the CLI's stdout print both use this;
/// `serde_json::to_string_pretty` indents with two spaces.
pub fn to_json_pretty<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf).expect("serde_json output is UTF-8"))
}

/// Write the song record to `<output_dir>/<stem>.json`.
///
/// Creates the directory if absent. The stem is the sanitized song name;
/// an existing record of the same name is overwritten.
pub fn write_song_info(info: &SongInfo, output_dir: &str) -> Result<PathBuf> {
    let dir = Path::new(output_dir);
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(format!("{}.json", sanitize_file_stem(&info.song_name)));
    let json = to_json_pretty(info)?;
    fs::write(&path, &json).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "Wrote song record");

    Ok(path)
}

/// Write fetched audio bytes to `<output_dir>/<stem>.m4a`, overwriting any
/// existing file of the same name.
pub fn write_audio(audio: &[u8], song_name: &str, output_dir: &str) -> Result<PathBuf> {
    let dir = Path::new(output_dir);
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(format!("{}.m4a", sanitize_file_stem(song_name)));
    fs::write(&path, audio).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = audio.len(), "Wrote audio");

    Ok(path)
}

/// Turn a song name into a safe file stem.
///
/// NFC-normalizes (so accented characters land in one representation),
/// replaces path separators, reserved characters and control characters
/// with `_`, and trims surrounding whitespace and dots. Falls back to the
/// `Unknown` sentinel when nothing usable remains.
pub fn sanitize_file_stem(name: &str) -> String {
    let cleaned: String = name
        .nfc()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let trimmed = cleaned.trim().trim_matches('.').trim();
    if trimmed.is_empty() {
        UNKNOWN.to_string()
    } else {
        trimmed.to_string()
    }
}
