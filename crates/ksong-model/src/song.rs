use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sentinel for name/ID fields with no usable source value.
pub const UNKNOWN: &str = "Unknown";
/// Sentinel for URL fields with no usable source value.
pub const NOT_AVAILABLE: &str = "N/A";

/// The normalized metadata record for one song.
///
/// Field order is the serialization order of the record file. Every field
/// has a fixed sentinel default, so a record built from an empty or
/// malformed payload is still complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongInfo {
    pub song_name: String,
    /// Direct URL of the audio asset, or `N/A`.
    pub play_url: String,
    /// Performer nickname (the page calls this "nick").
    pub singer: String,
    pub song_id: String,
    /// Cover image URL, or `N/A`.
    pub cover: String,
    pub comment_count: i64,
    pub like_count: i64,
    pub share_count: i64,
    pub play_count: i64,
    /// Track length in seconds, as reported by the page.
    pub duration: i64,
}

impl Default for SongInfo {
    fn default() -> Self {
        Self {
            song_name: UNKNOWN.to_string(),
            play_url: NOT_AVAILABLE.to_string(),
            singer: UNKNOWN.to_string(),
            song_id: UNKNOWN.to_string(),
            cover: NOT_AVAILABLE.to_string(),
            comment_count: 0,
            like_count: 0,
            share_count: 0,
            play_count: 0,
            duration: 0,
        }
    }
}

impl SongInfo {
    /// Build a record from a full page payload.
    ///
    /// Only the "detail" sub-mapping is consumed. A payload without one,
    /// or with a non-mapping "detail", yields the all-default record.
    pub fn from_payload(payload: &Value) -> Self {
        match payload.get("detail").and_then(Value::as_object) {
            Some(detail) => Self::from_detail(detail),
            None => Self::default(),
        }
    }

    /// Build a record from the detail mapping, field by field.
    ///
    /// Source keys differ from record fields where the page abbreviates
    /// (`playurl`, `nick`, `*_cnt`). A key that is absent, or present with
    /// the wrong JSON type, takes the field's sentinel default; values are
    /// never coerced between types.
    pub fn from_detail(detail: &Map<String, Value>) -> Self {
        Self {
            song_name: string_field(detail, "song_name", UNKNOWN),
            play_url: string_field(detail, "playurl", NOT_AVAILABLE),
            singer: string_field(detail, "nick", UNKNOWN),
            song_id: string_field(detail, "song_id", UNKNOWN),
            cover: string_field(detail, "cover", NOT_AVAILABLE),
            comment_count: int_field(detail, "comment_cnt"),
            like_count: int_field(detail, "like_cnt"),
            share_count: int_field(detail, "share_cnt"),
            play_count: int_field(detail, "play_cnt"),
            duration: int_field(detail, "duration"),
        }
    }

    /// Whether the record carries a usable play URL.
    pub fn has_play_url(&self) -> bool {
        !self.play_url.is_empty() && self.play_url != NOT_AVAILABLE
    }
}

fn string_field(detail: &Map<String, Value>, key: &str, default: &str) -> String {
    detail
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn int_field(detail: &Map<String, Value>, key: &str) -> i64 {
    detail.get(key).and_then(Value::as_i64).unwrap_or(0)
}
