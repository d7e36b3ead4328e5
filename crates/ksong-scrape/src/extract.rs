use serde_json::Value;
use thiserror::Error;

/// Literal text immediately before the embedded JSON payload.
pub const PAYLOAD_PREFIX: &str = "window.__DATA__ = ";
/// Literal text immediately after the payload.
pub const PAYLOAD_SUFFIX: &str = "; </script>";

/// Failure to locate or parse the embedded payload.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("song data marker not found in page")]
    MarkerNotFound,

    #[error("song data terminator not found in page")]
    TerminatorNotFound,

    #[error("song data payload is not valid JSON")]
    InvalidJson(#[from] serde_json::Error),
}

/// Extract the JSON payload embedded in a song page.
///
/// The page assigns its data to a global inside inline script markup:
/// `window.__DATA__ = { ... }; </script>`. The payload is the text between
/// the first occurrence of [`PAYLOAD_PREFIX`] and the first occurrence of
/// [`PAYLOAD_SUFFIX`] after it, parsed strictly as JSON.
pub fn song_payload(html: &str) -> Result<Value, ExtractError> {
    let start = html
        .find(PAYLOAD_PREFIX)
        .ok_or(ExtractError::MarkerNotFound)?;
    let rest = &html[start + PAYLOAD_PREFIX.len()..];
    let end = rest
        .find(PAYLOAD_SUFFIX)
        .ok_or(ExtractError::TerminatorNotFound)?;
    Ok(serde_json::from_str(&rest[..end])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_payload_between_markers() {
        let html = r#"<html><script>window.__DATA__ = {"detail": {"song_name": "Test"}}; </script></html>"#;
        let payload = song_payload(html).unwrap();
        assert_eq!(payload, json!({"detail": {"song_name": "Test"}}));
    }

    #[test]
    fn test_matches_independent_parse() {
        let inner = r#"{"detail": {"song_id": "abc", "play_cnt": 42}, "share": {"title": "x"}}"#;
        let html = format!("<head></head>{PAYLOAD_PREFIX}{inner}{PAYLOAD_SUFFIX}<body></body>");
        let payload = song_payload(&html).unwrap();
        let expected: Value = serde_json::from_str(inner).unwrap();
        assert_eq!(payload, expected);
    }

    #[test]
    fn test_content_before_marker_ignored() {
        let html = format!(
            "<!-- tracking banner -->{PAYLOAD_PREFIX}{}{PAYLOAD_SUFFIX}",
            r#"{"detail": {}}"#
        );
        assert!(song_payload(&html).is_ok());
    }

    #[test]
    fn test_terminator_before_marker_not_matched() {
        // A suffix occurrence ahead of the prefix must not terminate the scan
        let html = format!(
            "<script>var a = 1; </script>{PAYLOAD_PREFIX}{}{PAYLOAD_SUFFIX}",
            r#"{"ok": true}"#
        );
        let payload = song_payload(&html).unwrap();
        assert_eq!(payload, json!({"ok": true}));
    }

    #[test]
    fn test_missing_marker() {
        let err = song_payload("<html><body>no data here</body></html>").unwrap_err();
        assert!(matches!(err, ExtractError::MarkerNotFound));
    }

    #[test]
    fn test_missing_terminator() {
        let html = format!("{PAYLOAD_PREFIX}{}", r#"{"detail": {}}"#);
        let err = song_payload(&html).unwrap_err();
        assert!(matches!(err, ExtractError::TerminatorNotFound));
    }

    #[test]
    fn test_invalid_json_keeps_source() {
        let html = format!("{PAYLOAD_PREFIX}not json at all{PAYLOAD_SUFFIX}");
        match song_payload(&html).unwrap_err() {
            ExtractError::InvalidJson(source) => {
                assert!(!source.to_string().is_empty());
            }
            other => panic!("expected InvalidJson, got {other:?}"),
        }
    }
}
