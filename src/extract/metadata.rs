use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::Metadata;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*Video URL:\*\*\s+(https?://\S+)").unwrap());
static DURATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*Duration:\*\*\s+(\d+:\d+)").unwrap());
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"extracted on\s+(\d{4}-\d{2}-\d{2})").unwrap());

/// Pull header fields from the transcript preamble. Every field is
/// label-anchored; a missing label just leaves the field as None.
pub fn scan(content: &str) -> Metadata {
    let mut metadata = Metadata::default();

    if let Some(cap) = URL_RE.captures(content) {
        let url = cap[1].to_string();
        metadata.video_id = Some(video_id_from_url(&url));
        metadata.url = Some(url);
    }

    if let Some(cap) = DURATION_RE.captures(content) {
        metadata.duration = Some(cap[1].to_string());
    }

    if let Some(cap) = DATE_RE.captures(content) {
        metadata.extracted_date = Some(cap[1].to_string());
    }

    metadata
}

/// Derive an identifier from a watch URL: the text after the last `v=`,
/// cut at the first `&`. URLs without a `v=` parameter yield the whole URL.
fn video_id_from_url(url: &str) -> String {
    let after_v = url.rsplit("v=").next().unwrap_or(url);
    after_v.split('&').next().unwrap_or(after_v).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_header() {
        let text = "# Transcript\n\
                    **Video URL:** https://www.youtube.com/watch?v=abc123&t=42\n\
                    **Duration:** 12:34\n\
                    This transcript was extracted on 2026-08-01.\n";
        let m = scan(text);
        assert_eq!(m.url.as_deref(), Some("https://www.youtube.com/watch?v=abc123&t=42"));
        assert_eq!(m.video_id.as_deref(), Some("abc123"));
        assert_eq!(m.duration.as_deref(), Some("12:34"));
        assert_eq!(m.extracted_date.as_deref(), Some("2026-08-01"));
    }

    #[test]
    fn absent_fields_are_none() {
        let m = scan("no header here at all");
        assert_eq!(m, Metadata::default());
    }

    #[test]
    fn url_without_query_marker_keeps_whole_url() {
        let text = "**Video URL:** https://youtu.be/xyz789\n";
        let m = scan(text);
        assert_eq!(m.video_id.as_deref(), Some("https://youtu.be/xyz789"));
    }
}
