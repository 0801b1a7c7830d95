//! YouTube transcript retrieval adapter
//!
//! Fetches a video's watch page, carves the caption track list out of the
//! embedded player response, and downloads the selected track as json3.

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{TranscriptError, TranscriptSource};
use crate::domain::transcript::TranscriptSegment;
use crate::domain::video::VideoId;

/// Public watch page host
const WATCH_BASE_URL: &str = "https://www.youtube.com";

/// Key preceding the caption track list inside the player response JSON
const CAPTION_TRACKS_KEY: &str = "\"captionTracks\":";

/// Caption track metadata from the player response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    language_code: String,
    kind: Option<String>,
}

impl CaptionTrack {
    /// Auto-generated tracks carry kind "asr"
    fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }

    fn matches_exact(&self, code: &str) -> bool {
        self.language_code == code
    }

    /// Regional variant of the requested code ("en" matches "en-US")
    fn matches_variant(&self, code: &str) -> bool {
        self.language_code
            .strip_prefix(code)
            .is_some_and(|rest| rest.starts_with('-'))
    }
}

// json3 caption payload

#[derive(Debug, Deserialize)]
struct Json3Transcript {
    events: Option<Vec<Json3Event>>,
}

#[derive(Debug, Deserialize)]
struct Json3Event {
    #[serde(rename = "tStartMs")]
    start_ms: Option<u64>,
    #[serde(rename = "dDurationMs")]
    duration_ms: Option<u64>,
    segs: Option<Vec<Json3Seg>>,
}

#[derive(Debug, Deserialize)]
struct Json3Seg {
    utf8: Option<String>,
}

/// Transcript source backed by the public YouTube watch page
pub struct YouTubeTranscriptClient {
    languages: Vec<String>,
    base_url: String,
    client: reqwest::Client,
}

impl YouTubeTranscriptClient {
    /// Create a client that prefers the given language codes, in order
    pub fn new(languages: Vec<String>) -> Self {
        Self::with_base_url(languages, WATCH_BASE_URL)
    }

    /// Create a client bound to a custom host instead of the public site.
    /// Used by tests against a local server.
    pub fn with_base_url(languages: Vec<String>, base_url: impl Into<String>) -> Self {
        Self {
            languages,
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn watch_url(&self, video: &VideoId) -> String {
        format!("{}/watch?v={}", self.base_url, video.as_str())
    }

    async fn fetch_watch_page(&self, video: &VideoId) -> Result<String, TranscriptError> {
        let response = self
            .client
            .get(self.watch_url(video))
            .header("Accept-Language", "en-US")
            .send()
            .await
            .map_err(|e| TranscriptError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranscriptError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| TranscriptError::RequestFailed(e.to_string()))
    }

    /// Pick the track for the first preferred language that has one.
    /// Manually created tracks win over auto-generated ones, and an exact
    /// code match wins over a regional variant.
    fn select_track<'a>(
        &self,
        tracks: &'a [CaptionTrack],
    ) -> Result<&'a CaptionTrack, TranscriptError> {
        for code in &self.languages {
            let found = tracks
                .iter()
                .filter(|t| t.matches_exact(code))
                .min_by_key(|t| t.is_generated())
                .or_else(|| {
                    tracks
                        .iter()
                        .filter(|t| t.matches_variant(code))
                        .min_by_key(|t| t.is_generated())
                });

            if let Some(track) = found {
                return Ok(track);
            }
        }

        Err(TranscriptError::LanguageNotFound {
            requested: self.languages.join(", "),
            available: tracks
                .iter()
                .map(|t| t.language_code.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    async fn fetch_track(
        &self,
        track: &CaptionTrack,
    ) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        // Track base URLs always carry a query string already
        let url = format!("{}&fmt=json3", track.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TranscriptError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranscriptError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let transcript: Json3Transcript = response
            .json()
            .await
            .map_err(|e| TranscriptError::ParseError(e.to_string()))?;

        Ok(collect_segments(transcript))
    }
}

#[async_trait]
impl TranscriptSource for YouTubeTranscriptClient {
    async fn fetch_segments(
        &self,
        video: &VideoId,
    ) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        let page = self.fetch_watch_page(video).await?;

        if page.contains("class=\"g-recaptcha\"") {
            return Err(TranscriptError::RequestFailed(
                "blocked by a captcha challenge".to_string(),
            ));
        }

        let tracks_json = match extract_caption_tracks(&page) {
            Some(json) => json,
            None => {
                if page.contains(r#""status":"ERROR""#) {
                    return Err(TranscriptError::VideoUnavailable);
                }
                return Err(TranscriptError::CaptionsUnavailable);
            }
        };

        let tracks: Vec<CaptionTrack> = serde_json::from_str(tracks_json)
            .map_err(|e| TranscriptError::ParseError(e.to_string()))?;

        if tracks.is_empty() {
            return Err(TranscriptError::CaptionsUnavailable);
        }

        let track = self.select_track(&tracks)?;
        let segments = self.fetch_track(track).await?;

        if segments.is_empty() {
            return Err(TranscriptError::EmptyTranscript);
        }

        Ok(segments)
    }
}

/// Carve the caption track array out of the watch page HTML.
///
/// The player response is embedded as one JSON blob, so the array is found
/// with a bracket scan that honors string literals and escapes.
fn extract_caption_tracks(page: &str) -> Option<&str> {
    let key_pos = page.find(CAPTION_TRACKS_KEY)?;
    let after_key = &page[key_pos + CAPTION_TRACKS_KEY.len()..];
    let start = after_key.find('[')?;
    let array = &after_key[start..];

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in array.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&array[..=i]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Flatten json3 events into ordered segments.
///
/// Each event's runs are concatenated into one segment; events that carry
/// no text (styling and newline placeholders) are dropped.
fn collect_segments(transcript: Json3Transcript) -> Vec<TranscriptSegment> {
    transcript
        .events
        .unwrap_or_default()
        .into_iter()
        .filter_map(|event| {
            let segs = event.segs?;
            let text: String = segs.into_iter().filter_map(|s| s.utf8).collect();
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            Some(TranscriptSegment::new(
                text.to_string(),
                event.start_ms.unwrap_or(0) as f64 / 1000.0,
                event.duration_ms.unwrap_or(0) as f64 / 1000.0,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html>var ytInitialPlayerResponse = {"captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[{"baseUrl":"https://www.youtube.com/api/timedtext?v=abc&lang=en","name":{"simpleText":"English [auto]"},"languageCode":"en","kind":"asr"},{"baseUrl":"https://www.youtube.com/api/timedtext?v=abc&lang=es","name":{"simpleText":"Spanish"},"languageCode":"es"}],"audioTracks":[]}},"videoDetails":{}};</html>"#;

    fn parse_tracks(page: &str) -> Vec<CaptionTrack> {
        serde_json::from_str(extract_caption_tracks(page).unwrap()).unwrap()
    }

    #[test]
    fn extract_caption_tracks_carves_the_array() {
        let json = extract_caption_tracks(PAGE).unwrap();
        assert!(json.starts_with('['));
        assert!(json.ends_with(']'));
        assert!(json.contains("languageCode"));
        // Stops at the array's own closing bracket
        assert!(!json.contains("audioTracks"));
    }

    #[test]
    fn extract_caption_tracks_ignores_brackets_inside_strings() {
        let json = extract_caption_tracks(PAGE).unwrap();
        // "English [auto]" must not unbalance the scan
        assert!(json.contains("English [auto]"));
    }

    #[test]
    fn extract_caption_tracks_handles_escaped_quotes() {
        let page = r#"{"captionTracks":[{"baseUrl":"u","name":{"simpleText":"say \"hi\" ]"},"languageCode":"en"}],"x":1}"#;
        let json = extract_caption_tracks(page).unwrap();
        assert!(json.ends_with(']'));
        assert!(!json.contains(r#""x":1"#));
    }

    #[test]
    fn extract_caption_tracks_missing_returns_none() {
        assert!(extract_caption_tracks("<html>no captions here</html>").is_none());
    }

    #[test]
    fn parsed_track_unescapes_base_url() {
        let tracks = parse_tracks(PAGE);
        assert_eq!(tracks.len(), 2);
        assert_eq!(
            tracks[0].base_url,
            "https://www.youtube.com/api/timedtext?v=abc&lang=en"
        );
        assert!(tracks[0].is_generated());
        assert!(!tracks[1].is_generated());
    }

    #[test]
    fn select_track_prefers_first_requested_language() {
        let client = YouTubeTranscriptClient::new(vec!["es".to_string(), "en".to_string()]);
        let tracks = parse_tracks(PAGE);

        let track = client.select_track(&tracks).unwrap();
        assert_eq!(track.language_code, "es");
    }

    #[test]
    fn select_track_prefers_manual_over_generated() {
        let client = YouTubeTranscriptClient::new(vec!["en".to_string()]);
        let tracks: Vec<CaptionTrack> = serde_json::from_str(
            r#"[{"baseUrl":"u1","languageCode":"en","kind":"asr"},{"baseUrl":"u2","languageCode":"en"}]"#,
        )
        .unwrap();

        let track = client.select_track(&tracks).unwrap();
        assert_eq!(track.base_url, "u2");
    }

    #[test]
    fn select_track_falls_back_to_regional_variant() {
        let client = YouTubeTranscriptClient::new(vec!["en".to_string()]);
        let tracks: Vec<CaptionTrack> =
            serde_json::from_str(r#"[{"baseUrl":"u","languageCode":"en-GB"}]"#).unwrap();

        let track = client.select_track(&tracks).unwrap();
        assert_eq!(track.language_code, "en-GB");
    }

    #[test]
    fn select_track_variant_requires_dash_boundary() {
        let client = YouTubeTranscriptClient::new(vec!["e".to_string()]);
        let tracks: Vec<CaptionTrack> =
            serde_json::from_str(r#"[{"baseUrl":"u","languageCode":"en"}]"#).unwrap();

        assert!(client.select_track(&tracks).is_err());
    }

    #[test]
    fn select_track_reports_available_languages() {
        let client = YouTubeTranscriptClient::new(vec!["fr".to_string()]);
        let tracks = parse_tracks(PAGE);

        let err = client.select_track(&tracks).unwrap_err();
        match err {
            TranscriptError::LanguageNotFound {
                requested,
                available,
            } => {
                assert_eq!(requested, "fr");
                assert_eq!(available, "en, es");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn collect_segments_concatenates_runs_and_skips_placeholders() {
        let transcript: Json3Transcript = serde_json::from_str(
            r#"{"events":[
                {"tStartMs":0,"dDurationMs":1500,"segs":[{"utf8":"Hi "},{"utf8":"there"}]},
                {"tStartMs":1500,"dDurationMs":100,"segs":[{"utf8":"\n"}]},
                {"tStartMs":2000,"dDurationMs":900,"aAppend":1},
                {"tStartMs":3000,"dDurationMs":1200,"segs":[{"utf8":"Foo bar"}]}
            ]}"#,
        )
        .unwrap();

        let segments = collect_segments(transcript);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text(), "Hi there");
        assert_eq!(segments[0].start(), 0.0);
        assert_eq!(segments[0].duration(), 1.5);
        assert_eq!(segments[1].text(), "Foo bar");
        assert_eq!(segments[1].start(), 3.0);
    }

    #[test]
    fn collect_segments_empty_events() {
        let transcript: Json3Transcript = serde_json::from_str(r#"{"events":[]}"#).unwrap();
        assert!(collect_segments(transcript).is_empty());
    }
}
