//! YouTube video id extraction.

use crate::error::{CaptionError, Result};

// helper.
macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}

/// Extract the 11-character video id from a YouTube URL.
///
/// Patterns are tried in order and the first one that matches anywhere in
/// the input wins:
///
/// - `v=<id>` or `/<id>` (watch, embed, shorts and most other shapes)
/// - `youtu.be/<id>`
///
/// The id is not checked against YouTube.
pub fn extract_video_id(url: &str) -> Result<String> {
    let patterns = [
        regex!(r"(?:v=|/)([0-9A-Za-z_-]{11}).*"),
        regex!(r"youtu\.be/([0-9A-Za-z_-]{11})"),
    ];

    patterns
        .iter()
        .find_map(|re| re.captures(url))
        .map(|caps| caps[1].to_string())
        .ok_or(CaptionError::InvalidUrl)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn test_watch_url() {
        let url = format!("https://www.youtube.com/watch?v={}", ID);
        assert_eq!(extract_video_id(&url).unwrap(), ID);
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        let url = format!("https://www.youtube.com/watch?v={}&t=42s&list=PL123", ID);
        assert_eq!(extract_video_id(&url).unwrap(), ID);

        let url = format!("https://www.youtube.com/watch?feature=share&v={}", ID);
        assert_eq!(extract_video_id(&url).unwrap(), ID);
    }

    #[test]
    fn test_path_urls() {
        for url in [
            format!("https://www.youtube.com/embed/{}", ID),
            format!("https://youtube.com/shorts/{}?feature=share", ID),
            format!("https://www.youtube.com/v/{}", ID),
        ] {
            assert_eq!(extract_video_id(&url).unwrap(), ID, "url: {}", url);
        }
    }

    #[test]
    fn test_short_url() {
        let url = format!("https://youtu.be/{}", ID);
        assert_eq!(extract_video_id(&url).unwrap(), ID);

        let url = format!("youtu.be/{}?si=abc", ID);
        assert_eq!(extract_video_id(&url).unwrap(), ID);
    }

    #[test]
    fn test_id_with_dash_and_underscore() {
        let url = "https://youtu.be/a-b_c-d_e-f";
        assert_eq!(extract_video_id(url).unwrap(), "a-b_c-d_e-f");
    }

    #[test]
    fn test_only_first_eleven_chars() {
        let url = format!("https://www.youtube.com/watch?v={}XYZ", ID);
        assert_eq!(extract_video_id(&url).unwrap(), ID);
    }

    #[test]
    fn test_invalid_urls() {
        for url in ["not a url", "", "https://www.youtube.com/watch?v=short"] {
            let err = extract_video_id(url).unwrap_err();
            assert!(matches!(err, CaptionError::InvalidUrl), "url: {}", url);
            assert_eq!(err.to_string(), "Invalid YouTube URL.");
        }
    }
}
