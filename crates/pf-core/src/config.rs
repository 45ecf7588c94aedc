//! Tunable thresholds for the page behaviours.
//!
//! The page may override any subset through a JSON document; unspecified
//! fields keep their defaults.

use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Visible fraction at which a `.reveal` element activates.
    pub reveal_threshold: f64,
    /// Navbar switches to compact styling strictly past this offset.
    pub navbar_compact_after: f64,
    /// Fixed header height subtracted from anchor scroll targets.
    pub anchor_offset: f64,
    /// Scroll-to-top button shows strictly past this offset.
    pub scroll_top_after: f64,
    pub banner_duration_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.1,
            navbar_compact_after: 50.0,
            anchor_offset: 80.0,
            scroll_top_after: 300.0,
            banner_duration_ms: 5_000,
        }
    }
}

impl PageConfig {
    /// Parse an override document, falling back to defaults when absent or invalid.
    pub fn from_json(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(err) => {
                warn!("ignoring invalid page config: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_document_gives_defaults() {
        assert_eq!(PageConfig::from_json(None), PageConfig::default());
        assert_eq!(PageConfig::from_json(Some("  ")), PageConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = PageConfig::from_json(Some(r#"{"anchorOffset": 64, "bannerDurationMs": 2000}"#));
        assert_eq!(config.anchor_offset, 64.0);
        assert_eq!(config.banner_duration_ms, 2_000);
        assert_eq!(config.navbar_compact_after, 50.0);
        assert_eq!(config.scroll_top_after, 300.0);
    }

    #[test]
    fn invalid_document_gives_defaults() {
        assert_eq!(PageConfig::from_json(Some("{not json")), PageConfig::default());
    }
}
