//! Page configuration, embedded at build time from `assets/page_config.json`.

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use tracing::Level;

use crate::error::PortalResult;

static EMBEDDED_CONFIG: &str = include_str!("../assets/page_config.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Time the loading overlay stays fully opaque
    pub loader_delay_ms: u64,
    /// Fade-out time before the overlay is removed
    pub loader_fade_ms: u64,
    /// Scroll offset (px) past which the scroll-to-top button shows
    pub scroll_top_threshold: f64,
    /// Anchor whose section flashes when navigated to
    pub highlight_anchor: String,
    /// How often to check whether GSAP has finished loading
    pub effects_poll_ms: u64,
    /// Give up on animations after this long without GSAP
    pub effects_timeout_ms: u64,
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            loader_delay_ms: 1000,
            loader_fade_ms: 500,
            scroll_top_threshold: 500.0,
            highlight_anchor: "#services".to_string(),
            effects_poll_ms: 100,
            effects_timeout_ms: 5000,
            log_level: "info".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> PortalResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn embedded() -> PortalResult<Self> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    pub fn loader_delay(&self) -> Duration {
        Duration::from_millis(self.loader_delay_ms)
    }

    pub fn loader_fade(&self) -> Duration {
        Duration::from_millis(self.loader_fade_ms)
    }

    pub fn effects_poll(&self) -> Duration {
        Duration::from_millis(self.effects_poll_ms)
    }

    pub fn effects_timeout(&self) -> Duration {
        Duration::from_millis(self.effects_timeout_ms)
    }

    /// Unknown level names fall back to `INFO`.
    pub fn log_level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortalError;

    #[test]
    fn embedded_config_parses() {
        let config = PageConfig::embedded().unwrap();
        assert_eq!(config.highlight_anchor, "#services");
        assert_eq!(config.loader_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = PageConfig::from_json(r#"{ "scroll_top_threshold": 320 }"#).unwrap();
        assert_eq!(config.scroll_top_threshold, 320.0);
        assert_eq!(config.loader_fade_ms, 500);
        assert_eq!(config.effects_poll(), Duration::from_millis(100));
        assert_eq!(config.effects_timeout(), Duration::from_secs(5));
        assert_eq!(config.log_level(), Level::INFO);
    }

    #[test]
    fn log_level_is_parsed() {
        let config = PageConfig::from_json(r#"{ "log_level": "debug" }"#).unwrap();
        assert_eq!(config.log_level(), Level::DEBUG);

        let config = PageConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap();
        assert_eq!(config.log_level(), Level::INFO);
    }

    #[test]
    fn malformed_json_is_invalid_config() {
        let err = PageConfig::from_json("{ loader_delay_ms: }").unwrap_err();
        assert!(matches!(err, PortalError::InvalidConfig(_)));
    }
}
