//! Page configuration.
//!
//! The host page may embed a JSON block:
//!
//! ```html
//! <script type="application/json" id="landing-config">
//!   { "submit_delay_ms": 800 }
//! </script>
//! ```
//!
//! Every key is optional. A missing block or a block that fails to parse
//! falls back to the defaults.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{LandingError, Result};

/// Element id of the optional config block in `index.html`.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Scroll offset (px) past which the navbar switches to its compact style.
    pub scroll_threshold: f64,
    /// Viewport width (px) above which the mobile menu is force-closed.
    pub mobile_breakpoint: f64,
    /// Simulated round trip for form submissions.
    pub submit_delay_ms: u32,
    /// How long a notice stays up before dismissing itself.
    pub notice_duration_ms: u32,
    /// Maximum notices on screen at once.
    pub notice_limit: usize,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 10.0,
            mobile_breakpoint: 768.0,
            submit_delay_ms: 1500,
            notice_duration_ms: 5000,
            notice_limit: 3,
        }
    }
}

impl LandingConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Load from the `#landing-config` block of the current document.
    pub fn load() -> Self {
        match Self::read_from_document() {
            Ok(Some(config)) => {
                tracing::debug!(?config, "loaded landing config");
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }

    fn read_from_document() -> Result<Option<Self>> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| LandingError::Dom("no document".into()))?;
        let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Ok(None);
        };
        let raw = element.text_content().unwrap_or_default();
        Self::from_json(&raw).map(Some)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.into())
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = LandingConfig::default();
        assert_eq!(config.scroll_threshold, 10.0);
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert_eq!(config.submit_delay(), Duration::from_millis(1500));
        assert_eq!(config.notice_duration(), Duration::from_secs(5));
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = LandingConfig::from_json(r#"{ "submit_delay_ms": 800 }"#).unwrap();
        assert_eq!(config.submit_delay_ms, 800);
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert_eq!(config.notice_limit, 3);
    }

    #[test]
    fn blank_block_is_default() {
        assert_eq!(
            LandingConfig::from_json("  \n ").unwrap(),
            LandingConfig::default()
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = LandingConfig::from_json("{ submit_delay_ms: }").unwrap_err();
        assert!(matches!(err, LandingError::Config(_)));
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(LandingConfig::from_json(r#"{ "notice_limit": "many" }"#).is_err());
    }
}
