//! Tunable thresholds and delays.
//!
//! Every field defaults to the values in [`crate::consts`]; a page may
//! override any subset through a JSON document embedded in the HTML. Keys are
//! camelCase to match the rest of the page's data attributes.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;

/// Errors produced while reading an embedded configuration document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid interaction config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be at most {max}, got {value}")]
    TooLarge { field: &'static str, value: f64, max: f64 },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InteractionConfig {
    pub sticky_header_px: f64,
    pub nav_offset_px: f64,
    pub back_to_top_px: f64,
    pub reveal_offset_px: f64,
    pub anchor_gap_px: f64,
    pub fallback_header_px: f64,
    pub theme_transition_ms: u32,
    pub preloader_delay_ms: u32,
    pub ripple_lifetime_ms: u32,
    pub form_reset_ms: u32,
    pub counter_steps: i64,
    pub counter_visibility: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            sticky_header_px: consts::STICKY_HEADER_PX,
            nav_offset_px: consts::NAV_OFFSET_PX,
            back_to_top_px: consts::BACK_TO_TOP_PX,
            reveal_offset_px: consts::REVEAL_OFFSET_PX,
            anchor_gap_px: consts::ANCHOR_GAP_PX,
            fallback_header_px: consts::FALLBACK_HEADER_PX,
            theme_transition_ms: consts::THEME_TRANSITION_MS,
            preloader_delay_ms: consts::PRELOADER_DELAY_MS,
            ripple_lifetime_ms: consts::RIPPLE_LIFETIME_MS,
            form_reset_ms: consts::FORM_RESET_MS,
            counter_steps: consts::COUNTER_STEPS,
            counter_visibility: consts::COUNTER_VISIBILITY,
        }
    }
}

impl InteractionConfig {
    /// Parse a JSON override. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped fields and
    /// [`ConfigError::Negative`] when a pixel threshold is below zero, and
    /// [`ConfigError::TooLarge`] when `counterVisibility` exceeds 1.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let pixel_fields = [
            ("stickyHeaderPx", self.sticky_header_px),
            ("navOffsetPx", self.nav_offset_px),
            ("backToTopPx", self.back_to_top_px),
            ("revealOffsetPx", self.reveal_offset_px),
            ("anchorGapPx", self.anchor_gap_px),
            ("fallbackHeaderPx", self.fallback_header_px),
            ("counterVisibility", self.counter_visibility),
        ];
        for (field, value) in pixel_fields {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.counter_visibility > 1.0 {
            return Err(ConfigError::TooLarge { field: "counterVisibility", value: self.counter_visibility, max: 1.0 });
        }
        if self.counter_steps < 0 {
            #[allow(clippy::cast_precision_loss)]
            let value = self.counter_steps as f64;
            return Err(ConfigError::Negative { field: "counterSteps", value });
        }
        Ok(())
    }
}
