//! Presenter configuration
//!
//! Every tunable the effects use, with defaults matching the behavior the
//! library ships with. Hosts can override values from a TOML snippet:
//!
//! ```rust
//! use vitrine_effects::PresenterConfig;
//!
//! let config = PresenterConfig::from_toml_str(
//!     r#"
//!     counter_duration_ms = 2000.0
//!     stagger_step_ms = 150
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.counter_duration_ms, 2000.0);
//! // Everything else keeps its default
//! assert_eq!(config.trigger_threshold, 0.5);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{EffectsError, Result};

/// Tunables for the presentation effects
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PresenterConfig {
    /// Total duration of a counter run (ms)
    pub counter_duration_ms: f32,
    /// Number of equal steps a counter run is divided into
    pub counter_steps: u32,
    /// Visibility fraction of the stats region that fires the counters
    pub trigger_threshold: f32,
    /// Distance from the viewport bottom at which elements reveal (px)
    pub reveal_margin: f32,
    /// Slack from the end of the content that force-reveals everything (px)
    pub bottom_slack: f32,
    /// Per-layer parallax speed multiplier
    pub parallax_base_speed: f32,
    /// Delay between consecutive staggered items (ms)
    pub stagger_step_ms: u32,
    /// Duration of a scroll-to-anchor glide (ms)
    pub glide_duration_ms: f32,
    /// Interval between typewriter characters (ms)
    pub typewriter_speed_ms: f32,
    /// Chase factor for the cursor trail (0.0 to 1.0)
    pub trail_smoothing: f32,
    /// Radius of a trail circle, used to center it on the pointer (px)
    pub trail_radius: f32,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: 1500.0,
            counter_steps: 50,
            trigger_threshold: 0.5,
            reveal_margin: 100.0,
            bottom_slack: 50.0,
            parallax_base_speed: 0.3,
            stagger_step_ms: 200,
            glide_duration_ms: 600.0,
            typewriter_speed_ms: 100.0,
            trail_smoothing: 0.3,
            trail_radius: 12.0,
        }
    }
}

impl PresenterConfig {
    /// Parse a config from TOML, falling back to defaults for absent keys
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.counter_steps == 0 {
            return Err(EffectsError::InvalidConfig(
                "counter_steps must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.trigger_threshold) {
            return Err(EffectsError::InvalidConfig(
                "trigger_threshold must be within 0.0..=1.0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.trail_smoothing) {
            return Err(EffectsError::InvalidConfig(
                "trail_smoothing must be within 0.0..=1.0".into(),
            ));
        }
        if self.counter_duration_ms <= 0.0
            || self.typewriter_speed_ms <= 0.0
            || self.glide_duration_ms <= 0.0
        {
            return Err(EffectsError::InvalidConfig(
                "durations must be positive".into(),
            ));
        }
        if self.reveal_margin < 0.0 || self.bottom_slack < 0.0 || self.trail_radius < 0.0 {
            return Err(EffectsError::InvalidConfig(
                "distances must not be negative".into(),
            ));
        }
        if self.parallax_base_speed < 0.0 {
            return Err(EffectsError::InvalidConfig(
                "parallax_base_speed must not be negative".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_behavior() {
        let config = PresenterConfig::default();
        assert_eq!(config.counter_duration_ms, 1500.0);
        assert_eq!(config.counter_steps, 50);
        assert_eq!(config.trigger_threshold, 0.5);
        assert_eq!(config.reveal_margin, 100.0);
        assert_eq!(config.bottom_slack, 50.0);
        assert_eq!(config.parallax_base_speed, 0.3);
        assert_eq!(config.stagger_step_ms, 200);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = PresenterConfig::from_toml_str("reveal_margin = 80.0").unwrap();
        assert_eq!(config.reveal_margin, 80.0);
        assert_eq!(config.bottom_slack, 50.0);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(PresenterConfig::from_toml_str("revael_margin = 80.0").is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(PresenterConfig::from_toml_str("counter_steps = 0").is_err());
        assert!(PresenterConfig::from_toml_str("trigger_threshold = 1.5").is_err());
        assert!(PresenterConfig::from_toml_str("typewriter_speed_ms = -1.0").is_err());
        assert!(PresenterConfig::from_toml_str("glide_duration_ms = 0.0").is_err());
    }

    #[test]
    fn test_negative_distances_and_speeds_rejected() {
        assert!(PresenterConfig::from_toml_str("reveal_margin = -1.0").is_err());
        assert!(PresenterConfig::from_toml_str("bottom_slack = -1.0").is_err());
        assert!(PresenterConfig::from_toml_str("trail_radius = -12.0").is_err());
        assert!(PresenterConfig::from_toml_str("parallax_base_speed = -0.3").is_err());
    }
}
