//! Scroll-driven motion: the visibility animator, pose interpolation and
//! decorative particle layouts. Nothing in here touches the DOM, so it runs
//! the same on the server, in the browser and under `cargo test`.

mod animator;
mod particles;
mod pose;

pub use animator::{
    AnimationFrame, Animator, ElementId, ObserveOptions, PresentationState, Region, ScrollState,
    TickReport, VisualElement,
};
pub use particles::{Particle, ParticleField};
pub use pose::{map_range, Easing, Pose, Transition};

use serde::Deserialize;

/// Engine-wide settings for the [`Animator`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Distance in pixels a repeatable element must travel past the viewport
    /// edge before it resets to pending.
    pub hysteresis_px: f64,
    /// Threshold applied when an element is observed with
    /// [`ObserveOptions::default`].
    pub default_threshold: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            hysteresis_px: 48.0,
            default_threshold: 0.0,
        }
    }
}

impl MotionConfig {
    pub fn with_hysteresis(mut self, px: f64) -> Self {
        self.hysteresis_px = px;
        self.normalized()
    }

    /// Clamps fields set directly or deserialized: the margin to `>= 0`, the
    /// threshold to `[0, 1]`. Non-finite values become zero.
    pub fn normalized(self) -> Self {
        let hysteresis_px = if self.hysteresis_px.is_finite() {
            self.hysteresis_px.max(0.0)
        } else {
            0.0
        };
        let default_threshold = if self.default_threshold.is_nan() {
            0.0
        } else {
            self.default_threshold.clamp(0.0, 1.0)
        };
        Self {
            hysteresis_px,
            default_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MotionConfig::default();
        assert_eq!(config.hysteresis_px, 48.0);
        assert_eq!(config.default_threshold, 0.0);
    }

    #[test]
    fn test_hysteresis_is_clamped() {
        assert_eq!(MotionConfig::default().with_hysteresis(-10.0).hysteresis_px, 0.0);
        assert_eq!(MotionConfig::default().with_hysteresis(f64::NAN).hysteresis_px, 0.0);
        assert_eq!(MotionConfig::default().with_hysteresis(64.0).hysteresis_px, 64.0);
    }

    #[test]
    fn test_normalized() {
        let config = MotionConfig {
            hysteresis_px: f64::INFINITY,
            default_threshold: 2.5,
        }
        .normalized();
        assert_eq!(config.hysteresis_px, 0.0);
        assert_eq!(config.default_threshold, 1.0);

        let config = MotionConfig {
            hysteresis_px: 12.0,
            default_threshold: f64::NAN,
        }
        .normalized();
        assert_eq!(config.hysteresis_px, 12.0);
        assert_eq!(config.default_threshold, 0.0);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: MotionConfig = serde_json::from_str(r#"{ "hysteresis_px": 64.0 }"#)
            .expect("should parse partial config");
        assert_eq!(config.hysteresis_px, 64.0);
        assert_eq!(config.default_threshold, 0.0);

        let config: MotionConfig = serde_json::from_str("{}").expect("should parse empty config");
        assert_eq!(config, MotionConfig::default());

        let config: MotionConfig =
            serde_json::from_str(r#"{ "hysteresis_px": -200.0, "default_threshold": 1.5 }"#)
                .expect("should parse out-of-range config");
        let animator = Animator::new(config);
        assert_eq!(animator.config().hysteresis_px, 0.0);
        assert_eq!(animator.config().default_threshold, 1.0);
    }
}
