use std::time::Duration;

/// A snapshot of the three properties the page animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    /// Vertical offset in pixels, positive moves down.
    pub translate_y: f64,
    pub scale: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    pub const fn new(opacity: f64, translate_y: f64, scale: f64) -> Self {
        Self {
            opacity,
            translate_y,
            scale,
        }
    }

    /// Fade in while rising `dy` pixels.
    pub const fn rise(dy: f64) -> Self {
        Self::new(0.0, dy, 1.0)
    }

    /// Fade in while growing from `scale`.
    pub const fn grow(scale: f64) -> Self {
        Self::new(0.0, 0.0, scale)
    }

    pub fn lerp(&self, other: &Pose, t: f64) -> Pose {
        Pose {
            opacity: (self.opacity + (other.opacity - self.opacity) * t).clamp(0.0, 1.0),
            translate_y: self.translate_y + (other.translate_y - self.translate_y) * t,
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }

    pub fn approx_eq(&self, other: &Pose, epsilon: f64) -> bool {
        (self.opacity - other.opacity).abs() < epsilon
            && (self.translate_y - other.translate_y).abs() < epsilon
            && (self.scale - other.scale).abs() < epsilon
    }

    /// Inline style for this pose.
    pub fn css(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.2}px) scale({:.3});",
            self.opacity, self.translate_y, self.scale
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
    EaseOutCubic,
}

impl Easing {
    pub fn apply(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// How an element moves from hidden to shown once it settles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: Pose,
    pub to: Pose,
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            from: Pose::rise(20.0),
            to: Pose::REST,
            duration: Duration::from_millis(600),
            easing: Easing::EaseOut,
        }
    }
}

impl Transition {
    pub fn starting_from(mut self, pose: Pose) -> Self {
        self.from = pose;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Length in seconds, clamped like [`secs_to_duration`].
    pub fn duration_secs(self, secs: f64) -> Self {
        self.duration(secs_to_duration(secs))
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Pose after `elapsed` time of playback.
    pub fn sample(&self, elapsed: Duration) -> Pose {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from.lerp(&self.to, self.easing.apply(t))
    }

    pub fn is_done(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Seconds as a [`Duration`]. Negative and non-finite values become zero,
/// values too large to represent saturate at [`Duration::MAX`].
pub fn secs_to_duration(secs: f64) -> Duration {
    if !secs.is_finite() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}

/// Maps `value` from the `input` range onto `output`, clamped at both ends.
///
/// Used for scroll-linked styles, e.g. the navbar backdrop fading from 0.3 to
/// 0.9 over the first 200px of scroll.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_lo, in_hi) = input;
    let (out_lo, out_hi) = output;
    if in_hi == in_lo || !value.is_finite() {
        return out_lo;
    }
    let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo * (1.0 - t) + out_hi * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range_clamps() {
        assert_eq!(map_range(-50.0, (0.0, 200.0), (0.3, 0.9)), 0.3);
        assert_eq!(map_range(1000.0, (0.0, 200.0), (0.3, 0.9)), 0.9);
        assert!((map_range(100.0, (0.0, 200.0), (0.3, 0.9)) - 0.6).abs() < 1e-9);
        assert_eq!(map_range(300.0, (0.0, 600.0), (0.0, 120.0)), 60.0);
    }

    #[test]
    fn test_map_range_hits_endpoints_exactly() {
        for (lo, hi) in [(0.3, 0.9), (0.1, 0.7), (-1.5, 2.25), (120.0, 0.0)] {
            assert_eq!(map_range(1e6, (0.0, 200.0), (lo, hi)), hi);
            assert_eq!(map_range(200.0, (0.0, 200.0), (lo, hi)), hi);
            assert_eq!(map_range(0.0, (0.0, 200.0), (lo, hi)), lo);
        }
    }

    #[test]
    fn test_secs_to_duration_saturates() {
        assert_eq!(secs_to_duration(1e30), Duration::MAX);
        assert_eq!(secs_to_duration(f64::MAX), Duration::MAX);
        assert_eq!(secs_to_duration(f64::INFINITY), Duration::ZERO);
        assert_eq!(secs_to_duration(f64::NAN), Duration::ZERO);
        assert_eq!(secs_to_duration(-3.0), Duration::ZERO);
        assert_eq!(secs_to_duration(0.3), Duration::from_secs_f64(0.3));

        let transition = Transition::default().duration_secs(1e30);
        assert_eq!(transition.duration, Duration::MAX);
        assert!(!transition.is_done(Duration::from_secs(3600)));
    }

    #[test]
    fn test_map_range_degenerate_input() {
        assert_eq!(map_range(10.0, (5.0, 5.0), (1.0, 2.0)), 1.0);
        assert_eq!(map_range(f64::NAN, (0.0, 1.0), (1.0, 2.0)), 1.0);
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::EaseOutCubic,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(2.0), 1.0);
            assert_eq!(easing.apply(-1.0), 0.0);
        }
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
    }

    #[test]
    fn test_transition_sample() {
        let transition = Transition::default()
            .starting_from(Pose::rise(30.0))
            .duration(Duration::from_millis(1000))
            .easing(Easing::Linear);
        let start = transition.sample(Duration::ZERO);
        assert!(start.approx_eq(&Pose::rise(30.0), 1e-9));
        let mid = transition.sample(Duration::from_millis(500));
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert!((mid.translate_y - 15.0).abs() < 1e-9);
        let end = transition.sample(Duration::from_secs(5));
        assert!(end.approx_eq(&Pose::REST, 1e-9));
        assert!(transition.is_done(Duration::from_secs(1)));
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let transition = Transition::default().duration(Duration::ZERO);
        assert_eq!(transition.sample(Duration::ZERO), Pose::REST);
    }

    #[test]
    fn test_css() {
        assert_eq!(
            Pose::new(0.5, 12.0, 0.8).css(),
            "opacity: 0.500; transform: translateY(12.00px) scale(0.800);"
        );
    }
}
