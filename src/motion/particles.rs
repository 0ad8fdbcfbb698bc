use std::time::Duration;

use rand::Rng;

/// One floating dot in a decorative layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the container width.
    pub left: f64,
    /// Vertical position, percent of the container height.
    pub top: f64,
    /// Peak drift from the start position, in pixels.
    pub dx: f64,
    pub dy: f64,
    /// Length of one fade-in/fade-out cycle.
    pub duration: Duration,
    pub delay: Duration,
}

impl Particle {
    /// Inline style consumed by the `particle-drift` keyframes.
    pub fn css(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; --drift-x: {:.1}px; --drift-y: {:.1}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left,
            self.top,
            self.dx,
            self.dy,
            self.duration.as_secs_f64(),
            self.delay.as_secs_f64(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Scatters `count` particles using `rng`, so a seeded generator always
    /// yields the same field.
    pub fn scatter<R: Rng>(count: usize, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                left: rng.gen_range(0.0..100.0),
                top: rng.gen_range(0.0..100.0),
                dx: rng.gen_range(-50.0..50.0),
                dy: rng.gen_range(-50.0..50.0),
                duration: Duration::from_secs_f64(rng.gen_range(10.0..20.0)),
                delay: Duration::from_secs_f64(rng.gen_range(0.0..5.0)),
            })
            .collect();
        Self { particles }
    }

    /// Evenly staggered diagonal layout for small cards.
    pub fn orbit(count: usize) -> Self {
        let particles = (0..count)
            .map(|i| {
                let i = i as f64;
                Particle {
                    left: 20.0 + i * 15.0,
                    top: 30.0 + i * 10.0,
                    dx: 100.0,
                    dy: -100.0,
                    duration: Duration::from_secs_f64(3.0 + i),
                    delay: Duration::from_secs_f64(i * 0.5),
                }
            })
            .collect();
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
