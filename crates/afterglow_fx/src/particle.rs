//! A single trail particle.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::TrailConfig;
use crate::style::Color;

/// One short-lived point of the pointer trail.
///
/// Velocity is fixed at spawn; opacity and size only ever shrink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Screen-space X.
    pub x: f32,
    /// Screen-space Y.
    pub y: f32,
    /// Radius in pixels.
    pub size: f32,
    /// Horizontal velocity, pixels per tick.
    pub velocity_x: f32,
    /// Vertical velocity, pixels per tick.
    pub velocity_y: f32,
    /// Opacity (0-1].
    pub opacity: f32,
    /// Fill color.
    pub color: Color,
}

impl Particle {
    /// Spawns a particle at `(x, y)` with randomized size, velocity,
    /// opacity and color drawn from the config ranges.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(x: f32, y: f32, config: &TrailConfig, rng: &mut R) -> Self {
        Self {
            x,
            y,
            size: sample(rng, config.size_range),
            velocity_x: sample(rng, config.speed_range),
            velocity_y: sample(rng, config.speed_range),
            opacity: sample(rng, config.opacity_range),
            color: config.palette.choose(rng).copied().unwrap_or_default(),
        }
    }

    /// Advances one tick: moves by velocity, fades and shrinks.
    #[inline]
    pub fn update(&mut self, opacity_decay: f32, size_decay: f32) {
        self.x += self.velocity_x;
        self.y += self.velocity_y;
        self.opacity *= opacity_decay;
        self.size *= size_decay;
    }

    /// Is this particle still above the cull threshold?
    #[inline]
    #[must_use]
    pub fn is_visible(&self, threshold: f32) -> bool {
        self.opacity > threshold
    }
}

/// Uniform sample from `[min, max)`. A collapsed range, or one whose span
/// overflows `f32`, yields `min`.
fn sample<R: Rng + ?Sized>(rng: &mut R, [min, max]: [f32; 2]) -> f32 {
    if min < max && (max - min).is_finite() {
        rng.gen_range(min..max)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::trail_rng;

    fn fixed(opacity: f32, size: f32) -> Particle {
        Particle {
            x: 10.0,
            y: 20.0,
            size,
            velocity_x: 1.0,
            velocity_y: -0.5,
            opacity,
            color: Color::TRAIL_CYAN,
        }
    }

    #[test]
    fn test_spawn_within_ranges() {
        let config = TrailConfig::default();
        let mut rng = trail_rng(Some(1));

        for _ in 0..1000 {
            let p = Particle::spawn(3.0, 4.0, &config, &mut rng);
            assert_eq!((p.x, p.y), (3.0, 4.0));
            assert!((1.0..4.0).contains(&p.size));
            assert!((-1.5..1.5).contains(&p.velocity_x));
            assert!((-1.5..1.5).contains(&p.velocity_y));
            assert!((0.2..0.7).contains(&p.opacity));
            assert!(p.color == Color::TRAIL_CYAN || p.color == Color::TRAIL_AQUA);
        }
    }

    #[test]
    fn test_palette_is_roughly_even() {
        let config = TrailConfig::default();
        let mut rng = trail_rng(Some(99));

        let cyan = (0..10_000)
            .filter(|_| Particle::spawn(0.0, 0.0, &config, &mut rng).color == Color::TRAIL_CYAN)
            .count();
        assert!((4_500..5_500).contains(&cyan), "cyan picked {cyan} times");
    }

    #[test]
    fn test_collapsed_range() {
        let config = TrailConfig {
            size_range: [2.0, 2.0],
            speed_range: [0.0, 0.0],
            ..TrailConfig::default()
        };
        let p = Particle::spawn(0.0, 0.0, &config, &mut trail_rng(Some(5)));
        assert_eq!(p.size, 2.0);
        assert_eq!((p.velocity_x, p.velocity_y), (0.0, 0.0));
    }

    #[test]
    fn test_overflowing_span_does_not_panic() {
        // Built directly, so validation never saw it.
        let config = TrailConfig {
            speed_range: [-3.0e38, 3.0e38],
            ..TrailConfig::default()
        };
        let p = Particle::spawn(0.0, 0.0, &config, &mut trail_rng(Some(5)));
        assert_eq!((p.velocity_x, p.velocity_y), (-3.0e38, -3.0e38));
    }

    #[test]
    fn test_update() {
        let mut p = fixed(0.5, 2.0);
        p.update(0.99, 0.98);

        assert_eq!((p.x, p.y), (11.0, 19.5));
        assert_eq!(p.opacity, 0.5 * 0.99);
        assert_eq!(p.size, 2.0 * 0.98);
        assert_eq!((p.velocity_x, p.velocity_y), (1.0, -0.5));
    }

    #[test]
    fn test_visibility_is_strict() {
        assert!(fixed(0.1001, 1.0).is_visible(0.1));
        assert!(!fixed(0.1, 1.0).is_visible(0.1));
    }
}
