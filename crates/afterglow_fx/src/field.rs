//! Particle Field Simulator
//!
//! Architecture:
//! 1. Pointer-move pushes a burst of particles at the pointer
//! 2. Each frame: clear, cull faded particles, update + draw survivors
//! 3. A particle is dropped the tick its opacity reaches the threshold
//!
//! The field owns every particle. Nothing outside it can mutate one; the
//! only way a particle leaves is by fading out (or [`ParticleField::clear`]).

use rand::Rng;

use crate::config::TrailConfig;
use crate::particle::Particle;
use crate::rng::{trail_rng, TrailRng};
use crate::surface::DrawSurface;

/// Counters for the life of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldStats {
    /// Ticks run.
    pub ticks: u64,
    /// Particles ever created.
    pub spawned: u64,
    /// Particles ever culled.
    pub culled: u64,
    /// Particles culled by the last tick.
    pub culled_last_tick: u32,
}

/// The live collection of trail particles and the rules that age it.
#[derive(Debug, Clone)]
pub struct ParticleField<R = TrailRng> {
    /// Live particles in insertion order.
    particles: Vec<Particle>,
    /// Spawn ranges and decay rates.
    config: TrailConfig,
    /// Random source for spawn parameters.
    rng: R,
    /// Lifetime counters.
    stats: FieldStats,
}

impl ParticleField<TrailRng> {
    /// Creates an empty field seeded from `config.seed`.
    #[must_use]
    pub fn new(config: TrailConfig) -> Self {
        let rng = trail_rng(config.seed);
        Self::with_rng(config, rng)
    }
}

impl Default for ParticleField<TrailRng> {
    fn default() -> Self {
        Self::new(TrailConfig::default())
    }
}

impl<R: Rng> ParticleField<R> {
    /// Creates an empty field drawing spawn parameters from `rng`.
    #[must_use]
    pub fn with_rng(config: TrailConfig, rng: R) -> Self {
        Self {
            particles: Vec::with_capacity(256),
            config,
            rng,
            stats: FieldStats::default(),
        }
    }

    /// Appends one particle at `(x, y)` with randomized parameters.
    ///
    /// It does not move until the next tick.
    pub fn create(&mut self, x: f32, y: f32) {
        let particle = Particle::spawn(x, y, &self.config, &mut self.rng);
        self.particles.push(particle);
        self.stats.spawned += 1;
    }

    /// Pointer-move handler: creates `burst_count` particles at `(x, y)`.
    pub fn spawn_burst(&mut self, x: f32, y: f32) {
        for _ in 0..self.config.burst_count {
            self.create(x, y);
        }
    }

    /// Runs one frame: clear, cull, then update and draw each survivor.
    ///
    /// A particle that fades to the threshold during this update is dropped
    /// here and not drawn, so between ticks every live particle is visible.
    pub fn tick<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();

        let threshold = self.config.visibility_threshold;
        let opacity_decay = self.config.opacity_decay;
        let size_decay = self.config.size_decay;
        let before = self.particles.len();

        self.particles.retain(|p| p.is_visible(threshold));
        self.particles.retain_mut(|p| {
            p.update(opacity_decay, size_decay);
            let visible = p.is_visible(threshold);
            if visible {
                surface.fill_circle(p.x, p.y, p.size, p.color, p.opacity);
            }
            visible
        });

        let culled = before - self.particles.len();
        self.stats.ticks += 1;
        self.stats.culled += culled as u64;
        self.stats.culled_last_tick = u32::try_from(culled).unwrap_or(u32::MAX);
    }

    /// Drops every live particle.
    pub fn clear(&mut self) {
        self.stats.culled += self.particles.len() as u64;
        self.particles.clear();
    }

    /// Live particles in stable (insertion) order.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Is the field empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Returns lifetime counters.
    #[must_use]
    pub fn stats(&self) -> FieldStats {
        self.stats
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }
}
