//! # Trail Configuration
//!
//! Every tunable of the trail lives here. Defaults reproduce the portfolio
//! page exactly; a TOML file only needs the keys it wants to change.
//!
//! ```toml
//! seed = 42
//! burst_count = 8
//! palette = ["#ff4f9a", "#ffd166"]
//!
//! [tilt]
//! max_degrees = 6.0
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{TrailError, TrailResult};
use crate::style::Color;

/// Tunables for the particle trail.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrailConfig {
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Particles spawned per pointer-move event.
    pub burst_count: u32,
    /// Initial radius range `[min, max)`.
    pub size_range: [f32; 2],
    /// Per-axis velocity range `[min, max)`, pixels per tick.
    pub speed_range: [f32; 2],
    /// Initial opacity range `[min, max)`.
    pub opacity_range: [f32; 2],
    /// Opacity multiplier applied every tick.
    pub opacity_decay: f32,
    /// Size multiplier applied every tick.
    pub size_decay: f32,
    /// Particles at or below this opacity are culled.
    pub visibility_threshold: f32,
    /// Colors picked uniformly at spawn.
    pub palette: Vec<Color>,
    /// Parallax tilt tunables.
    pub tilt: TiltConfig,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            seed: None,
            burst_count: 5,
            size_range: [1.0, 4.0],
            speed_range: [-1.5, 1.5],
            opacity_range: [0.2, 0.7],
            opacity_decay: 0.99,
            size_decay: 0.98,
            visibility_threshold: 0.1,
            palette: vec![Color::TRAIL_CYAN, Color::TRAIL_AQUA],
            tilt: TiltConfig::default(),
        }
    }
}

/// Tunables for the parallax tilt of a framed element.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TiltConfig {
    /// Rotation at the frame's edge, in degrees.
    pub max_degrees: f32,
    /// Scale while the pointer drives the tilt.
    pub hover_scale: f32,
    /// Viewports this narrow or narrower never tilt.
    pub min_viewport_width: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_degrees: 10.0,
            hover_scale: 1.05,
            min_viewport_width: 768.0,
        }
    }
}

impl TrailConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns error if the document is malformed or fails validation.
    pub fn from_toml_str(source: &str) -> TrailResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is malformed, or fails
    /// validation.
    pub fn from_file(path: impl AsRef<Path>) -> TrailResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| TrailError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded trail config");
        Ok(config)
    }

    /// Checks that the tunables describe a trail that decays: particles
    /// spawn visible, fade every tick, and sample from finite ranges.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> TrailResult<()> {
        let result = self.check();
        if let Err(TrailError::InvalidConfig(reason)) = &result {
            tracing::warn!(%reason, "rejected trail config");
        }
        result
    }

    fn check(&self) -> TrailResult<()> {
        if self.burst_count == 0 {
            return Err(invalid("burst_count must be at least 1"));
        }
        check_range("size_range", self.size_range)?;
        check_range("speed_range", self.speed_range)?;
        check_range("opacity_range", self.opacity_range)?;
        if self.size_range[0] <= 0.0 {
            return Err(invalid("size_range must be positive"));
        }
        if self.opacity_range[0] <= 0.0 || self.opacity_range[1] > 1.0 {
            return Err(invalid("opacity_range must lie within (0, 1]"));
        }
        check_decay("opacity_decay", self.opacity_decay)?;
        check_decay("size_decay", self.size_decay)?;
        if self.opacity_decay >= 1.0 {
            return Err(invalid("opacity_decay must be below 1 or particles never fade"));
        }
        if !(0.0..1.0).contains(&self.visibility_threshold) {
            return Err(invalid("visibility_threshold must lie within [0, 1)"));
        }
        if self.opacity_range[0] <= self.visibility_threshold {
            return Err(invalid("opacity_range must start above visibility_threshold"));
        }
        if self.palette.is_empty() {
            return Err(invalid("palette must have at least one color"));
        }
        if !self.tilt.max_degrees.is_finite() || self.tilt.hover_scale <= 0.0 {
            return Err(invalid("tilt needs a finite max_degrees and a positive hover_scale"));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> TrailError {
    TrailError::InvalidConfig(reason.to_string())
}

fn check_range(name: &str, [min, max]: [f32; 2]) -> TrailResult<()> {
    // The span must be finite too or sampling overflows.
    if min.is_finite() && max.is_finite() && min <= max && (max - min).is_finite() {
        Ok(())
    } else {
        Err(TrailError::InvalidConfig(format!(
            "{name} must be finite with min <= max, got [{min}, {max}]"
        )))
    }
}

fn check_decay(name: &str, decay: f32) -> TrailResult<()> {
    if decay > 0.0 && decay <= 1.0 {
        Ok(())
    } else {
        Err(TrailError::InvalidConfig(format!(
            "{name} must lie within (0, 1], got {decay}"
        )))
    }
}
