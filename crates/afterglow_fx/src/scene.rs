//! The page's effects wired together.
//!
//! A [`TrailScene`] is what a host embeds: feed it every [`HostEvent`] and
//! every frame callback, and it keeps the canvas, the particle field and
//! the photo tilt in step.

use rand::Rng;

use crate::config::TrailConfig;
use crate::field::ParticleField;
use crate::frame_loop::{FrameLoop, FrameScheduler};
use crate::input::HostEvent;
use crate::rng::TrailRng;
use crate::surface::DrawSurface;
use crate::tilt::{Rect, Tilt, TiltEffect};

/// Particle trail, frame loop and optional tilt over one surface.
#[derive(Debug)]
pub struct TrailScene<S, R = TrailRng> {
    field: ParticleField<R>,
    frame_loop: FrameLoop,
    surface: S,
    tilt: Option<TiltEffect>,
}

impl<S: DrawSurface> TrailScene<S, TrailRng> {
    /// Creates a scene with the RNG seeded from `config.seed`.
    #[must_use]
    pub fn new(config: TrailConfig, surface: S) -> Self {
        Self::with_field(ParticleField::new(config), surface)
    }
}

impl<S: DrawSurface, R: Rng> TrailScene<S, R> {
    /// Creates a scene around an existing field.
    #[must_use]
    pub fn with_field(field: ParticleField<R>, surface: S) -> Self {
        Self {
            field,
            frame_loop: FrameLoop::new(),
            surface,
            tilt: None,
        }
    }

    /// Enables the parallax tilt for the element at `frame`.
    #[must_use]
    pub fn with_tilt(mut self, frame: Rect) -> Self {
        let (width, _) = self.surface.extent();
        let config = self.field.config().tilt;
        self.tilt = Some(TiltEffect::new(config, frame, width as f32));
        self
    }

    /// Routes one host event.
    ///
    /// Resizing touches only the surface; particles keep their positions
    /// and velocities. Leaving resets the tilt until the next move.
    pub fn handle_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::PointerMove { x, y } => {
                self.field.spawn_burst(x, y);
                if let Some(tilt) = &mut self.tilt {
                    tilt.on_pointer_move(x, y);
                }
            }
            HostEvent::PointerLeave => {
                if let Some(tilt) = &mut self.tilt {
                    tilt.on_pointer_leave();
                }
            }
            HostEvent::Resize { width, height } => {
                tracing::debug!(width, height, "resizing trail surface");
                self.surface.resize(width, height);
                if let Some(tilt) = &mut self.tilt {
                    tilt.set_viewport_width(width as f32);
                }
            }
        }
    }

    /// Starts the frame loop.
    pub fn start<F: FrameScheduler + ?Sized>(&mut self, scheduler: &mut F) {
        self.frame_loop.start(scheduler);
    }

    /// Stops the frame loop.
    pub fn stop(&mut self) {
        self.frame_loop.stop();
    }

    /// Host frame callback. Returns whether a tick ran.
    pub fn on_frame<F: FrameScheduler + ?Sized>(&mut self, scheduler: &mut F) -> bool {
        self.frame_loop
            .on_frame(&mut self.field, &mut self.surface, scheduler)
    }

    /// Moves the tilted element. No-op without a tilt.
    pub fn set_tilt_frame(&mut self, frame: Rect) {
        if let Some(tilt) = &mut self.tilt {
            tilt.set_frame(frame);
        }
    }

    /// Current tilt, if the scene has one.
    #[must_use]
    pub fn tilt(&self) -> Option<Tilt> {
        self.tilt.as_ref().map(TiltEffect::current)
    }

    /// The particle field.
    #[must_use]
    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }

    /// The frame loop.
    #[must_use]
    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }

    /// The draw surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
