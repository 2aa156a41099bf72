//! # Frame Loop
//!
//! The host owns the clock. Browsers call back once per display refresh
//! (`requestAnimationFrame`); native hosts call back on vsync. Either way
//! the loop only ever asks for "one more frame":
//!
//! ```text
//! start() ──► request_frame()
//!                  │
//!        host calls on_frame()
//!                  │
//!   Running? ──no──► return (no reschedule)
//!      │yes
//!      ▼
//!   field.tick(surface) ──► request_frame() ──► ...
//! ```
//!
//! The page never stops its loop. [`FrameLoop::stop`] exists so a host or
//! a test can freeze the trail and step ticks by hand.

use rand::Rng;

use crate::field::ParticleField;
use crate::surface::DrawSurface;

/// The host's per-frame callback primitive.
pub trait FrameScheduler {
    /// Asks the host to call `on_frame` once at its next refresh.
    fn request_frame(&mut self);
}

/// Loop lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// Frame callbacks are ignored and not rescheduled.
    #[default]
    Stopped,
    /// Every frame callback ticks and reschedules.
    Running,
}

/// Drives [`ParticleField::tick`] from host frame callbacks.
#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    /// Current lifecycle state.
    state: LoopState,
    /// Ticks run since creation.
    frames: u64,
}

impl FrameLoop {
    /// Creates a stopped loop.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the loop and requests the first frame.
    ///
    /// Starting a running loop does nothing. A frame requested before a
    /// stop is not cancelled; it still arrives and runs once the loop is
    /// restarted.
    pub fn start<F: FrameScheduler + ?Sized>(&mut self, scheduler: &mut F) {
        if self.state == LoopState::Running {
            return;
        }
        self.state = LoopState::Running;
        tracing::info!(frames = self.frames, "frame loop started");
        scheduler.request_frame();
    }

    /// Stops the loop. The outstanding frame, if any, becomes a no-op.
    pub fn stop(&mut self) {
        if self.state == LoopState::Stopped {
            return;
        }
        self.state = LoopState::Stopped;
        tracing::info!(frames = self.frames, "frame loop stopped");
    }

    /// Host frame callback. Ticks the field and reschedules while running.
    ///
    /// Returns whether a tick ran.
    pub fn on_frame<R, S, F>(
        &mut self,
        field: &mut ParticleField<R>,
        surface: &mut S,
        scheduler: &mut F,
    ) -> bool
    where
        R: Rng,
        S: DrawSurface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        if self.state == LoopState::Stopped {
            return false;
        }
        field.tick(surface);
        self.frames += 1;
        scheduler.request_frame();
        true
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Is the loop running?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Ticks run since creation.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Scheduler that counts requests. The host polls it to decide whether to
/// deliver another frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingFrames {
    /// Frames requested and not yet delivered.
    pending: u32,
}

impl PendingFrames {
    /// Creates a scheduler with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one pending request. Returns false if none was pending.
    pub fn take(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        true
    }

    /// Number of outstanding requests.
    #[must_use]
    pub fn pending(&self) -> u32 {
        self.pending
    }
}

impl FrameScheduler for PendingFrames {
    fn request_frame(&mut self) {
        self.pending += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrailConfig;
    use crate::surface::RecordingSurface;

    fn field() -> ParticleField {
        ParticleField::new(TrailConfig {
            seed: Some(11),
            ..TrailConfig::default()
        })
    }

    #[test]
    fn test_starts_stopped() {
        let frame_loop = FrameLoop::new();
        assert_eq!(frame_loop.state(), LoopState::Stopped);
        assert!(!frame_loop.is_running());
    }

    #[test]
    fn test_start_requests_one_frame() {
        let mut frame_loop = FrameLoop::new();
        let mut scheduler = PendingFrames::new();

        frame_loop.start(&mut scheduler);
        frame_loop.start(&mut scheduler);
        assert_eq!(scheduler.pending(), 1);
        assert!(frame_loop.is_running());
    }

    #[test]
    fn test_running_loop_reschedules() {
        let mut frame_loop = FrameLoop::new();
        let mut scheduler = PendingFrames::new();
        let mut field = field();
        let mut surface = RecordingSurface::new(100, 100);

        frame_loop.start(&mut scheduler);
        for _ in 0..10 {
            assert!(scheduler.take());
            assert!(frame_loop.on_frame(&mut field, &mut surface, &mut scheduler));
        }
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(frame_loop.frames(), 10);
        assert_eq!(field.stats().ticks, 10);
    }

    #[test]
    fn test_stopped_loop_is_inert() {
        let mut frame_loop = FrameLoop::new();
        let mut scheduler = PendingFrames::new();
        let mut field = field();
        let mut surface = RecordingSurface::new(100, 100);
        field.spawn_burst(1.0, 1.0);
        let snapshot = field.particles().to_vec();

        frame_loop.start(&mut scheduler);
        frame_loop.stop();
        assert!(scheduler.take());
        assert!(!frame_loop.on_frame(&mut field, &mut surface, &mut scheduler));

        assert_eq!(scheduler.pending(), 0);
        assert_eq!(field.particles(), snapshot.as_slice());
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_restart_resumes() {
        let mut frame_loop = FrameLoop::new();
        let mut scheduler = PendingFrames::new();
        let mut field = field();
        let mut surface = RecordingSurface::new(100, 100);

        frame_loop.start(&mut scheduler);
        frame_loop.stop();
        frame_loop.start(&mut scheduler);
        assert_eq!(scheduler.pending(), 2);

        while scheduler.take() {
            if frame_loop.frames() == 3 {
                frame_loop.stop();
            }
            frame_loop.on_frame(&mut field, &mut surface, &mut scheduler);
        }
        assert_eq!(frame_loop.frames(), 3);
    }
}
