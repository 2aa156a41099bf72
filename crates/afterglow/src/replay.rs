//! # Headless Replay
//!
//! ```text
//! Frame N:
//! ┌─────────────────────────────────────────────────────────────┐
//! │ 1. SCRIPTED INPUT                                           │
//! │    ├─ Pointer sweep (while N < move_frames)                 │
//! │    └─ Resize (at resize_at, if set)                         │
//! │                                                             │
//! │ 2. FRAME CALLBACK                                           │
//! │    └─ Only if the loop asked for one                        │
//! │                                                             │
//! │ 3. SAMPLE                                                   │
//! │    └─ Track peak particle count                             │
//! │                                                             │
//! │ 4. PACK (after the last frame)                              │
//! │    └─ Circle instances as an upload buffer                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use afterglow_fx::{
    FieldStats, HostEvent, PendingFrames, Rect, RecordingSurface, Tilt, TrailConfig, TrailScene,
};

/// What to replay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayOptions {
    /// Frame callbacks to deliver.
    pub frames: u64,
    /// Frames during which the pointer keeps moving.
    pub move_frames: u64,
    /// Initial surface width.
    pub width: u32,
    /// Initial surface height.
    pub height: u32,
    /// Resize the viewport at this frame to this extent.
    pub resize_at: Option<(u64, u32, u32)>,
    /// Tilted photo frame, if the session has one.
    pub tilt_frame: Option<Rect>,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        Self {
            frames: 600,
            move_frames: 300,
            width: 1280,
            height: 720,
            resize_at: None,
            tilt_frame: None,
        }
    }
}

/// Summary of a finished replay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayReport {
    /// Ticks that actually ran.
    pub frames: u64,
    /// Most particles alive after any tick.
    pub peak_particles: usize,
    /// Particles alive at the end.
    pub final_particles: usize,
    /// Circles drawn by the last tick.
    pub last_frame_circles: usize,
    /// Size of the last tick's instance buffer.
    pub last_frame_bytes: usize,
    /// Tilt when the session ended.
    pub final_tilt: Option<Tilt>,
    /// Field counters at the end.
    pub stats: FieldStats,
}

/// Pointer position for `frame`: a Lissajous sweep over the surface.
#[must_use]
pub fn sweep_position(frame: u64, width: u32, height: u32) -> (f32, f32) {
    let t = frame as f32 / 60.0;
    let (w, h) = (width as f32, height as f32);
    let x = w * 0.5 + (t * 1.3).sin() * w * 0.4;
    let y = h * 0.5 + (t * 2.1).cos() * h * 0.4;
    (x, y)
}

/// Replays a scripted session and reports what the trail did.
pub fn run(config: TrailConfig, options: &ReplayOptions) -> ReplayReport {
    let surface = RecordingSurface::new(options.width, options.height);
    let mut scene = TrailScene::new(config, surface);
    if let Some(frame) = options.tilt_frame {
        scene = scene.with_tilt(frame);
    }
    let mut scheduler = PendingFrames::new();
    let (mut width, mut height) = (options.width, options.height);
    let mut peak = 0;

    scene.start(&mut scheduler);
    for frame in 0..options.frames {
        if let Some((_, w, h)) = options.resize_at.filter(|&(at, ..)| at == frame) {
            width = w;
            height = h;
            scene.handle_event(HostEvent::resize(w, h));
        }
        if frame < options.move_frames {
            let (x, y) = sweep_position(frame, width, height);
            scene.handle_event(HostEvent::pointer(x, y));
        }
        if scheduler.take() && scene.on_frame(&mut scheduler) {
            peak = peak.max(scene.field().len());
        }
        if frame % 120 == 0 {
            tracing::debug!(frame, alive = scene.field().len(), "replay progress");
        }
    }
    scene.stop();

    let instances = scene.surface().instances();
    let upload: &[u8] = bytemuck::cast_slice(&instances);

    ReplayReport {
        frames: scene.frame_loop().frames(),
        peak_particles: peak,
        final_particles: scene.field().len(),
        last_frame_circles: scene.surface().circle_count(),
        last_frame_bytes: upload.len(),
        final_tilt: scene.tilt(),
        stats: scene.field().stats(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use afterglow_fx::CircleInstance;

    fn seeded() -> TrailConfig {
        TrailConfig {
            seed: Some(3),
            ..TrailConfig::default()
        }
    }

    #[test]
    fn test_trail_dies_after_pointer_stops() {
        let report = run(
            seeded(),
            &ReplayOptions {
                frames: 500,
                move_frames: 200,
                ..ReplayOptions::default()
            },
        );

        assert_eq!(report.frames, 500);
        assert_eq!(report.final_particles, 0);
        assert_eq!(report.last_frame_circles, 0);
        assert_eq!(report.stats.spawned, 1000);
        assert_eq!(report.stats.culled, 1000);
        assert!(report.peak_particles > 500);
    }

    #[test]
    fn test_steady_state_is_bounded() {
        let report = run(
            seeded(),
            &ReplayOptions {
                frames: 1000,
                move_frames: 1000,
                ..ReplayOptions::default()
            },
        );

        // Five per frame, each living at most 194 ticks.
        assert!(report.peak_particles <= 5 * 194);
        assert_eq!(report.final_particles, report.last_frame_circles);
        assert_eq!(
            report.last_frame_bytes,
            report.last_frame_circles * CircleInstance::SIZE
        );
        assert!(report.last_frame_bytes > 0);
    }

    #[test]
    fn test_tilt_follows_sweep() {
        let frame = Rect::new(440.0, 160.0, 400.0, 400.0);
        let options = ReplayOptions {
            frames: 60,
            move_frames: 60,
            tilt_frame: Some(frame),
            ..ReplayOptions::default()
        };
        let report = run(seeded(), &options);

        let (x, y) = sweep_position(59, options.width, options.height);
        let tilt = report.final_tilt.unwrap();
        assert!((tilt.rotate_y_deg - ((x - 440.0) / 400.0 - 0.5) * -20.0).abs() < 1e-3);
        assert!((tilt.rotate_x_deg - ((y - 160.0) / 400.0 - 0.5) * 20.0).abs() < 1e-3);
        assert!(tilt.to_string().starts_with("rotateX("));

        assert_eq!(run(seeded(), &ReplayOptions::default()).final_tilt, None);
    }

    #[test]
    fn test_resize_mid_replay() {
        let report = run(
            seeded(),
            &ReplayOptions {
                frames: 100,
                resize_at: Some((50, 0, 0)),
                ..ReplayOptions::default()
            },
        );
        assert_eq!(report.frames, 100);
        assert_eq!(report.final_particles, report.last_frame_circles);
    }

    #[test]
    fn test_sweep_stays_on_surface() {
        for frame in 0..2000 {
            let (x, y) = sweep_position(frame, 800, 600);
            assert!((0.0..=800.0).contains(&x));
            assert!((0.0..=600.0).contains(&y));
        }
    }

    #[test]
    fn test_same_seed_same_report() {
        let options = ReplayOptions::default();
        assert_eq!(run(seeded(), &options), run(seeded(), &options));
    }
}
