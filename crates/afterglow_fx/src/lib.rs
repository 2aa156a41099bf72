//! # AFTERGLOW FX
//!
//! Pointer-driven effects for a portfolio page:
//! - A particle trail that sprays from the pointer and fades out
//! - A parallax tilt that leans a framed photo toward the pointer
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      FRAME PIPELINE                        │
//! ├────────────────────────────────────────────────────────────┤
//! │  HostEvent ──► TrailScene ──► ParticleField ──► DrawSurface │
//! │                    │               ▲                       │
//! │                    ▼               │                       │
//! │               TiltEffect     FrameLoop (host callback)     │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use afterglow_fx::{HostEvent, PendingFrames, RecordingSurface, TrailConfig, TrailScene};
//!
//! let config = TrailConfig { seed: Some(7), ..TrailConfig::default() };
//! let mut scene = TrailScene::new(config, RecordingSurface::new(1280, 720));
//! let mut frames = PendingFrames::new();
//!
//! scene.start(&mut frames);
//! scene.handle_event(HostEvent::pointer(640.0, 360.0));
//! while frames.take() && scene.frame_loop().frames() < 60 {
//!     scene.on_frame(&mut frames);
//! }
//! assert_eq!(scene.field().len(), 5);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod field;
pub mod frame_loop;
pub mod input;
pub mod particle;
pub mod rng;
pub mod scene;
pub mod style;
pub mod surface;
pub mod tilt;

pub use config::{TiltConfig, TrailConfig};
pub use error::{TrailError, TrailResult};
pub use field::{FieldStats, ParticleField};
pub use frame_loop::{FrameLoop, FrameScheduler, LoopState, PendingFrames};
pub use input::HostEvent;
pub use particle::Particle;
pub use rng::{trail_rng, TrailRng};
pub use scene::TrailScene;
pub use style::Color;
pub use surface::{CircleInstance, DrawCommand, DrawSurface, RecordingSurface};
pub use tilt::{Rect, Tilt, TiltEffect};
