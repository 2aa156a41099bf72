//! 2D drawing surface.
//!
//! The trail only ever clears and fills circles. Hosts implement
//! [`DrawSurface`] over whatever canvas they own; [`RecordingSurface`]
//! keeps the frame as a command list for headless runs, tests, and
//! instanced GPU upload.

use crate::style::Color;

/// Output target for one frame of trail rendering.
pub trait DrawSurface {
    /// Current drawable extent `(width, height)` in pixels.
    fn extent(&self) -> (u32, u32);

    /// Sets the drawable extent. Zero is accepted as-is.
    fn resize(&mut self, width: u32, height: u32);

    /// Clears the whole extent.
    fn clear(&mut self);

    /// Fills a circle centered at `(x, y)` with `color` at `alpha`.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color, alpha: f32);
}

/// A recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Surface cleared.
    Clear {
        /// Extent at the time of the clear.
        width: u32,
        /// Extent at the time of the clear.
        height: u32,
    },
    /// Filled circle.
    Circle {
        /// Center X.
        x: f32,
        /// Center Y.
        y: f32,
        /// Radius.
        radius: f32,
        /// Fill color.
        color: Color,
        /// Per-shape alpha.
        alpha: f32,
    },
}

/// Surface that records commands instead of rasterizing.
///
/// A clear drops everything recorded before it, so after a tick the
/// command list holds exactly that tick's frame.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Creates a surface with the given extent.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::with_capacity(1024),
        }
    }

    /// Commands recorded since the last clear (the clear included).
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of circles in the current frame.
    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.circles().count()
    }

    /// Iterates the circles of the current frame in draw order.
    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    /// Packs the current frame's circles for instanced drawing.
    #[must_use]
    pub fn instances(&self) -> Vec<CircleInstance> {
        self.commands
            .iter()
            .filter_map(|command| match *command {
                DrawCommand::Circle {
                    x,
                    y,
                    radius,
                    color,
                    alpha,
                } => Some(CircleInstance::new(x, y, radius, color.with_alpha(color.a * alpha))),
                DrawCommand::Clear { .. } => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn extent(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear {
            width: self.width,
            height: self.height,
        });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color, alpha: f32) {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            color,
            alpha,
        });
    }
}

/// One circle as uploaded to an instance buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CircleInstance {
    /// Center (x, y) + radius + padding.
    pub center_radius: [f32; 4],
    /// Straight RGBA with the shape alpha folded into `a`.
    pub color: [f32; 4],
}

impl CircleInstance {
    /// Size of an instance in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Creates a new instance.
    #[must_use]
    pub const fn new(x: f32, y: f32, radius: f32, color: Color) -> Self {
        Self {
            center_radius: [x, y, radius, 0.0],
            color: color.to_array(),
        }
    }
}
