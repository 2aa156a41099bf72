//! Parallax tilt for a framed element.
//!
//! The frame leans toward the pointer: pointer at the frame's center means
//! no rotation, pointer at an edge means `max_degrees`. The pointer is
//! tracked over the whole page, not just the frame, so the rotation keeps
//! growing past the edges.

use std::fmt;

use crate::config::TiltConfig;

/// Axis-aligned rectangle in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Maps a point to rect-relative coordinates (0,0 top-left, 1,1
    /// bottom-right). `None` if the rect is degenerate.
    #[must_use]
    pub fn normalize(&self, px: f32, py: f32) -> Option<(f32, f32)> {
        let u = (px - self.x) / self.width;
        let v = (py - self.y) / self.height;
        (u.is_finite() && v.is_finite()).then_some((u, v))
    }
}

/// A transform applied to the framed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Rotation around the X axis, degrees. Positive tips the bottom away.
    pub rotate_x_deg: f32,
    /// Rotation around the Y axis, degrees.
    pub rotate_y_deg: f32,
    /// Uniform scale.
    pub scale: f32,
}

impl Tilt {
    /// No rotation, natural size.
    pub const REST: Self = Self {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        scale: 1.0,
    };
}

impl Default for Tilt {
    fn default() -> Self {
        Self::REST
    }
}

/// Formats as a CSS `transform` value.
impl fmt::Display for Tilt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rotateX({}deg) rotateY({}deg) scale({})",
            self.rotate_x_deg, self.rotate_y_deg, self.scale
        )
    }
}

/// Tracks the pointer and produces the frame's tilt.
#[derive(Debug, Clone)]
pub struct TiltEffect {
    config: TiltConfig,
    frame: Rect,
    viewport_width: f32,
    current: Tilt,
}

impl TiltEffect {
    /// Creates an effect for `frame` in a viewport `viewport_width` wide.
    #[must_use]
    pub fn new(config: TiltConfig, frame: Rect, viewport_width: f32) -> Self {
        Self {
            config,
            frame,
            viewport_width,
            current: Tilt::REST,
        }
    }

    /// Pointer moved. Narrow viewports and degenerate frames leave the
    /// tilt unchanged.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Tilt {
        if self.viewport_width <= self.config.min_viewport_width {
            return self.current;
        }
        let Some((u, v)) = self.frame.normalize(x, y) else {
            return self.current;
        };

        let span = self.config.max_degrees * 2.0;
        self.current = Tilt {
            rotate_x_deg: (v - 0.5) * span,
            rotate_y_deg: (u - 0.5) * -span,
            scale: self.config.hover_scale,
        };
        self.current
    }

    /// Pointer left the frame: back to rest.
    pub fn on_pointer_leave(&mut self) -> Tilt {
        self.current = Tilt::REST;
        self.current
    }

    /// Viewport changed width.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    /// Frame moved or resized.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// The most recent tilt.
    #[must_use]
    pub fn current(&self) -> Tilt {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(viewport_width: f32) -> TiltEffect {
        TiltEffect::new(
            TiltConfig::default(),
            Rect::new(100.0, 100.0, 200.0, 400.0),
            viewport_width,
        )
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_center_is_flat() {
        let tilt = effect(1280.0).on_pointer_move(200.0, 300.0);
        assert!(close(tilt.rotate_x_deg, 0.0));
        assert!(close(tilt.rotate_y_deg, 0.0));
        assert!(close(tilt.scale, 1.05));
    }

    #[test]
    fn test_corners() {
        let mut effect = effect(1280.0);

        let top_left = effect.on_pointer_move(100.0, 100.0);
        assert!(close(top_left.rotate_x_deg, -10.0));
        assert!(close(top_left.rotate_y_deg, 10.0));

        let bottom_right = effect.on_pointer_move(300.0, 500.0);
        assert!(close(bottom_right.rotate_x_deg, 10.0));
        assert!(close(bottom_right.rotate_y_deg, -10.0));
    }

    #[test]
    fn test_outside_frame_keeps_growing() {
        let tilt = effect(1280.0).on_pointer_move(500.0, 300.0);
        assert!(close(tilt.rotate_y_deg, -30.0));
    }

    #[test]
    fn test_narrow_viewport_ignored() {
        let mut effect = effect(768.0);
        assert_eq!(effect.on_pointer_move(100.0, 100.0), Tilt::REST);

        effect.set_viewport_width(769.0);
        assert_ne!(effect.on_pointer_move(100.0, 100.0), Tilt::REST);
    }

    #[test]
    fn test_leave_resets() {
        let mut effect = effect(1280.0);
        effect.on_pointer_move(120.0, 130.0);
        assert_eq!(effect.on_pointer_leave(), Tilt::REST);
        assert_eq!(effect.current(), Tilt::REST);
    }

    #[test]
    fn test_degenerate_frame_ignored() {
        let mut effect = effect(1280.0);
        effect.set_frame(Rect::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(effect.on_pointer_move(10.0, 10.0), Tilt::REST);
    }

    #[test]
    fn test_css() {
        assert_eq!(Tilt::REST.to_string(), "rotateX(0deg) rotateY(0deg) scale(1)");
    }
}
