//! Events delivered by the host page.

/// An input event relevant to the trail effects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Pointer moved to client coordinates `(x, y)`.
    PointerMove {
        /// Client X.
        x: f32,
        /// Client Y.
        y: f32,
    },
    /// Pointer left the tilted frame's element.
    ///
    /// The host hit-tests the frame and sends this on the way out; the
    /// scene never infers it from positions. Any later [`PointerMove`],
    /// inside the frame or not, tilts the frame again.
    ///
    /// [`PointerMove`]: HostEvent::PointerMove
    PointerLeave,
    /// Viewport resized; the canvas follows it.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
}

impl HostEvent {
    /// Shorthand for [`HostEvent::PointerMove`].
    #[must_use]
    pub const fn pointer(x: f32, y: f32) -> Self {
        Self::PointerMove { x, y }
    }

    /// Shorthand for [`HostEvent::Resize`].
    #[must_use]
    pub const fn resize(width: u32, height: u32) -> Self {
        Self::Resize { width, height }
    }
}
