//! Canvas surface: the rendered page region and pointer coordinate translation.
//!
//! The surface owns the session's [`CanvasFrame`] and knows where the canvas
//! sits on screen, so it can turn a host pointer position into canvas pixels
//! (subtracting the canvas origin, adding the container's scroll offset). It
//! also holds the opaque document backdrop the host fetched; the surface never
//! parses or measures that fragment, it only tracks whether it has arrived —
//! interaction stays disabled until then. It knows nothing about placements.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::geometry::{CanvasFrame, Point};

/// The rendering region for one page, composited as three sub-layers:
/// backdrop (bottom, static), ghosts (middle, locked), active items (top).
#[derive(Debug)]
pub struct CanvasSurface {
    frame: CanvasFrame,
    /// Canvas top-left in the host's pointer coordinate space.
    origin: Point,
    /// Scroll offset of the container the canvas lives in.
    scroll: Point,
    /// Rendered document fragment, opaque to the core.
    backdrop: Option<String>,
}

impl CanvasSurface {
    /// Create a surface for the given frame with origin and scroll at zero.
    #[must_use]
    pub fn new(frame: CanvasFrame) -> Self {
        Self {
            frame,
            origin: Point::new(0.0, 0.0),
            scroll: Point::new(0.0, 0.0),
            backdrop: None,
        }
    }

    /// The canvas reference frame.
    #[must_use]
    pub fn frame(&self) -> &CanvasFrame {
        &self.frame
    }

    /// Rendered canvas width in pixels.
    #[must_use]
    pub fn pixel_width(&self) -> f64 {
        self.frame.pixel_width()
    }

    /// Rendered canvas height in pixels.
    #[must_use]
    pub fn pixel_height(&self) -> f64 {
        self.frame.pixel_height()
    }

    /// Record where the canvas top-left sits in pointer coordinates.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Record the scroll offset of the scrollable container.
    pub fn set_scroll(&mut self, scroll: Point) {
        self.scroll = scroll;
    }

    /// Install the rendered document backdrop. Until this is called the
    /// surface is not ready and the interactive layer stays disabled.
    pub fn set_backdrop(&mut self, html: String) {
        self.backdrop = Some(html);
    }

    /// The backdrop fragment, if it has arrived.
    #[must_use]
    pub fn backdrop(&self) -> Option<&str> {
        self.backdrop.as_deref()
    }

    /// Whether the backdrop has arrived and gestures may be processed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.backdrop.is_some()
    }

    /// Translate a pointer position from host coordinates to canvas pixels.
    #[must_use]
    pub fn to_canvas(&self, pointer: Point) -> Point {
        Point {
            x: pointer.x - self.origin.x + self.scroll.x,
            y: pointer.y - self.origin.y + self.scroll.y,
        }
    }

    /// Whether a canvas-space point falls within the rendered page.
    #[must_use]
    pub fn contains(&self, canvas_pt: Point) -> bool {
        canvas_pt.x >= 0.0
            && canvas_pt.y >= 0.0
            && canvas_pt.x <= self.pixel_width()
            && canvas_pt.y <= self.pixel_height()
    }
}
