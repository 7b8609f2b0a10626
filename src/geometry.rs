//! Geometry model: the canvas reference frame and percent/pixel conversions.
//!
//! Placements are stored as percentages of the canvas so they survive
//! re-rendering at a different display scale or window size. Gestures operate
//! in on-screen pixels, so conversions always reference the *rendered* pixel
//! size (`logical × scale`, rounded to whole pixels), never the unscaled
//! logical size. Everything here is pure math with no placement semantics.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A position expressed as a percentage of the canvas dimensions.
///
/// Both axes are rounded to two decimal places, matching the stored form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentPoint {
    pub x: f64,
    pub y: f64,
}

impl PercentPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Error returned when a canvas frame cannot be constructed.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    /// Canvas dimensions or scale were zero, negative, or non-finite.
    #[error("invalid canvas geometry: {logical_width}x{logical_height} at scale {display_scale}")]
    InvalidGeometry {
        logical_width: f64,
        logical_height: f64,
        display_scale: f64,
    },
}

/// The immutable per-session canvas reference frame.
///
/// `logical_width`/`logical_height` are the fixed reference page size (e.g.
/// A4 at 96 dpi); `display_scale` is the multiplier applied for on-screen
/// rendering. Percent conversions go through the rendered pixel size, so a
/// stored percentage lands on the same relative spot at any scale.
#[derive(Debug, Clone, Copy)]
pub struct CanvasFrame {
    logical_width: f64,
    logical_height: f64,
    display_scale: f64,
}

impl CanvasFrame {
    /// Create a frame from the logical page size and display scale.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidGeometry`] unless all three values are
    /// finite and strictly positive.
    pub fn new(logical_width: f64, logical_height: f64, display_scale: f64) -> Result<Self, GeometryError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(logical_width) || !valid(logical_height) || !valid(display_scale) {
            return Err(GeometryError::InvalidGeometry {
                logical_width,
                logical_height,
                display_scale,
            });
        }
        Ok(Self { logical_width, logical_height, display_scale })
    }

    /// A4 at 96 dpi, rendered at the default dialog scale.
    #[must_use]
    pub fn a4_default() -> Self {
        Self {
            logical_width: crate::consts::A4_LOGICAL_WIDTH,
            logical_height: crate::consts::A4_LOGICAL_HEIGHT,
            display_scale: crate::consts::DEFAULT_DISPLAY_SCALE,
        }
    }

    /// Logical page width at unit scale.
    #[must_use]
    pub fn logical_width(&self) -> f64 {
        self.logical_width
    }

    /// Logical page height at unit scale.
    #[must_use]
    pub fn logical_height(&self) -> f64 {
        self.logical_height
    }

    /// The display scale this frame renders at.
    #[must_use]
    pub fn display_scale(&self) -> f64 {
        self.display_scale
    }

    /// Rendered canvas width: `logical_width × scale`, rounded to whole pixels.
    #[must_use]
    pub fn pixel_width(&self) -> f64 {
        (self.logical_width * self.display_scale).round()
    }

    /// Rendered canvas height: `logical_height × scale`, rounded to whole pixels.
    #[must_use]
    pub fn pixel_height(&self) -> f64 {
        (self.logical_height * self.display_scale).round()
    }

    /// Convert a canvas-pixel position to percentages of the rendered size.
    ///
    /// Each axis is `px / canvas_px × 100`, rounded to two decimal places.
    #[must_use]
    pub fn to_percent(&self, px: Point) -> PercentPoint {
        PercentPoint {
            x: round2(px.x / self.pixel_width() * 100.0),
            y: round2(px.y / self.pixel_height() * 100.0),
        }
    }

    /// Convert a stored percentage position back to canvas pixels. Exact
    /// inverse of [`Self::to_percent`] up to its rounding; no rounding here.
    #[must_use]
    pub fn to_pixels(&self, pct: PercentPoint) -> Point {
        Point {
            x: pct.x / 100.0 * self.pixel_width(),
            y: pct.y / 100.0 * self.pixel_height(),
        }
    }

    /// Reload path: [`Self::to_pixels`] snapped to the nearest whole pixel.
    ///
    /// Stored placements re-enter the canvas on integer pixels so reloads are
    /// deterministic (25.00% of a 635px canvas is 158.75 and lands on 159).
    #[must_use]
    pub fn to_loaded_pixels(&self, pct: PercentPoint) -> Point {
        let px = self.to_pixels(pct);
        Point { x: px.x.round(), y: px.y.round() }
    }
}

/// Clamp a desired top-left corner so a `width × height` rectangle stays
/// inside the rendered canvas.
///
/// Uses a min/max chain rather than `f64::clamp`: when the item is larger
/// than the canvas the allowed range inverts and the item pins to the origin,
/// matching the drag behavior users see.
#[must_use]
pub fn clamp_top_left(desired: Point, width: f64, height: f64, frame: &CanvasFrame) -> Point {
    Point {
        x: desired.x.min(frame.pixel_width() - width).max(0.0),
        y: desired.y.min(frame.pixel_height() - height).max(0.0),
    }
}

/// Round to two decimal places, the precision percentages are stored at.
#[must_use]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
