//! Per-glyph metrics as they appear in the generated tables.

use kurbo::Rect;
use skrifa::GlyphId;

use crate::fixed::{f26dot6_from_f64, f26dot6_to_f64};

/// A bounding box in the y-down convention used by the generated tables.
///
/// Font outlines have y growing upward; screen (and SVG) coordinates have y
/// growing downward. `y_min` here is therefore the top of the glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl BoundingBox {
    /// Converts bounds in font (y-up) coordinates to the y-down convention.
    ///
    /// `(x_min, y_min, x_max, y_max)` becomes `(x_min, -y_max, x_max, -y_min)`.
    pub fn from_y_up(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min: negate(y_max),
            x_max,
            y_max: negate(y_min),
        }
    }

    /// Snaps scaled outline bounds to the 26.6 grid and flips the y axis.
    pub(crate) fn from_scaled_rect(rect: Rect) -> Self {
        let snap = |v: f64| f26dot6_to_f64(f26dot6_from_f64(v));
        Self::from_y_up(snap(rect.x0), snap(rect.y0), snap(rect.x1), snap(rect.y1))
    }
}

// `0.0 - v` rather than `-v` so a zero edge prints as "0", not "-0"
fn negate(v: f64) -> f64 {
    0.0 - v
}

/// Everything the generator knows about one requested code point.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphMetrics {
    pub code_point: u32,
    pub glyph_id: GlyphId,
    pub glyph_name: String,
    /// Advance in unscaled design units.
    pub advance_width: i32,
    /// Bounds at the configured char size.
    pub bounds: BoundingBox,
}
