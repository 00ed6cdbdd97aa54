use kurbo::{BezPath, Point, Rect, Shape};
use skrifa::outline::OutlinePen;

/// Pen that records an outline so that its tight bounds can be computed.
///
/// The control box of an outline (the extent of all of its points) is not
/// what we want here: off-curve points of a quadratic or cubic segment can
/// lie well outside the curve. The recorded path is handed to kurbo, which
/// computes the bounds from the curve extrema.
#[derive(Default)]
pub struct BoundsPen {
    path: BezPath,
}

impl BoundsPen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tight bounding box of everything drawn so far, or `None`
    /// for an empty outline.
    pub fn bounds(&self) -> Option<Rect> {
        if self.path.elements().is_empty() {
            return None;
        }
        Some(self.path.bounding_box())
    }
}

fn point(x: f32, y: f32) -> Point {
    Point::new(x as f64, y as f64)
}

// skrifa begins every contour with a move, so the path is never missing
// its initial point.
impl OutlinePen for BoundsPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to(point(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to(point(x, y));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.path.quad_to(point(cx0, cy0), point(x, y));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.path.curve_to(point(cx0, cy0), point(cx1, cy1), point(x, y));
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}
