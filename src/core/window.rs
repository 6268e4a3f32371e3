use crate::core::constants::{WORLD_MAX_X, WORLD_MAX_Y, WORLD_MIN_X, WORLD_MIN_Y};
use crate::core::scene::Point;

pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Plot window for a trajectory report, padded and widened to a fixed x:y ratio.
pub fn fixed_ratio_axis_window(raw_max_x: f64, raw_max_y: f64) -> (f64, f64) {
    let raw_x_span = raw_max_x.max(1.0);
    let raw_y_span = raw_max_y.max(1.0);
    let x_pad = raw_x_span * X_PADDING_RATIO;
    let y_pad = raw_y_span * Y_PADDING_RATIO;

    let mut x_span = (raw_max_x + x_pad).max(1.0);
    let mut y_span = (raw_max_y + y_pad).max(1.0);

    if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
        x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
    } else {
        y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
    }

    (x_span, y_span)
}

/// A logical coordinate system given by two opposite corners: `(x1, y1)` maps
/// to the lower-left of the viewport and `(x2, y2)` to the upper-right.
/// Either axis may be inverted by swapping its pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldCoords {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl WorldCoords {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn animation() -> Self {
        Self::new(WORLD_MIN_X, WORLD_MIN_Y, WORLD_MAX_X, WORLD_MAX_Y)
    }

    /// Offset within a `width` x `height` viewport whose origin is top-left.
    pub fn to_screen(&self, p: Point, width: f64, height: f64) -> (f64, f64) {
        let sx = (p.x - self.x1) / (self.x2 - self.x1) * width;
        let sy = (self.y2 - p.y) / (self.y2 - self.y1) * height;
        (sx, sy)
    }

    pub fn to_world(&self, sx: f64, sy: f64, width: f64, height: f64) -> Point {
        let x = self.x1 + (sx / width.max(1.0)) * (self.x2 - self.x1);
        let y = self.y2 - (sy / height.max(1.0)) * (self.y2 - self.y1);
        Point::new(x, y)
    }

    /// Pixels per world unit along x, always positive.
    pub fn x_scale(&self, width: f64) -> f64 {
        width / (self.x2 - self.x1).abs()
    }

    pub fn y_scale(&self, height: f64) -> f64 {
        height / (self.y2 - self.y1).abs()
    }
}

/// Region in which a shot stays alive. Both run loops share it.
///
/// A shot is in play while `y >= 0` and `left < x < right`: the right edge is
/// exclusive so a shot sitting exactly on it is already out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playfield {
    pub left: f64,
    pub right: f64,
    pub ground: f64,
}

impl Playfield {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        y >= self.ground && self.left < x && x < self.right
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            left: WORLD_MIN_X,
            right: WORLD_MAX_X,
            ground: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Playfield, WorldCoords, fixed_ratio_axis_window};
    use crate::core::assert_close;
    use crate::core::scene::Point;

    #[test]
    fn maps_corners_to_viewport_edges() {
        let coords = WorldCoords::animation();
        let (sx, sy) = coords.to_screen(Point::new(-10.0, -10.0), 640.0, 480.0);
        assert_close(sx, 0.0, 1e-9);
        assert_close(sy, 480.0, 1e-9);
        let (sx, sy) = coords.to_screen(Point::new(210.0, 155.0), 640.0, 480.0);
        assert_close(sx, 640.0, 1e-9);
        assert_close(sy, 0.0, 1e-9);
    }

    #[test]
    fn inverted_axis_puts_small_y_at_top() {
        let coords = WorldCoords::new(0.0, 4.5, 4.0, 0.5);
        let (_, top) = coords.to_screen(Point::new(1.0, 0.5), 200.0, 300.0);
        let (_, bottom) = coords.to_screen(Point::new(1.0, 4.5), 200.0, 300.0);
        assert_close(top, 0.0, 1e-9);
        assert_close(bottom, 300.0, 1e-9);
    }

    #[test]
    fn screen_and_world_agree() {
        let coords = WorldCoords::animation();
        let p = Point::new(123.5, 42.0);
        let (sx, sy) = coords.to_screen(p, 640.0, 480.0);
        let back = coords.to_world(sx, sy, 640.0, 480.0);
        assert_close(back.x, p.x, 1e-9);
        assert_close(back.y, p.y, 1e-9);
    }

    #[test]
    fn playfield_edges() {
        let field = Playfield::default();
        assert!(field.contains(0.0, 0.0));
        assert!(field.contains(209.9, 10.0));
        assert!(!field.contains(210.0, 10.0));
        assert!(!field.contains(-10.0, 10.0));
        assert!(field.contains(-9.9, 10.0));
        assert!(!field.contains(50.0, -0.001));
    }

    #[test]
    fn axis_window_keeps_ratio() {
        let (x, y) = fixed_ratio_axis_window(163.3, 42.8);
        assert_close(x / y, 2.0, 1e-9);
        assert!(x >= 163.3 && y >= 42.8);
    }
}
