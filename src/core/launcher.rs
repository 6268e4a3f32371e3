use macroquad::rand::gen_range;

use crate::core::ballistics::LaunchInputs;
use crate::core::constants::{
    ARROW_WIDTH_PX, DEFAULT_ANGLE_DEG, DEFAULT_SPEED_MPS, LAUNCHER_COLOR,
    LAUNCHER_DEFAULT_HEIGHT_M, MARKER_RADIUS_M, TARGET_HEIGHT_M, TARGET_START_X, TARGET_START_Y,
    TARGET_WIDTH_M, TARGET_X_RANGE, TARGET_Y_RANGE,
};
use crate::core::scene::{Circle, Graphic, Line, Point};
use crate::core::shot::ShotTracker;
use crate::core::widgets::Button;

/// Aimable gun at the left edge of the field, plus the target it shoots at.
pub struct Launcher {
    angle_rad: f64,
    speed_mps: f64,
    height_m: f64,
    base: Circle,
    arrow: Line,
    target: Button,
}

impl Launcher {
    pub fn new() -> Self {
        let mut launcher = Self {
            angle_rad: DEFAULT_ANGLE_DEG.to_radians(),
            speed_mps: DEFAULT_SPEED_MPS,
            height_m: LAUNCHER_DEFAULT_HEIGHT_M,
            base: Circle::new(Point::new(0.0, 0.0), MARKER_RADIUS_M),
            arrow: Line::new(Point::new(0.0, 0.0), Point::new(0.0, 0.0)),
            target: new_target(Point::new(TARGET_START_X, TARGET_START_Y)),
        };
        launcher.redraw();
        launcher
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle_rad.to_degrees()
    }

    pub fn angle_rad(&self) -> f64 {
        self.angle_rad
    }

    pub fn speed_mps(&self) -> f64 {
        self.speed_mps
    }

    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    pub fn aim(&self) -> LaunchInputs {
        LaunchInputs::new(self.angle_deg(), self.speed_mps, self.height_m)
    }

    pub fn adj_angle(&mut self, delta_deg: f64) {
        self.angle_rad += delta_deg.to_radians();
        self.redraw();
    }

    pub fn adj_speed(&mut self, delta_mps: f64) {
        self.speed_mps += delta_mps;
        self.redraw();
    }

    pub fn adj_height(&mut self, delta_m: f64) {
        self.height_m += delta_m;
        self.redraw();
    }

    /// Replace the aim arrow and the base marker to match the current aim.
    pub fn redraw(&mut self) {
        self.arrow.undraw();
        self.base.undraw();

        let tip = Point::new(
            self.speed_mps * self.angle_rad.cos(),
            self.speed_mps * self.angle_rad.sin() + self.height_m,
        );
        let mut arrow = Line::new(Point::new(0.0, self.height_m), tip);
        arrow.set_arrow(true);
        arrow.set_width(ARROW_WIDTH_PX);
        arrow.draw();
        self.arrow = arrow;

        let mut base = Circle::new(Point::new(0.0, self.height_m), MARKER_RADIUS_M);
        base.set_fill(LAUNCHER_COLOR);
        base.set_outline(LAUNCHER_COLOR);
        base.draw();
        self.base = base;
    }

    /// A new shot from the current aim. The aim itself is left as it is.
    pub fn fire(&self) -> ShotTracker {
        ShotTracker::launch(self.aim())
    }

    pub fn base(&self) -> &Circle {
        &self.base
    }

    pub fn arrow(&self) -> &Line {
        &self.arrow
    }

    pub fn target(&self) -> &Button {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut Button {
        &mut self.target
    }

    /// Move the target to a fresh random spot.
    pub fn draw_target(&mut self) {
        let x = gen_range(TARGET_X_RANGE.0, TARGET_X_RANGE.1 + 1);
        let y = gen_range(TARGET_Y_RANGE.0, TARGET_Y_RANGE.1 + 1);
        self.place_target(Point::new(f64::from(x), f64::from(y)));
    }

    pub fn place_target(&mut self, center: Point) {
        self.target.undraw();
        self.target = new_target(center);
    }
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new()
    }
}

fn new_target(center: Point) -> Button {
    let mut target = Button::new(center, TARGET_WIDTH_M, TARGET_HEIGHT_M, "");
    target.activate();
    target
}

#[cfg(test)]
mod tests {
    use super::Launcher;
    use crate::core::assert_close;
    use crate::core::scene::{Graphic, Point};

    #[test]
    fn starts_at_default_aim() {
        let launcher = Launcher::new();
        assert_close(launcher.angle_deg(), 45.0, 1e-9);
        assert_close(launcher.speed_mps(), 40.0, 0.0);
        assert_close(launcher.height_m(), 0.0, 0.0);
        assert!(launcher.arrow().is_drawn() && launcher.base().is_drawn());
        assert!(launcher.target().is_active());
        assert_eq!(launcher.target().center, Point::new(200.0, 10.0));
    }

    #[test]
    fn angle_adjustments_cancel_out() {
        let mut launcher = Launcher::new();
        let before = launcher.angle_rad();
        launcher.adj_angle(5.0);
        assert_close(launcher.angle_deg(), 50.0, 1e-9);
        launcher.adj_angle(-5.0);
        assert_close(launcher.angle_rad(), before, 1e-12);
    }

    #[test]
    fn arrow_tracks_every_adjustment() {
        let mut launcher = Launcher::new();
        launcher.adj_angle(45.0);
        launcher.adj_speed(-10.0);
        launcher.adj_height(5.0);

        let arrow = launcher.arrow();
        assert_close(arrow.p1.x, 0.0, 0.0);
        assert_close(arrow.p1.y, 5.0, 0.0);
        assert_close(arrow.p2.x, 0.0, 1e-9);
        assert_close(arrow.p2.y, 35.0, 1e-9);
        assert!(arrow.arrow_head);
        assert_eq!(launcher.base().center, Point::new(0.0, 5.0));
    }

    #[test]
    fn firing_keeps_the_aim() {
        let mut launcher = Launcher::new();
        launcher.adj_height(10.0);
        let mut a = launcher.fire();
        let mut b = launcher.fire();
        for _ in 0..40 {
            a.update(1.0 / 30.0);
            b.update(1.0 / 30.0);
        }
        assert_eq!(a.position(), b.position());
        assert_close(launcher.height_m(), 10.0, 0.0);
        assert_close(launcher.angle_deg(), 45.0, 1e-9);
    }

    #[test]
    fn retargeting_stays_in_range() {
        let mut launcher = Launcher::new();
        for _ in 0..200 {
            launcher.draw_target();
            let c = launcher.target().center;
            assert!((100.0..=200.0).contains(&c.x), "x out of range: {}", c.x);
            assert!((0.0..=145.0).contains(&c.y), "y out of range: {}", c.y);
            assert_eq!(c.x.fract(), 0.0);
            assert!(launcher.target().is_active() && launcher.target().is_drawn());
        }
    }

    #[test]
    fn shot_at_target_centre_hits() {
        let mut launcher = Launcher::new();
        launcher.place_target(Point::new(150.0, 40.0));
        assert!(launcher.target().clicked(Point::new(150.0, 40.0)));
        assert!(!launcher.target().clicked(Point::new(156.0, 40.0)));
        assert!(!launcher.target().clicked(Point::new(150.0, 51.0)));
    }
}
