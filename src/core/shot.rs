use crate::core::ballistics::LaunchInputs;
use crate::core::constants::{MARKER_RADIUS_M, SHOT_COLOR};
use crate::core::projectile::Projectile;
use crate::core::scene::{Circle, Graphic, Point};

/// A projectile together with the marker that shows it. The marker is moved
/// inside `update`, so it always sits on the projectile's position.
#[derive(Clone, Debug)]
pub struct ShotTracker {
    projectile: Projectile,
    marker: Circle,
}

impl ShotTracker {
    pub fn new(angle_deg: f64, speed_mps: f64, height_m: f64) -> Self {
        Self::launch(LaunchInputs::new(angle_deg, speed_mps, height_m))
    }

    pub fn launch(inputs: LaunchInputs) -> Self {
        let projectile = Projectile::launch(inputs);
        let mut marker = Circle::new(Point::new(0.0, inputs.height_m), MARKER_RADIUS_M);
        marker.set_fill(SHOT_COLOR);
        marker.set_outline(SHOT_COLOR);
        marker.draw();
        Self { projectile, marker }
    }

    /// Advance the flight by `dt` and shift the marker by the distance between
    /// where it is drawn and where the projectile now is.
    pub fn update(&mut self, dt: f64) {
        self.projectile.update(dt);
        let dx = self.projectile.x() - self.marker.center.x;
        let dy = self.projectile.y() - self.marker.center.y;
        self.marker.move_by(dx, dy);
    }

    pub fn x(&self) -> f64 {
        self.projectile.x()
    }

    pub fn y(&self) -> f64 {
        self.projectile.y()
    }

    pub fn position(&self) -> Point {
        Point::new(self.x(), self.y())
    }

    pub fn marker(&self) -> &Circle {
        &self.marker
    }

    pub fn undraw(&mut self) {
        self.marker.undraw();
    }

    /// Give up the projectile and keep only its marker, as left on screen.
    pub fn into_marker(self) -> Circle {
        self.marker
    }
}
