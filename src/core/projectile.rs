use crate::core::ballistics::{LaunchInputs, velocity_components};
use crate::core::constants::{EARTH_GRAVITY_MPS2, MAX_APEX_STEPS};

/// Flight state of a single projectile near the earth's surface, ignoring
/// air resistance. `x` is distance and `y` height, both in metres.
///
/// Any angle is accepted. Angles outside [0, 90] degrees are physically odd
/// (fired backwards or into the ground) but integrate the same way.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
}

impl Projectile {
    pub fn new(angle_deg: f64, speed_mps: f64, height_m: f64) -> Self {
        Self::launch(LaunchInputs {
            angle_deg,
            speed_mps,
            height_m,
        })
    }

    pub fn launch(inputs: LaunchInputs) -> Self {
        let (vx, vy) = velocity_components(inputs);
        Self {
            x: 0.0,
            y: inputs.height_m,
            vx,
            vy,
        }
    }

    /// Move the projectile `dt` seconds farther along its flight.
    ///
    /// Height uses the average of the old and new vertical velocity, which is
    /// exact for constant gravity.
    pub fn update(&mut self, dt: f64) {
        self.x += dt * self.vx;
        let vy_next = self.vy - EARTH_GRAVITY_MPS2 * dt;
        self.y += dt * (self.vy + vy_next) / 2.0;
        self.vy = vy_next;
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn velocity(&self) -> (f64, f64) {
        (self.vx, self.vy)
    }

    /// Highest point reached from now until landing, sampled every `dt`.
    /// Works on a copy, so the projectile itself is left untouched.
    ///
    /// Gives up after `MAX_APEX_STEPS` steps, or as soon as a step no longer
    /// changes the vertical velocity (speeds so large that `g * dt` rounds
    /// away).
    pub fn max_height(&self, dt: f64) -> f64 {
        let mut copy = *self;
        let mut apex = copy.y;
        if dt.is_nan() || dt <= 0.0 {
            return apex;
        }
        for _ in 0..MAX_APEX_STEPS {
            if copy.y < 0.0 || copy.vy <= 0.0 {
                break;
            }
            let vy_before = copy.vy;
            copy.update(dt);
            apex = apex.max(copy.y);
            if copy.vy == vy_before {
                break;
            }
        }
        apex
    }
}
