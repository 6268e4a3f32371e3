use crate::core::constants::EARTH_GRAVITY_MPS2;
use crate::core::error::BallisticsError;
use crate::core::projectile::Projectile;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchInputs {
    pub angle_deg: f64,
    pub speed_mps: f64,
    pub height_m: f64,
}

impl LaunchInputs {
    pub fn new(angle_deg: f64, speed_mps: f64, height_m: f64) -> Self {
        Self {
            angle_deg,
            speed_mps,
            height_m,
        }
    }
}

pub fn velocity_components(inputs: LaunchInputs) -> (f64, f64) {
    let theta = inputs.angle_deg.to_radians();
    let vx = inputs.speed_mps * theta.cos();
    let vy = inputs.speed_mps * theta.sin();
    (vx, vy)
}

pub fn trajectory_at_time(inputs: LaunchInputs, time_s: f64) -> (f64, f64) {
    let (vx, vy) = velocity_components(inputs);
    let x = vx * time_s;
    let y = inputs.height_m + (vy * time_s) - (0.5 * EARTH_GRAVITY_MPS2 * time_s * time_s);
    (x, y)
}

pub fn flight_time_and_range(inputs: LaunchInputs) -> Result<(f64, f64), BallisticsError> {
    if !inputs.angle_deg.is_finite()
        || !inputs.speed_mps.is_finite()
        || !inputs.height_m.is_finite()
    {
        return Err(BallisticsError::NonFinite);
    }
    if inputs.speed_mps < 0.0 {
        return Err(BallisticsError::NegativeSpeed);
    }

    let (_, vy) = velocity_components(inputs);
    let discriminant = vy * vy + 2.0 * EARTH_GRAVITY_MPS2 * inputs.height_m;
    if discriminant < 0.0 {
        return Err(BallisticsError::NoLanding { discriminant });
    }

    let t_land = (vy + discriminant.sqrt()) / EARTH_GRAVITY_MPS2;
    if t_land < 0.0 {
        return Err(BallisticsError::NegativeFlightTime { time_s: t_land });
    }

    let (range, _) = trajectory_at_time(inputs, t_land);
    Ok((t_land, range))
}

/// Integrated flight, stepped every `dt` seconds until the projectile drops
/// below ground or `max_time_s` runs out.
#[derive(Clone, Debug)]
pub struct FlightSample {
    pub points: Vec<(f64, f64)>,
    pub flight_time_s: f64,
    pub range_m: f64,
    pub apex_m: f64,
}

pub fn sample_flight(inputs: LaunchInputs, dt: f64, max_time_s: f64) -> FlightSample {
    let mut projectile = Projectile::launch(inputs);
    let mut apex_m = projectile.y();
    let mut points = vec![(projectile.x(), projectile.y())];
    let mut elapsed = 0.0;

    if dt > 0.0 {
        while projectile.y() >= 0.0 && elapsed < max_time_s {
            projectile.update(dt);
            elapsed += dt;
            apex_m = apex_m.max(projectile.y());
            points.push((projectile.x(), projectile.y()));
        }
    }

    FlightSample {
        points,
        flight_time_s: elapsed,
        range_m: projectile.x(),
        apex_m,
    }
}
