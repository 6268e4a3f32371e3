use macroquad::prelude::Color;

pub const EARTH_GRAVITY_MPS2: f64 = 9.8;

pub const WINDOW_TITLE: &str = "Projectile Animation";
pub const WINDOW_WIDTH: i32 = 640;
pub const WINDOW_HEIGHT: i32 = 480;
pub const MSAA_SAMPLES: i32 = 4;

// World window: lower-left and upper-right corners.
pub const WORLD_MIN_X: f64 = -10.0;
pub const WORLD_MIN_Y: f64 = -10.0;
pub const WORLD_MAX_X: f64 = 210.0;
pub const WORLD_MAX_Y: f64 = 155.0;

pub const TICK_SPACING_M: usize = 50;
pub const TICK_HEIGHT_M: f64 = 2.0;
pub const TICK_LABEL_Y: f64 = -7.0;

pub const SINGLE_SHOT_DT_S: f64 = 1.0 / 50.0;
pub const SINGLE_SHOT_FPS: f64 = 50.0;
pub const ARCADE_DT_S: f64 = 1.0 / 30.0;
pub const ARCADE_FPS: f64 = 30.0;
// Upper bound on integration steps when searching for the apex.
pub const MAX_APEX_STEPS: usize = 1_000_000;

pub const MARKER_RADIUS_M: f64 = 3.0;
pub const ARROW_WIDTH_PX: f32 = 4.0;

pub const DEFAULT_ANGLE_DEG: f64 = 45.0;
pub const DEFAULT_SPEED_MPS: f64 = 40.0;
pub const DIALOG_DEFAULT_HEIGHT_M: f64 = 2.0;
pub const LAUNCHER_DEFAULT_HEIGHT_M: f64 = 0.0;

pub const ANGLE_STEP_DEG: f64 = 5.0;
pub const SPEED_STEP_MPS: f64 = 5.0;
pub const HEIGHT_STEP_M: f64 = 5.0;

pub const TARGET_WIDTH_M: f64 = 10.0;
pub const TARGET_HEIGHT_M: f64 = 20.0;
pub const TARGET_START_X: f64 = 200.0;
pub const TARGET_START_Y: f64 = 10.0;
// Inclusive integer ranges for a freshly placed target centre.
pub const TARGET_X_RANGE: (i32, i32) = (100, 200);
pub const TARGET_Y_RANGE: (i32, i32) = (0, 145);

pub const SHOT_COLOR: Color = Color::new(0.0, 0.93, 0.0, 1.0);
pub const LAUNCHER_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const INK_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const DISABLED_INK_COLOR: Color = Color::new(0.66, 0.66, 0.66, 1.0);
pub const BACKGROUND_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const DIALOG_BACKGROUND_COLOR: Color = Color::new(0.93, 0.93, 0.95, 1.0);
pub const ERROR_COLOR: Color = Color::new(0.75, 0.1, 0.1, 1.0);
