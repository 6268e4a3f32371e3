pub mod arcade;
pub mod ballistics;
pub mod constants;
pub mod dialog;
pub mod error;
pub mod launcher;
pub mod log;
pub mod projectile;
pub mod scene;
pub mod session;
pub mod shot;
pub mod widgets;
pub mod window;

#[cfg(test)]
pub(crate) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "actual={actual}, expected={expected}, tolerance={tolerance}"
    );
}
