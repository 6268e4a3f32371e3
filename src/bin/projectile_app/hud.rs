use macroquad::prelude::*;
use projectile_animation::core::arcade::ProjectileApp;

pub(crate) fn draw_hud(app: &ProjectileApp) {
    let launcher = app.launcher();
    draw_text(
        &format!(
            "Angle: {:.0} deg | Velocity: {:.0} m/s | Height: {:.0} m | Hits: {}",
            launcher.angle_deg(),
            launcher.speed_mps(),
            launcher.height_m(),
            app.hits()
        ),
        10.0,
        20.0,
        20.0,
        DARKGRAY,
    );
    draw_text(
        "Up/Down angle | Left/Right velocity | =/- height | F fire | Q quit",
        10.0,
        40.0,
        16.0,
        GRAY,
    );
}
