use macroquad::prelude::*;
use projectile_animation::core::arcade::{ProjectileApp, TickOutcome};
use projectile_animation::core::constants::{ARCADE_DT_S, ARCADE_FPS, BACKGROUND_COLOR};
use projectile_animation::core::log::log_info;
use projectile_animation::core::scene::Ruler;
use projectile_animation::core::window::WorldCoords;
use projectile_animation::gfx::{FramePacer, GraphWin, poll_command};

use crate::hud::draw_hud;

pub(crate) async fn run() {
    log_info("Projectile app started: arrows aim, =/- height, F fires, Q quits");

    let win = GraphWin::new(WorldCoords::animation());
    let ruler = Ruler::new();
    let mut app = ProjectileApp::new();
    let mut pacer = FramePacer::new(ARCADE_FPS);

    loop {
        if let TickOutcome::Quit = app.tick(ARCADE_DT_S, poll_command()) {
            break;
        }

        clear_background(BACKGROUND_COLOR);
        win.draw_ruler(&ruler);

        let launcher = app.launcher();
        win.draw_button(launcher.target());
        win.draw_line(launcher.arrow());
        win.draw_circle(launcher.base());
        for shot in app.shots() {
            win.draw_circle(shot.marker());
        }
        draw_hud(&app);

        pacer.wait();
        next_frame().await;
    }
}
