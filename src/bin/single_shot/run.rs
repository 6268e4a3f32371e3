use macroquad::prelude::*;
use projectile_animation::core::constants::{BACKGROUND_COLOR, SINGLE_SHOT_DT_S, SINGLE_SHOT_FPS};
use projectile_animation::core::dialog::{DialogChoice, InputDialog};
use projectile_animation::core::log::{log_info, log_warning};
use projectile_animation::core::scene::Ruler;
use projectile_animation::core::session::SingleShotSession;
use projectile_animation::core::window::WorldCoords;
use projectile_animation::gfx::{FramePacer, GraphWin};

use crate::dialog_view::{dialog_window, draw_dialog, handle_typing};

pub(crate) async fn run() {
    log_info("Single-shot animation started");

    let win = GraphWin::new(WorldCoords::animation());
    let ruler = Ruler::new();
    let mut session = SingleShotSession::new();
    let mut dialog: Option<InputDialog> = None;
    let mut pacer = FramePacer::new(SINGLE_SHOT_FPS);

    loop {
        if session.is_awaiting_input() {
            let form = dialog.get_or_insert_with(|| InputDialog::new(session.last_inputs()));
            handle_typing(form);

            let mut fired = false;
            if let Some(choice) = dialog_window().mouse_click().and_then(|p| form.click(p)) {
                match choice {
                    DialogChoice::Quit => session.quit(),
                    DialogChoice::Fire => match form.values() {
                        Ok(inputs) => {
                            session.fire(inputs);
                            fired = true;
                        }
                        Err(err) => {
                            log_warning(&format!("Rejected launch parameters: {err}"));
                            form.set_error(err);
                        }
                    },
                }
            }
            if fired {
                dialog = None;
            }
        } else {
            session.step(SINGLE_SHOT_DT_S);
        }

        if session.is_finished() {
            log_info("Quit requested; closing");
            break;
        }

        clear_background(BACKGROUND_COLOR);
        win.draw_ruler(&ruler);
        for marker in session.spent() {
            win.draw_circle(marker);
        }
        if let Some(shot) = session.shot() {
            win.draw_circle(shot.marker());
        }
        if let Some(form) = &dialog {
            draw_dialog(&dialog_window(), form);
        }

        pacer.wait();
        next_frame().await;
    }
}
