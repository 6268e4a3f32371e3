use macroquad::prelude::*;
use projectile_animation::core::constants::{DIALOG_BACKGROUND_COLOR, ERROR_COLOR};
use projectile_animation::core::dialog::InputDialog;
use projectile_animation::core::scene::{Graphic, Point, Text};
use projectile_animation::gfx::GraphWin;

const DIALOG_WIDTH_PX: f32 = 200.0;
const DIALOG_HEIGHT_PX: f32 = 300.0;
const DIALOG_MARGIN_PX: f32 = 10.0;

/// Panel in the top-right corner where the launch form lives.
pub(crate) fn dialog_window() -> GraphWin {
    GraphWin::with_viewport(
        InputDialog::coords(),
        Rect::new(
            screen_width() - DIALOG_WIDTH_PX - DIALOG_MARGIN_PX,
            DIALOG_MARGIN_PX,
            DIALOG_WIDTH_PX,
            DIALOG_HEIGHT_PX,
        ),
    )
}

pub(crate) fn handle_typing(dialog: &mut InputDialog) {
    let mut edited = false;
    while let Some(ch) = get_char_pressed() {
        dialog.type_char(ch);
        edited = true;
    }
    if is_key_pressed(KeyCode::Backspace) {
        dialog.backspace();
        edited = true;
    }
    if edited {
        dialog.clear_error();
    }
    if is_key_pressed(KeyCode::Tab) {
        dialog.focus_next();
    }
}

pub(crate) fn draw_dialog(win: &GraphWin, dialog: &InputDialog) {
    win.fill(DIALOG_BACKGROUND_COLOR);
    for label in &dialog.labels {
        win.draw_text(label);
    }
    for entry in &dialog.entries {
        win.draw_entry(entry);
    }
    win.draw_button(&dialog.fire);
    win.draw_button(&dialog.quit);

    if let Some(err) = dialog.error() {
        let mut message = Text::new(Point::new(2.0, 0.6), err.to_string());
        message.color = ERROR_COLOR;
        message.draw();
        win.draw_text(&message);
    }
}
