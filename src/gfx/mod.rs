//! macroquad glue: painting scene shapes in world coordinates, reading the
//! keyboard and mouse, and pacing frames.

mod graph_win;
mod input;
mod pacing;

pub use graph_win::GraphWin;
pub use input::{command_for_key, poll_command};
pub use pacing::FramePacer;

use macroquad::prelude::Conf;

use crate::core::constants::{MSAA_SAMPLES, WINDOW_HEIGHT, WINDOW_WIDTH};

pub fn window_conf(title: &str) -> Conf {
    Conf {
        window_title: title.to_string(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}
