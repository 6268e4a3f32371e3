use macroquad::prelude::Conf;

mod dialog_view;
mod run;

fn window_conf() -> Conf {
    projectile_animation::gfx::window_conf(projectile_animation::core::constants::WINDOW_TITLE)
}

#[macroquad::main(window_conf)]
async fn main() {
    run::run().await;
}
