use macroquad::prelude::Conf;

mod hud;
mod run;

fn window_conf() -> Conf {
    projectile_animation::gfx::window_conf("Projectile")
}

#[macroquad::main(window_conf)]
async fn main() {
    run::run().await;
}
