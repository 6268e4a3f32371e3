pub mod core;
pub mod gfx;
