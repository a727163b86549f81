// Engine modules: fixed-step loop, input, overworld physics, renderer

pub mod game_loop;
pub mod input;
pub mod physics;
pub mod renderer;
