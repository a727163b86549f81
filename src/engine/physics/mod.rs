// Overworld physics: kinematic bodies against static platforms

pub mod body;
pub mod collision;
pub mod world;

pub use body::{Body, Facing, PaperMode, Pose, BODY_HEIGHT, BODY_WIDTH};
pub use collision::Platform;
pub use world::{advance, SCREEN_HEIGHT, SCREEN_WIDTH};
