// Game session controller
//
// A session is a phase machine over a shared world. Each phase handles the
// commands pressed during a tick and then advances itself, answering with a
// `Transition` the controller applies:
//
// Intro -> (GameSelect) -> Overworld <-> Battle / Menu / Dialogue
//       Overworld -> ChapterComplete -> Overworld ... -> Victory
//       Overworld / Battle -> GameOver -> (new session)

mod battle;
pub mod controller;
pub mod events;
pub mod overworld;
pub mod phase;
pub mod screens;
pub mod view;
pub mod world;

pub use controller::Session;
pub use events::{SessionEvent, Track};
pub use phase::{Phase, PhaseHandler, PhaseKind, Transition};
pub use view::FrameView;
pub use world::World;
