// Game logic: characters, content, battles and the session that ties them together

pub mod battle;
pub mod characters;
pub mod content;
pub mod scene;
pub mod session;
pub mod variant;
