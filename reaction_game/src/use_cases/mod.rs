// Use cases layer: the game controller and the event loop that drives it.

pub mod controller;
pub mod game;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use controller::GameController;
pub use game::game_task;
pub use types::{GameEvent, GameSnapshot};
