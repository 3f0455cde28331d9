// Domain layer: game phases, leaderboard rules, and the ports the controller drives.

pub mod errors;
pub mod leaderboard;
pub mod ports;
pub mod state;
pub mod tuning;

pub use errors::GameError;
pub use leaderboard::{LEADERBOARD_CAPACITY, Leaderboard, LeaderboardEntry};
pub use ports::{Clock, DelaySource, Timer, TimerToken};
pub use state::{GameState, Phase, Session};
pub use tuning::DelayRange;
