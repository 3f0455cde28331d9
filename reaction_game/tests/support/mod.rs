// Shared helpers for driving a real game loop under paused tokio time.
use std::time::Duration;

use reaction_game::GameHandle;
use reaction_game::domain::{DelayRange, Leaderboard, Phase};
use reaction_game::interface_adapters::utils::rng::RandomDelay;
use reaction_game::use_cases::{GameEvent, GameSnapshot};

// Generous bound so a broken transition fails the test instead of hanging it.
const WAIT_LIMIT: Duration = Duration::from_secs(60);

// Spawn a game whose waiting delay is always exactly `delay_ms`.
pub fn spawn_fixed_delay_game(delay_ms: u64) -> GameHandle {
    let range = DelayRange::new(delay_ms, delay_ms + 1).expect("valid delay range");
    reaction_game::spawn_game(RandomDelay::new(range, Some(7)), Leaderboard::new(), 16)
}

// Deliver one intent to the game loop.
pub async fn send(game: &GameHandle, event: GameEvent) {
    game.event_tx
        .send(event)
        .await
        .expect("game loop should be running");
}

// Block until the published snapshot reaches `phase`, then return a copy of it.
pub async fn wait_for_phase(game: &mut GameHandle, phase: Phase) -> GameSnapshot {
    let snapshot = tokio::time::timeout(WAIT_LIMIT, game.snapshot_rx.wait_for(|s| s.phase == phase))
        .await
        .expect("phase should be reached in time")
        .expect("snapshot channel should stay open");
    snapshot.clone()
}

// Current snapshot without waiting for a change.
pub fn current(game: &GameHandle) -> GameSnapshot {
    game.snapshot_rx.borrow().clone()
}
