use super::controller::GameController;
use super::types::{GameEvent, GameSnapshot};
use crate::domain::{Clock, DelaySource, Timer};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// Single event-processing loop for one game.
///
/// Events are applied strictly in arrival order and a fresh snapshot is published
/// after each one. Ends on `Shutdown` or when every sender is gone; either way the
/// controller is torn down so no timer outlives the loop.
pub async fn game_task<C, T, D>(
    mut event_rx: mpsc::Receiver<GameEvent>,
    snapshot_tx: watch::Sender<GameSnapshot>,
    mut controller: GameController<C, T, D>,
) where
    C: Clock,
    T: Timer,
    D: DelaySource,
{
    let _ = snapshot_tx.send(controller.snapshot());

    while let Some(event) = event_rx.recv().await {
        debug!(?event, "game event");
        match event {
            GameEvent::ConfirmUsername(raw) => {
                if let Err(error) = controller.confirm_username(&raw) {
                    warn!(%error, "username rejected");
                }
            }
            GameEvent::Start => controller.start(),
            GameEvent::Tap => {
                controller.tap();
            }
            GameEvent::PlayAgain => controller.play_again(),
            GameEvent::ShowLeaderboard => controller.show_leaderboard(),
            GameEvent::HideLeaderboard => controller.hide_leaderboard(),
            GameEvent::TimerFired { token } => controller.timer_fired(token),
            GameEvent::Shutdown => break,
        }

        // Receivers may all be gone during teardown; keep draining regardless.
        let _ = snapshot_tx.send(controller.snapshot());
    }

    controller.shutdown();
    info!(
        results = controller.leaderboard().len(),
        "game loop stopped"
    );
}
