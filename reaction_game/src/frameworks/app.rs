// Framework bootstrap for the reaction game runtime.

use crate::domain::Leaderboard;
use crate::frameworks::config;
use crate::interface_adapters::clock::MonotonicClock;
use crate::interface_adapters::timer::TokioTimer;
use crate::interface_adapters::tui;
use crate::interface_adapters::utils::rng::RandomDelay;
use crate::use_cases::{GameController, GameEvent, GameSnapshot, game_task};

use std::fs::File;
use std::io::Result;
use std::sync::Mutex;
use tokio::sync::{mpsc, watch};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_file = config::log_file();
    let writer = match File::create(&log_file) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        // No usable log file: stay silent rather than scribble over the UI.
        Err(_) => BoxMakeWriter::new(std::io::sink),
    };

    if config::json_logs() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        tui::restore_terminal();
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Channels and the spawned game loop for one play session.
pub struct GameHandle {
    pub event_tx: mpsc::Sender<GameEvent>,
    pub snapshot_rx: watch::Receiver<GameSnapshot>,
    pub task: tokio::task::JoinHandle<()>,
}

/// Wires the production adapters into a controller and spawns its game loop.
pub fn spawn_game(
    delays: RandomDelay,
    leaderboard: Leaderboard,
    channel_capacity: usize,
) -> GameHandle {
    let (event_tx, event_rx) = mpsc::channel::<GameEvent>(channel_capacity);

    let controller = GameController::new(
        MonotonicClock::new(),
        TokioTimer::new(&event_tx),
        delays,
        leaderboard,
    );
    let (snapshot_tx, snapshot_rx) = watch::channel(controller.snapshot());
    let task = tokio::spawn(game_task(event_rx, snapshot_tx, controller));

    GameHandle {
        event_tx,
        snapshot_rx,
        task,
    }
}

pub async fn run(delays: RandomDelay, leaderboard: Leaderboard) -> Result<()> {
    let GameHandle {
        event_tx,
        snapshot_rx,
        task,
    } = spawn_game(delays, leaderboard, config::EVENT_CHANNEL_CAPACITY);

    let outcome = tui::run_terminal(event_tx.clone(), snapshot_rx).await;

    // Make sure the loop sees a shutdown even if the UI bailed out on an error.
    let _ = event_tx.send(GameEvent::Shutdown).await;
    drop(event_tx);
    if tokio::time::timeout(config::SHUTDOWN_TIMEOUT, task)
        .await
        .is_err()
    {
        tracing::warn!("game loop did not stop in time");
    }

    outcome.inspect_err(|e| {
        tracing::error!(error = %e, "terminal error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let range = config::delay_range();
    let capacity = config::leaderboard_capacity();
    tracing::info!(
        min_delay_ms = range.min_ms(),
        max_delay_ms = range.max_ms(),
        leaderboard_capacity = capacity,
        "starting reaction game"
    );

    run(
        RandomDelay::new(range, config::rng_seed()),
        Leaderboard::with_capacity(capacity),
    )
    .await
}
