// Presentation mapping from game snapshots to what the screen shows.

use crate::domain::{LeaderboardEntry, Phase};
use crate::use_cases::GameSnapshot;
use std::time::Duration;

pub const USERNAME_PROMPT: &str = "Enter username:";
pub const IDLE_TEXT: &str = "Tap when green";
pub const WAITING_TEXT: &str = "Get ready...";

/// The single element set visible for a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    UsernamePrompt,
    Idle { leaderboard: bool },
    GetReady,
    TapNow,
    Outcome { reaction_time: Duration, leaderboard: bool },
}

impl Screen {
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Self {
        if snapshot.username.is_none() {
            return Screen::UsernamePrompt;
        }

        match (snapshot.phase, snapshot.reaction_time) {
            (Phase::Start, _) => Screen::Idle {
                leaderboard: snapshot.leaderboard_visible,
            },
            (Phase::Waiting, _) => Screen::GetReady,
            (Phase::Ready, _) => Screen::TapNow,
            (Phase::Result, Some(reaction_time)) => Screen::Outcome {
                reaction_time,
                leaderboard: snapshot.leaderboard_visible,
            },
            // Result always carries a time; fall back to the idle screen if not.
            (Phase::Result, None) => Screen::Idle {
                leaderboard: snapshot.leaderboard_visible,
            },
        }
    }

    pub fn shows_leaderboard(&self) -> bool {
        matches!(
            self,
            Screen::Idle { leaderboard: true } | Screen::Outcome { leaderboard: true, .. }
        )
    }

    /// Button labels in display order, each with the key that triggers it.
    pub fn actions(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Screen::UsernamePrompt => &[("Continue", "Enter")],
            Screen::Idle { .. } => &[("Start", "Enter"), ("Leaderboard", "L")],
            Screen::GetReady => &[],
            Screen::TapNow => &[("Tap", "Space")],
            Screen::Outcome { .. } => &[("Play Again", "Enter"), ("Leaderboard", "L")],
        }
    }
}

/// Milliseconds with three decimals, e.g. `250.000 ms`.
pub fn format_reaction_time(reaction_time: Duration) -> String {
    format!("{:.3} ms", reaction_time.as_secs_f64() * 1000.0)
}

pub fn outcome_text(reaction_time: Duration) -> String {
    format!("Reaction Time: {}", format_reaction_time(reaction_time))
}

pub fn leaderboard_title(capacity: usize) -> String {
    format!("Leaderboard (Top {capacity})")
}

pub fn leaderboard_lines(entries: &[LeaderboardEntry]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            format!(
                "{}. {}: {}",
                index + 1,
                entry.username(),
                format_reaction_time(entry.reaction_time())
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(phase: Phase) -> GameSnapshot {
        GameSnapshot {
            phase,
            username: Some("alice".to_string()),
            ..GameSnapshot::default()
        }
    }

    #[test]
    fn username_prompt_wins_until_confirmed() {
        let snapshot = GameSnapshot {
            phase: Phase::Waiting,
            ..GameSnapshot::default()
        };
        assert_eq!(Screen::from_snapshot(&snapshot), Screen::UsernamePrompt);
    }

    #[test]
    fn each_phase_maps_to_its_screen() {
        assert_eq!(
            Screen::from_snapshot(&snapshot(Phase::Start)),
            Screen::Idle { leaderboard: false }
        );
        assert_eq!(
            Screen::from_snapshot(&snapshot(Phase::Waiting)),
            Screen::GetReady
        );
        assert_eq!(Screen::from_snapshot(&snapshot(Phase::Ready)), Screen::TapNow);

        let mut result = snapshot(Phase::Result);
        result.reaction_time = Some(Duration::from_millis(250));
        result.leaderboard_visible = true;
        let screen = Screen::from_snapshot(&result);
        assert_eq!(
            screen,
            Screen::Outcome {
                reaction_time: Duration::from_millis(250),
                leaderboard: true
            }
        );
        assert!(screen.shows_leaderboard());
        assert_eq!(screen.actions()[0].0, "Play Again");
    }

    #[test]
    fn reaction_time_has_three_decimals() {
        assert_eq!(format_reaction_time(Duration::from_millis(250)), "250.000 ms");
        assert_eq!(
            format_reaction_time(Duration::from_micros(187_654)),
            "187.654 ms"
        );
        assert_eq!(
            outcome_text(Duration::from_millis(42)),
            "Reaction Time: 42.000 ms"
        );
    }

    #[test]
    fn leaderboard_title_follows_capacity() {
        assert_eq!(leaderboard_title(500), "Leaderboard (Top 500)");
        assert_eq!(leaderboard_title(600), "Leaderboard (Top 600)");
    }

    #[test]
    fn leaderboard_rows_are_ranked_from_one() {
        let entries = vec![
            LeaderboardEntry::new("alice", Duration::from_millis(250)).expect("valid"),
            LeaderboardEntry::new("bob", Duration::from_millis(500)).expect("valid"),
        ];
        assert_eq!(
            leaderboard_lines(&entries),
            vec!["1. alice: 250.000 ms", "2. bob: 500.000 ms"]
        );
    }
}
