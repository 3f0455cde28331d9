// In-memory leaderboard: best reaction times first, bounded in size.

use crate::domain::errors::GameError;
use std::time::Duration;

/// Default number of entries the leaderboard keeps.
pub const LEADERBOARD_CAPACITY: usize = 500;

/// One recorded result. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    username: String,
    reaction_time: Duration,
}

impl LeaderboardEntry {
    /// Builds an entry, trimming the username. Blank names are rejected.
    pub fn new(username: &str, reaction_time: Duration) -> Result<Self, GameError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(GameError::EmptyUsername);
        }

        Ok(Self {
            username: username.to_string(),
            reaction_time,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn reaction_time(&self) -> Duration {
        self.reaction_time
    }
}

/// Entries sorted ascending by reaction time, never longer than `capacity`.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    capacity: usize,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::with_capacity(LEADERBOARD_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Inserts, re-sorts, and truncates to capacity.
    ///
    /// The sort is stable, so among equal times earlier submissions stay ahead.
    /// Returns the 1-based rank of the new entry, or `None` if it fell off the end.
    pub fn submit(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        // Where a stable sort will place it: after every entry with time <= its own.
        let index = self
            .entries
            .partition_point(|e| e.reaction_time <= entry.reaction_time);

        // NOTE: re-sorting the whole list is fine at one submission per round.
        self.entries.push(entry);
        self.entries.sort_by_key(|e| e.reaction_time);
        self.entries.truncate(self.capacity);

        (index < self.capacity).then_some(index + 1)
    }

    /// The first `min(n, len)` entries.
    pub fn top_n(&self, n: usize) -> &[LeaderboardEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
