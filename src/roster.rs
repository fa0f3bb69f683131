//! Player roster: entry-time validation and slap bookkeeping.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{MAX_NAME_LENGTH, MAX_PLAYERS, MIN_PLAYERS};

/// A registered player. Never removed once a game has started.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    /// Cumulative mine hits across all rounds of the session.
    pub slap_count: u32,
}

impl Player {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            slap_count: 0,
        }
    }
}

/// Ordered list of distinct players, built on the setup screen.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
        }
    }

    /// Build a roster from a raw name hand-off, dropping anything invalid.
    ///
    /// Blank entries, names failing validation, and duplicates are skipped
    /// rather than rejected wholesale, so a malformed hand-off degrades to
    /// a smaller (possibly empty) roster instead of an error.
    pub fn from_names(names: &[String]) -> Self {
        let mut roster = Roster::new();
        for name in names {
            let _ = roster.add(name);
        }
        roster
    }

    /// Validate and append a new player.
    pub fn add(&mut self, name: &str) -> Result<(), String> {
        validate_name(name)?;

        let trimmed = name.trim();
        if self.contains_name(trimmed) {
            return Err("Name is already taken".to_string());
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(format!("Party is full ({} players max)", MAX_PLAYERS));
        }

        self.players.push(Player::new(trimmed.to_string()));
        Ok(())
    }

    /// Remove the player at `index`. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.players.len() {
            self.players.remove(index);
        }
    }

    /// Case-insensitive membership test on trimmed names.
    pub fn contains_name(&self, name: &str) -> bool {
        let lowered = name.trim().to_lowercase();
        self.players
            .iter()
            .any(|p| p.name.to_lowercase() == lowered)
    }

    pub fn names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// A game round needs at least two players.
    pub fn ready_to_start(&self) -> bool {
        self.players.len() >= MIN_PLAYERS
    }
}

/// Check a display name against the entry rules.
pub fn validate_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(format!(
            "Name must be {} characters or less",
            MAX_NAME_LENGTH
        ));
    }

    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_');

    if !valid_chars {
        return Err(
            "Name can only contain letters, numbers, spaces, hyphens, and underscores".to_string(),
        );
    }

    Ok(())
}
