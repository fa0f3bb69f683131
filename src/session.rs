//! Live game session state shared between the scenes.

use std::collections::VecDeque;

use crate::board::Board;
use crate::constants::FEED_CAPACITY;
use crate::roster::{Player, Roster};
use crate::settings::GameRules;

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// No round running (empty roster or game not yet started).
    Idle,
    /// Current player still has picks to spend.
    AwaitingPick,
    /// Budget spent safely (or turn banked early), waiting to advance.
    RoundWon,
    /// Current player hit a mine, waiting to advance.
    Slapped,
}

/// One line in the table-talk feed.
#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub message: String,
    pub is_slap: bool,
}

/// Everything a running game owns: roster, rules, grid, and turn state.
///
/// Constructed from the roster screen's name hand-off; the hand-off is
/// sanitized, so bad input degrades to an `Idle` session rather than an
/// error.
pub struct GameSession {
    pub roster: Roster,
    pub rules: GameRules,
    pub board: Board,
    pub phase: RoundPhase,
    /// Index into the roster. Always valid while the roster is non-empty.
    pub current_player: usize,
    pub picks_left: u32,
    /// 1-based, 0 before the first round starts.
    pub round_number: u32,
    /// Unix timestamp of session start.
    pub started_at: i64,
    pub feed: VecDeque<FeedEntry>,
}

impl GameSession {
    pub fn new(names: &[String], rules: GameRules, started_at: i64) -> Self {
        Self {
            roster: Roster::from_names(names),
            rules: rules.sanitized(),
            board: Board::new(),
            phase: RoundPhase::Idle,
            current_player: 0,
            picks_left: 0,
            round_number: 0,
            started_at,
            feed: VecDeque::new(),
        }
    }

    /// The player whose turn it is, if any.
    pub fn current(&self) -> Option<&Player> {
        self.roster.players.get(self.current_player)
    }

    /// The player who just got slapped, while the `Slapped` phase lasts.
    pub fn slapped_player(&self) -> Option<&Player> {
        if self.phase == RoundPhase::Slapped {
            self.current()
        } else {
            None
        }
    }

    /// Whether the round has ended and is waiting to advance.
    pub fn round_over(&self) -> bool {
        matches!(self.phase, RoundPhase::RoundWon | RoundPhase::Slapped)
    }

    /// Picks spent so far this round.
    pub fn picks_used(&self) -> u32 {
        self.rules.pick_budget.saturating_sub(self.picks_left)
    }

    pub fn add_feed_entry(&mut self, message: String, is_slap: bool) {
        // Keep only the most recent entries
        if self.feed.len() >= FEED_CAPACITY {
            self.feed.pop_front();
        }
        self.feed.push_back(FeedEntry { message, is_slap });
    }
}
