//! Input handling for the Game screen.
//!
//! Translates key events into state-machine transitions and turns the
//! resulting events into table-talk feed lines.

use crossterm::event::{KeyCode, KeyEvent};

use crate::session::GameSession;
use crate::session_logic::{advance_round, end_turn_early, reveal_at_cursor, RoundEvent};

/// Result of handling a game input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the game loop normally.
    Continue,
    /// Player quit back to the roster screen.
    QuitToRoster,
}

/// Main dispatcher for Game screen input.
///
/// While a round-end overlay is up, any key acknowledges it and advances
/// to the next round.
pub fn handle_game_input(key: KeyEvent, session: &mut GameSession) -> InputResult {
    if session.round_over() {
        let mut rng = rand::thread_rng();
        let events = advance_round(session, &mut rng);
        record_events(session, &events);
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return InputResult::QuitToRoster,
        KeyCode::Up => session.board.move_cursor(-1, 0),
        KeyCode::Down => session.board.move_cursor(1, 0),
        KeyCode::Left => session.board.move_cursor(0, -1),
        KeyCode::Right => session.board.move_cursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let events = reveal_at_cursor(session);
            record_events(session, &events);
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            let events = end_turn_early(session);
            record_events(session, &events);
        }
        _ => {}
    }

    InputResult::Continue
}

/// Format transition events into feed lines.
pub fn record_events(session: &mut GameSession, events: &[RoundEvent]) {
    for event in events {
        match event {
            RoundEvent::RoundStarted { round, player } => {
                let name = player_name(session, *player);
                session.add_feed_entry(format!("▶ Round {}: {} is up", round, name), false);
            }
            RoundEvent::SafeReveal { picks_left, .. } => {
                session.add_feed_entry(format!("✅ Safe! {} left", picks_left), false);
            }
            RoundEvent::BudgetCleared { player } => {
                let name = player_name(session, *player);
                session.add_feed_entry(format!("🛡 {} cleared their picks!", name), false);
            }
            RoundEvent::MineHit { player, slap_count } => {
                let name = player_name(session, *player);
                session.add_feed_entry(format!("💥 {} hit a mine! Slap #{}", name, slap_count), true);
            }
            RoundEvent::TurnBanked { player } => {
                let name = player_name(session, *player);
                session.add_feed_entry(format!("🏳 {} banked their turn", name), false);
            }
        }
    }
}

fn player_name(session: &GameSession, index: usize) -> String {
    session
        .roster
        .players
        .get(index)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "???".to_string())
}
