//! Turn and round transitions for a running session.
//!
//! All transitions are free functions over `&mut GameSession` returning the
//! events they produced, so the caller decides how to surface them. Guard
//! failures (revealed tile, wrong phase, empty roster) return no events and
//! change nothing.

use rand::Rng;

use crate::board::Board;
use crate::board_logic::place_mines;
use crate::session::{GameSession, RoundPhase};

/// Events produced by a transition, for the caller to surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// A new round began with this (1-based) number and player index.
    RoundStarted { round: u32, player: usize },
    /// A safe tile was revealed; `picks_left` is the post-decrement count.
    SafeReveal { row: usize, col: usize, picks_left: u32 },
    /// The pick budget was spent without a slap.
    BudgetCleared { player: usize },
    /// The current player revealed a mine; `slap_count` is their new total.
    MineHit { player: usize, slap_count: u32 },
    /// The current player banked their turn early.
    TurnBanked { player: usize },
}

/// Start the first round of an idle session. No-op unless the session is
/// idle with a non-empty roster.
pub fn start_round<R: Rng>(session: &mut GameSession, rng: &mut R) -> Vec<RoundEvent> {
    if session.phase != RoundPhase::Idle || session.roster.is_empty() {
        return Vec::new();
    }

    session.current_player = 0;
    session.round_number = 1;
    deal_fresh_board(session, rng);

    vec![RoundEvent::RoundStarted {
        round: session.round_number,
        player: session.current_player,
    }]
}

/// Reveal the tile under the cursor for the current player.
///
/// Revealing an already-revealed tile, revealing outside `AwaitingPick`,
/// or revealing with an empty roster are all silent no-ops.
pub fn reveal_at_cursor(session: &mut GameSession) -> Vec<RoundEvent> {
    if session.phase != RoundPhase::AwaitingPick || session.roster.is_empty() {
        return Vec::new();
    }

    let (row, col) = session.board.cursor;
    if session.board.grid[row][col].revealed {
        return Vec::new();
    }

    session.board.grid[row][col].revealed = true;
    let mut events = Vec::new();

    if session.board.grid[row][col].has_mine {
        let player = session.current_player;
        session.roster.players[player].slap_count += 1;
        session.phase = RoundPhase::Slapped;
        events.push(RoundEvent::MineHit {
            player,
            slap_count: session.roster.players[player].slap_count,
        });
    } else {
        session.picks_left -= 1;
        events.push(RoundEvent::SafeReveal {
            row,
            col,
            picks_left: session.picks_left,
        });
        if session.picks_left == 0 {
            session.phase = RoundPhase::RoundWon;
            events.push(RoundEvent::BudgetCleared {
                player: session.current_player,
            });
        }
    }

    events
}

/// Bank the turn early, without penalty.
///
/// Allowed only when the rules permit it, the round is still running, and
/// at least one pick has been used.
pub fn end_turn_early(session: &mut GameSession) -> Vec<RoundEvent> {
    if !session.rules.allow_early_end
        || session.phase != RoundPhase::AwaitingPick
        || session.picks_used() == 0
    {
        return Vec::new();
    }

    session.phase = RoundPhase::RoundWon;
    vec![RoundEvent::TurnBanked {
        player: session.current_player,
    }]
}

/// Advance past a finished round: fresh grid, reset budget, next player.
/// No-op unless the round is over.
pub fn advance_round<R: Rng>(session: &mut GameSession, rng: &mut R) -> Vec<RoundEvent> {
    if !session.round_over() {
        return Vec::new();
    }

    session.current_player = (session.current_player + 1) % session.roster.len();
    session.round_number += 1;
    deal_fresh_board(session, rng);

    vec![RoundEvent::RoundStarted {
        round: session.round_number,
        player: session.current_player,
    }]
}

/// Replace the grid, place mines, and reset the pick budget.
fn deal_fresh_board<R: Rng>(session: &mut GameSession, rng: &mut R) {
    session.board = Board::new();
    place_mines(&mut session.board, session.rules.mine_count, rng);
    session.picks_left = session.rules.pick_budget;
    session.phase = RoundPhase::AwaitingPick;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameRules;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rules(mine_count: usize, pick_budget: u32) -> GameRules {
        GameRules {
            mine_count,
            pick_budget,
            allow_early_end: true,
        }
    }

    fn started_session(mine_count: usize, pick_budget: u32, seed: u64) -> GameSession {
        let names = vec!["Ana".to_string(), "Bea".to_string()];
        let mut session = GameSession::new(&names, rules(mine_count, pick_budget), 0);
        let mut rng = StdRng::seed_from_u64(seed);
        start_round(&mut session, &mut rng);
        session
    }

    /// Put the cursor on a hidden tile matching `want_mine`.
    fn aim_at(session: &mut GameSession, want_mine: bool) {
        for row in 0..5 {
            for col in 0..5 {
                let cell = session.board.grid[row][col];
                if !cell.revealed && cell.has_mine == want_mine {
                    session.board.cursor = (row, col);
                    return;
                }
            }
        }
        panic!("no hidden tile with has_mine == {}", want_mine);
    }

    #[test]
    fn test_start_round() {
        let session = started_session(3, 3, 42);

        assert_eq!(session.phase, RoundPhase::AwaitingPick);
        assert_eq!(session.round_number, 1);
        assert_eq!(session.current_player, 0);
        assert_eq!(session.picks_left, 3);
        assert_eq!(session.board.mines_placed(), 3);
    }

    #[test]
    fn test_start_round_noop_on_empty_roster() {
        let mut session = GameSession::new(&[], GameRules::default(), 0);
        let mut rng = StdRng::seed_from_u64(42);

        let events = start_round(&mut session, &mut rng);

        assert!(events.is_empty());
        assert_eq!(session.phase, RoundPhase::Idle);
        assert_eq!(session.board.mines_placed(), 0);
    }

    #[test]
    fn test_start_round_noop_when_already_running() {
        let mut session = started_session(3, 3, 42);
        let mut rng = StdRng::seed_from_u64(43);

        let events = start_round(&mut session, &mut rng);

        assert!(events.is_empty());
        assert_eq!(session.round_number, 1);
    }

    #[test]
    fn test_safe_reveal_decrements_picks() {
        let mut session = started_session(3, 3, 42);

        aim_at(&mut session, false);
        let events = reveal_at_cursor(&mut session);

        assert_eq!(session.picks_left, 2);
        assert_eq!(session.phase, RoundPhase::AwaitingPick);
        assert!(matches!(
            events[0],
            RoundEvent::SafeReveal { picks_left: 2, .. }
        ));
        // No slap for a safe reveal
        assert_eq!(session.roster.players[0].slap_count, 0);
    }

    #[test]
    fn test_spending_budget_wins_round() {
        let mut session = started_session(3, 3, 42);

        for _ in 0..3 {
            aim_at(&mut session, false);
            reveal_at_cursor(&mut session);
        }

        assert_eq!(session.picks_left, 0);
        assert_eq!(session.phase, RoundPhase::RoundWon);
        assert_eq!(session.board.revealed_count(), 3);
    }

    #[test]
    fn test_budget_cleared_event_on_last_pick() {
        let mut session = started_session(3, 1, 42);

        aim_at(&mut session, false);
        let events = reveal_at_cursor(&mut session);

        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[1],
            RoundEvent::BudgetCleared { player: 0 }
        ));
    }

    #[test]
    fn test_mine_hit_slaps_current_player_only() {
        let mut session = started_session(3, 3, 42);

        aim_at(&mut session, true);
        let events = reveal_at_cursor(&mut session);

        assert_eq!(session.phase, RoundPhase::Slapped);
        assert_eq!(session.roster.players[0].slap_count, 1);
        assert_eq!(session.roster.players[1].slap_count, 0);
        assert_eq!(
            events,
            vec![RoundEvent::MineHit {
                player: 0,
                slap_count: 1
            }]
        );
        assert_eq!(session.slapped_player().unwrap().name, "Ana");
    }

    #[test]
    fn test_mine_hit_regardless_of_picks_left() {
        // Even on the last pick, a mine slaps rather than winning the round
        let mut session = started_session(3, 1, 42);

        aim_at(&mut session, true);
        reveal_at_cursor(&mut session);

        assert_eq!(session.phase, RoundPhase::Slapped);
        assert_eq!(session.picks_left, 1); // mine hits do not consume picks
        assert_eq!(session.roster.players[0].slap_count, 1);
    }

    #[test]
    fn test_reveal_revealed_tile_is_noop() {
        let mut session = started_session(3, 3, 42);

        aim_at(&mut session, false);
        reveal_at_cursor(&mut session);

        let events = reveal_at_cursor(&mut session);

        assert!(events.is_empty());
        assert_eq!(session.picks_left, 2);
        assert_eq!(session.board.revealed_count(), 1);
    }

    #[test]
    fn test_reveal_after_round_over_is_noop() {
        let mut session = started_session(3, 3, 42);

        aim_at(&mut session, true);
        reveal_at_cursor(&mut session);
        assert_eq!(session.phase, RoundPhase::Slapped);

        aim_at(&mut session, false);
        let events = reveal_at_cursor(&mut session);

        assert!(events.is_empty());
        assert_eq!(session.board.revealed_count(), 1);
        assert_eq!(session.roster.players[0].slap_count, 1);
    }

    #[test]
    fn test_reveal_on_idle_session_is_noop() {
        let mut session = GameSession::new(&[], GameRules::default(), 0);

        let events = reveal_at_cursor(&mut session);

        assert!(events.is_empty());
        assert_eq!(session.board.revealed_count(), 0);
    }

    #[test]
    fn test_end_turn_early_requires_a_used_pick() {
        let mut session = started_session(3, 3, 42);

        assert!(end_turn_early(&mut session).is_empty());
        assert_eq!(session.phase, RoundPhase::AwaitingPick);

        aim_at(&mut session, false);
        reveal_at_cursor(&mut session);
        let events = end_turn_early(&mut session);

        assert_eq!(events, vec![RoundEvent::TurnBanked { player: 0 }]);
        assert_eq!(session.phase, RoundPhase::RoundWon);
        assert_eq!(session.roster.players[0].slap_count, 0);
    }

    #[test]
    fn test_end_turn_early_respects_rules_toggle() {
        let names = vec!["Ana".to_string(), "Bea".to_string()];
        let rules = GameRules {
            mine_count: 3,
            pick_budget: 3,
            allow_early_end: false,
        };
        let mut session = GameSession::new(&names, rules, 0);
        let mut rng = StdRng::seed_from_u64(42);
        start_round(&mut session, &mut rng);

        aim_at(&mut session, false);
        reveal_at_cursor(&mut session);

        assert!(end_turn_early(&mut session).is_empty());
        assert_eq!(session.phase, RoundPhase::AwaitingPick);
    }

    #[test]
    fn test_end_turn_early_noop_when_round_over() {
        let mut session = started_session(3, 1, 42);

        aim_at(&mut session, false);
        reveal_at_cursor(&mut session);
        assert_eq!(session.phase, RoundPhase::RoundWon);

        assert!(end_turn_early(&mut session).is_empty());
    }

    #[test]
    fn test_advance_round_rotates_and_resets() {
        let mut session = started_session(3, 3, 42);
        let mut rng = StdRng::seed_from_u64(99);

        aim_at(&mut session, true);
        reveal_at_cursor(&mut session);

        let events = advance_round(&mut session, &mut rng);

        assert_eq!(session.current_player, 1);
        assert_eq!(session.picks_left, 3);
        assert_eq!(session.round_number, 2);
        assert_eq!(session.phase, RoundPhase::AwaitingPick);
        assert_eq!(session.board.mines_placed(), 3);
        assert_eq!(session.board.revealed_count(), 0); // fresh grid
        assert_eq!(
            events,
            vec![RoundEvent::RoundStarted {
                round: 2,
                player: 1
            }]
        );
    }

    #[test]
    fn test_advance_round_wraps_player_index() {
        let mut session = started_session(3, 3, 42);
        let mut rng = StdRng::seed_from_u64(99);

        // Round 1: Ana. Round 2: Bea. Round 3 wraps back to Ana.
        for expected in [1usize, 0, 1] {
            aim_at(&mut session, true);
            reveal_at_cursor(&mut session);
            advance_round(&mut session, &mut rng);
            assert_eq!(session.current_player, expected);
        }
    }

    #[test]
    fn test_advance_round_noop_mid_round() {
        let mut session = started_session(3, 3, 42);
        let mut rng = StdRng::seed_from_u64(99);

        let events = advance_round(&mut session, &mut rng);

        assert!(events.is_empty());
        assert_eq!(session.current_player, 0);
        assert_eq!(session.round_number, 1);
    }

    #[test]
    fn test_slap_counts_accumulate_across_rounds() {
        let mut session = started_session(3, 3, 42);
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..4 {
            aim_at(&mut session, true);
            reveal_at_cursor(&mut session);
            advance_round(&mut session, &mut rng);
        }

        // Ana slapped in rounds 1 and 3, Bea in rounds 2 and 4
        assert_eq!(session.roster.players[0].slap_count, 2);
        assert_eq!(session.roster.players[1].slap_count, 2);
    }

    #[test]
    fn test_picks_left_never_negative() {
        let mut session = started_session(1, 3, 42);

        // Exhaust the budget, then hammer the reveal key
        for _ in 0..3 {
            aim_at(&mut session, false);
            reveal_at_cursor(&mut session);
        }
        for _ in 0..5 {
            reveal_at_cursor(&mut session);
        }

        assert_eq!(session.picks_left, 0);
    }
}
