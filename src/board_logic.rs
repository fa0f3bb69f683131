//! Mine placement for the party grid.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::constants::GRID_SIDE;

/// Scatter `mine_count` mines across the grid, uniformly at random with no
/// replacement. Invoked once per round on a fresh board.
pub fn place_mines<R: Rng>(board: &mut Board, mine_count: usize, rng: &mut R) {
    let mut positions: Vec<(usize, usize)> = Vec::with_capacity(GRID_SIDE * GRID_SIDE);
    for row in 0..GRID_SIDE {
        for col in 0..GRID_SIDE {
            positions.push((row, col));
        }
    }

    positions.shuffle(rng);

    for &(row, col) in positions.iter().take(mine_count) {
        board.grid[row][col].has_mine = true;
    }

    board.mine_count = board.mines_placed();
}
