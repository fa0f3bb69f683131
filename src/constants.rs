// Grid geometry
pub const GRID_SIDE: usize = 5;
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

// Default round rules
pub const DEFAULT_MINE_COUNT: usize = 3;
pub const DEFAULT_PICK_BUDGET: u32 = 3;
pub const MIN_MINE_COUNT: usize = 1;
pub const MAX_MINE_COUNT: usize = GRID_CELLS - 1; // at least one safe cell per round
pub const MIN_PICK_BUDGET: u32 = 1;
pub const MAX_PICK_BUDGET: u32 = 10;

// Roster limits
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 8;
pub const MAX_NAME_LENGTH: usize = 16;

// UI timing
pub const INPUT_POLL_MS: u64 = 50;
pub const ROUND_END_ADVANCE_MS: u64 = 1500;

// Table-talk feed
pub const FEED_CAPACITY: usize = 10;
