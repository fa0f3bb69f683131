//! Game rules and their on-disk settings file.
//!
//! Rules live in `~/.mineslap/settings.json`. A missing or malformed file
//! falls back to the defaults; out-of-range values are clamped, never fatal.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MINE_COUNT, DEFAULT_PICK_BUDGET, MAX_MINE_COUNT, MAX_PICK_BUDGET, MIN_MINE_COUNT,
    MIN_PICK_BUDGET,
};

/// Tunable round rules, fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// Mines hidden in the 25-tile grid each round.
    pub mine_count: usize,
    /// Safe reveals each player gets before their turn auto-advances.
    pub pick_budget: u32,
    /// Whether a player may bank their turn after at least one pick.
    pub allow_early_end: bool,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            mine_count: DEFAULT_MINE_COUNT,
            pick_budget: DEFAULT_PICK_BUDGET,
            allow_early_end: true,
        }
    }
}

impl GameRules {
    /// Clamp out-of-range values into the playable range.
    pub fn sanitized(self) -> Self {
        Self {
            mine_count: self.mine_count.clamp(MIN_MINE_COUNT, MAX_MINE_COUNT),
            pick_budget: self.pick_budget.clamp(MIN_PICK_BUDGET, MAX_PICK_BUDGET),
            allow_early_end: self.allow_early_end,
        }
    }
}

/// Reads and writes the settings file under the user's home directory.
pub struct SettingsManager {
    settings_dir: PathBuf,
}

impl SettingsManager {
    pub fn new() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;

        let settings_dir = home_dir.join(".mineslap");
        fs::create_dir_all(&settings_dir)?;

        Ok(Self { settings_dir })
    }

    fn settings_path(&self) -> PathBuf {
        self.settings_dir.join("settings.json")
    }

    /// Load the rules, writing the default file back on first run so the
    /// knobs are discoverable.
    pub fn load_or_init(&self) -> GameRules {
        let path = self.settings_path();
        if !path.exists() {
            let rules = GameRules::default();
            let _ = self.save(&rules);
            return rules;
        }

        match fs::read_to_string(&path) {
            Ok(json) => parse_rules(&json).unwrap_or_default(),
            Err(_) => GameRules::default(),
        }
    }

    pub fn save(&self, rules: &GameRules) -> io::Result<()> {
        let json = serde_json::to_string_pretty(rules)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(self.settings_path(), json)
    }
}

/// Parse and clamp a settings file body. None if the JSON is malformed.
fn parse_rules(json: &str) -> Option<GameRules> {
    serde_json::from_str::<GameRules>(json)
        .ok()
        .map(GameRules::sanitized)
}
