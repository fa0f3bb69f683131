//! Mine Slap - Terminal Pass-and-Play Party Game Library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod board;
pub mod board_logic;
pub mod build_info;
pub mod constants;
pub mod input;
pub mod roster;
pub mod session;
pub mod session_logic;
pub mod settings;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
