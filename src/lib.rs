//! # Minimax Connect Four
//!
//! Connect Four against a computer opponent that searches a fixed number of
//! plies with minimax and alpha-beta pruning. Features a terminal UI built
//! with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, pieces, human-versus-computer session
//! - [`ai`] — Agent trait, window heuristic, minimax search, random baseline
//! - [`arena`] — Agent-versus-agent games and result tallies
//! - [`ui`] — Terminal UI for playing against the computer
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
