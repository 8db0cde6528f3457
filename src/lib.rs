//! # Tic-Tac-Toe Rewind
//!
//! A terminal tic-tac-toe game that records every board along the way.
//! Past steps can be revisited, play can branch from any of them, and the
//! step list can be shown oldest or newest first. The UI is built with
//! Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: core game logic (board, players, history-keeping state)
//! - [`ui`]: terminal UI (board view, step list, key handling)
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
