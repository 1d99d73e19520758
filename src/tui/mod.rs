//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the carousel core has no terminal dependency.

pub mod crossterm;
pub mod terminal_guard;
