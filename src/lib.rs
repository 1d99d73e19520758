//! temple-carousel: a paged card carousel for the terminal.
//!
//! Modules:
//! - core: frontend-neutral input events and commands
//! - kernel: headless carousel state machine (layout, paging, autoplay)
//! - ui: paint commands, hit-test tree, rendering backends
//! - views: carousel renderer
//! - tui: crossterm/ratatui integration

pub mod core;
pub mod kernel;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
pub mod views;
