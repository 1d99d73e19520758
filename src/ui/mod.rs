//! UI layer (thin wrapper over `ratatui`).
//!
//! All `ratatui` types stay behind a backend adapter; views paint into a
//! backend-neutral command list and publish hit-test regions.

pub mod core;

pub mod backend;
