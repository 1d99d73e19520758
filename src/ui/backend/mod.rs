//! Rendering backends.
//!
//! The trait keeps the carousel view independent of `ratatui` types; the
//! headless backend lets tests inspect rendered cells.

use crate::ui::core::geom::Rect;
use crate::ui::core::painter::PaintCmd;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);
}

#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
