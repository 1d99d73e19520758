//! Semantic commands produced from key presses.

use super::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crate::kernel::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Carousel(Action),
}

impl Command {
    /// Default keymap. Releases and unbound keys map to `None`.
    pub fn for_key(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Some(Command::Quit),
                _ => None,
            };
        }

        let command = match event.code {
            KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
            KeyCode::Left | KeyCode::Char('h') => Command::Carousel(Action::PreviousSlide),
            KeyCode::Right | KeyCode::Char('l') => Command::Carousel(Action::NextSlide),
            KeyCode::Home => Command::Carousel(Action::GoToSlide(0)),
            KeyCode::End => Command::Carousel(Action::GoToSlide(i64::MAX)),
            KeyCode::Char(ch @ '2'..='4') => {
                let columns = ch as u8 - b'0';
                Command::Carousel(Action::SetColumns(columns))
            }
            KeyCode::Char('a') | KeyCode::Char(' ') => Command::Carousel(Action::ToggleAutoplay),
            _ => return None,
        };
        Some(command)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
