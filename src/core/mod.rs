//! Frontend-neutral input and command types.

pub mod command;
pub mod event;

pub use command::Command;
pub use event::InputEvent;
