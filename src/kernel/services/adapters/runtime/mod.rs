//! Async runtime adapter: runs the autoplay timer and sends ticks back to the UI loop.

mod message;
mod runtime;

pub use message::AppMessage;
pub use runtime::AsyncRuntime;
