//! Service ports: traits + data contracts.

pub mod settings;
pub mod timer;

pub use settings::{ItemSettings, Settings, ThemeSettings};
pub use timer::AutoplayScheduler;
