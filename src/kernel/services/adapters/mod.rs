//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod paths;
pub mod runtime;
pub mod settings;

pub use paths::{ensure_log_dir, get_config_dir, get_log_dir};
pub use runtime::{AppMessage, AsyncRuntime};
pub use settings::{
    carousel_options, get_settings_path, load_settings, resolve_settings, SettingsError,
};
