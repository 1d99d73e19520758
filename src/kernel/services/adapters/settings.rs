use super::paths::get_config_dir;
use crate::kernel::services::ports::settings::Settings;
use crate::kernel::{CarouselOptions, ColumnLayout, WidthRounding};
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

const SETTINGS_FILE: &str = "settings.json";
const MIN_AUTOPLAY_INTERVAL_MS: u64 = 100;

#[derive(Debug)]
pub enum SettingsError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            SettingsError::Parse { path, source } => {
                write!(f, "invalid settings in {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse { source, .. } => Some(source),
        }
    }
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(SETTINGS_FILE))
}

/// Reads a settings file.
///
/// A field with the wrong shape is dropped with a warning and takes its
/// default; the other fields are kept. Text that is not a JSON object fails.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let data = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parse_error = |source: serde_json::Error| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let value: Value = serde_json::from_str(&data).map_err(parse_error)?;
    match serde_json::from_value::<Settings>(value.clone()) {
        Ok(settings) => Ok(settings),
        Err(err) => match value {
            Value::Object(fields) => Ok(settings_from_valid_fields(path, fields)),
            _ => Err(parse_error(err)),
        },
    }
}

fn settings_from_valid_fields(path: &Path, fields: Map<String, Value>) -> Settings {
    let mut valid = Map::new();
    for (key, field) in fields {
        let single = Map::from_iter([(key.clone(), field.clone())]);
        match serde_json::from_value::<Settings>(Value::Object(single)) {
            Ok(_) => {
                valid.insert(key, field);
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    field = %key,
                    error = %err,
                    "ignoring invalid setting"
                );
            }
        }
    }
    serde_json::from_value(Value::Object(valid)).unwrap_or_default()
}

/// Explicit path first, then the per-user settings file, then defaults.
///
/// An explicit path that fails to load is reported; a missing per-user file is not.
pub fn resolve_settings(explicit: Option<&Path>) -> Settings {
    if let Some(path) = explicit {
        return match load_settings(path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "settings loaded");
                settings
            }
            Err(err) => {
                tracing::warn!(error = %err, "falling back to default settings");
                Settings::default()
            }
        };
    }

    let Some(path) = get_settings_path() else {
        return Settings::default();
    };
    if !path.exists() {
        return Settings::default();
    }
    match load_settings(&path) {
        Ok(settings) => {
            tracing::info!(path = %path.display(), "settings loaded");
            settings
        }
        Err(err) => {
            tracing::warn!(error = %err, "falling back to default settings");
            Settings::default()
        }
    }
}

/// Converts settings into carousel options, replacing out-of-range values.
pub fn carousel_options(settings: &Settings) -> CarouselOptions {
    let layout = ColumnLayout::try_from(settings.default_columns).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "default_columns out of range, using 3");
        ColumnLayout::Three
    });

    let interval_ms = if settings.autoplay_interval_ms < MIN_AUTOPLAY_INTERVAL_MS {
        tracing::warn!(
            autoplay_interval_ms = settings.autoplay_interval_ms,
            min = MIN_AUTOPLAY_INTERVAL_MS,
            "autoplay interval too short, clamping"
        );
        MIN_AUTOPLAY_INTERVAL_MS
    } else {
        settings.autoplay_interval_ms
    };

    let rounding = if settings.exact_item_width {
        WidthRounding::Exact
    } else {
        WidthRounding::Legacy
    };

    CarouselOptions {
        layout,
        autoplay: settings.autoplay,
        autoplay_interval: Duration::from_millis(interval_ms),
        rounding,
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
