use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_columns")]
    pub default_columns: u8,
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
    #[serde(default = "default_autoplay_interval_ms")]
    pub autoplay_interval_ms: u64,
    /// Use `100 / 3` instead of the truncated legacy width for three columns.
    #[serde(default)]
    pub exact_item_width: bool,
    #[serde(default = "default_items")]
    pub items: Vec<ItemSettings>,
    #[serde(default)]
    pub theme: ThemeSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_columns: default_columns(),
            autoplay: default_autoplay(),
            autoplay_interval_ms: default_autoplay_interval_ms(),
            exact_item_width: false,
            items: default_items(),
            theme: ThemeSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSettings {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

impl ItemSettings {
    pub fn new(title: impl Into<String>, subtitle: Option<&str>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_title_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_active_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_active_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dot_active_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dot_inactive_fg: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            accent_fg: Some("yellow".to_string()),
            muted_fg: Some("dark_gray".to_string()),
            card_border: Some("gray".to_string()),
            card_title_fg: Some("white".to_string()),
            button_active_bg: Some("cyan".to_string()),
            button_active_fg: Some("black".to_string()),
            dot_active_fg: Some("yellow".to_string()),
            dot_inactive_fg: Some("dark_gray".to_string()),
        }
    }
}

fn default_columns() -> u8 {
    3
}

fn default_autoplay() -> bool {
    true
}

fn default_autoplay_interval_ms() -> u64 {
    5_000
}

fn default_items() -> Vec<ItemSettings> {
    [
        ("Wat Phra Kaew", Some("Bangkok")),
        ("Wat Arun", Some("Bangkok")),
        ("Wat Pho", Some("Bangkok")),
        ("Wat Saket", Some("Bangkok")),
        ("Wat Rong Khun", Some("Chiang Rai")),
        ("Wat Phra That Doi Suthep", Some("Chiang Mai")),
        ("Wat Chedi Luang", Some("Chiang Mai")),
        ("Wat Mahathat", Some("Ayutthaya")),
        ("Wat Chaiwatthanaram", Some("Ayutthaya")),
        ("Wat Phra That Phanom", Some("Nakhon Phanom")),
    ]
    .into_iter()
    .map(|(title, subtitle)| ItemSettings::new(title, subtitle))
    .collect()
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
