use super::style::Color;
use crate::kernel::services::ports::ThemeSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub accent_fg: Color,
    pub muted_fg: Color,
    pub card_border: Color,
    pub card_title_fg: Color,
    pub button_active_bg: Color,
    pub button_active_fg: Color,
    pub dot_active_fg: Color,
    pub dot_inactive_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent_fg: Color::Indexed(3),
            muted_fg: Color::Indexed(8),
            card_border: Color::Indexed(7),
            card_title_fg: Color::Indexed(15),
            button_active_bg: Color::Indexed(6),
            button_active_fg: Color::Indexed(0),
            dot_active_fg: Color::Indexed(3),
            dot_inactive_fg: Color::Indexed(8),
        }
    }
}

impl Theme {
    /// Unset or unparsable entries keep their default color.
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mut theme = Self::default();
        let slots: [(&Option<String>, &mut Color); 8] = [
            (&settings.accent_fg, &mut theme.accent_fg),
            (&settings.muted_fg, &mut theme.muted_fg),
            (&settings.card_border, &mut theme.card_border),
            (&settings.card_title_fg, &mut theme.card_title_fg),
            (&settings.button_active_bg, &mut theme.button_active_bg),
            (&settings.button_active_fg, &mut theme.button_active_fg),
            (&settings.dot_active_fg, &mut theme.dot_active_fg),
            (&settings.dot_inactive_fg, &mut theme.dot_inactive_fg),
        ];
        for (value, slot) in slots {
            let Some(value) = value.as_deref() else {
                continue;
            };
            match parse_color(value) {
                Some(color) => *slot = color,
                None => tracing::warn!(value, "unknown theme color"),
            }
        }
        theme
    }
}

/// Accepts `#rrggbb` or a terminal color name.
pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    let c = match v.to_ascii_lowercase().as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "dark_grey" => Color::Indexed(8),
        "white" => Color::Indexed(15),
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/theme.rs"]
mod tests;
