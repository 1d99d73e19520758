use super::*;

#[test]
fn parses_hex_and_named_colors() {
    assert_eq!(parse_color("#ff8000"), Some(Color::Rgb(255, 128, 0)));
    assert_eq!(parse_color("  Yellow "), Some(Color::Indexed(3)));
    assert_eq!(parse_color("dark_grey"), Some(Color::Indexed(8)));
    assert_eq!(parse_color("reset"), Some(Color::Reset));
}

#[test]
fn rejects_malformed_colors() {
    assert_eq!(parse_color(""), None);
    assert_eq!(parse_color("#fff"), None);
    assert_eq!(parse_color("#gg0000"), None);
    assert_eq!(parse_color("saffron"), None);
}

#[test]
fn settings_override_only_valid_entries() {
    let settings = ThemeSettings {
        accent_fg: Some("#102030".to_string()),
        dot_active_fg: Some("not-a-color".to_string()),
        ..ThemeSettings::default()
    };
    let theme = Theme::from_settings(&settings);
    let defaults = Theme::default();

    assert_eq!(theme.accent_fg, Color::Rgb(0x10, 0x20, 0x30));
    assert_eq!(theme.dot_active_fg, defaults.dot_active_fg);
    assert_eq!(theme.card_border, defaults.card_border);
}
