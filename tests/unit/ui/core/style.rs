use super::*;

#[test]
fn builder_sets_colors_and_accumulates_mods() {
    let style = Style::default()
        .fg(Color::Indexed(3))
        .bg(Color::Rgb(1, 2, 3))
        .add_mod(Mod::BOLD)
        .add_mod(Mod::REVERSE);

    assert_eq!(style.fg, Some(Color::Indexed(3)));
    assert_eq!(style.bg, Some(Color::Rgb(1, 2, 3)));
    assert!(style.mods.contains(Mod::BOLD));
    assert!(style.mods.contains(Mod::REVERSE));
    assert!(!style.mods.contains(Mod::DIM));
}

#[test]
fn every_mod_set_contains_none() {
    assert!(Mod::NONE.contains(Mod::NONE));
    assert!((Mod::BOLD | Mod::DIM).contains(Mod::NONE));
    assert!(!Mod::NONE.contains(Mod::BOLD));
}
