use super::*;

#[test]
fn new_state_sizes_items_for_layout() {
    let options = CarouselOptions {
        layout: ColumnLayout::Four,
        ..CarouselOptions::default()
    };
    let state = CarouselState::new(6, options);

    assert_eq!(state.item_count(), 6);
    assert_eq!(state.slide_count, 2);
    assert!(state
        .items
        .iter()
        .all(|item| item.flex_basis == 25.0 && item.max_width == 25.0));
}

#[test]
fn default_options_match_widget_defaults() {
    let options = CarouselOptions::default();
    assert_eq!(options.layout, ColumnLayout::Three);
    assert!(options.autoplay);
    assert_eq!(options.autoplay_interval, Duration::from_secs(5));
    assert_eq!(options.rounding, WidthRounding::Legacy);
}

#[test]
fn dots_regenerate_and_track_active() {
    let mut dots = NavigationDots::default();
    assert_eq!(dots.count(), 0);
    assert_eq!(dots.active(), None);

    dots.regenerate(4, 0);
    let first = dots.generation();
    assert_eq!(dots.count(), 4);
    assert!(dots.is_active(0));

    dots.set_active(2);
    assert!(dots.is_active(2));
    assert!(!dots.is_active(0));
    assert_eq!(dots.generation(), first);

    dots.regenerate(2, 0);
    assert_eq!(dots.generation(), first + 1);
    assert_eq!(dots.active(), Some(0));
}

#[test]
fn autoplay_start_cancels_previous_timer() {
    let mut autoplay = AutoplayState::new(true, Duration::from_millis(10));
    let mut effects = Vec::new();

    autoplay.start(&mut effects);
    autoplay.start(&mut effects);

    assert_eq!(
        effects,
        vec![
            Effect::StartAutoplay {
                generation: 1,
                interval: Duration::from_millis(10)
            },
            Effect::StopAutoplay { generation: 1 },
            Effect::StartAutoplay {
                generation: 2,
                interval: Duration::from_millis(10)
            },
        ]
    );
    assert_eq!(autoplay.timer(), Some(2));
}

#[test]
fn autoplay_stop_without_timer_is_silent() {
    let mut autoplay = AutoplayState::new(false, Duration::from_secs(1));
    let mut effects = Vec::new();
    autoplay.stop(&mut effects);
    autoplay.restart_if_enabled(&mut effects);
    assert!(effects.is_empty());
    assert!(!autoplay.is_running());
}

#[test]
fn last_slide_saturates_for_empty_carousel() {
    let state = CarouselState::new(0, CarouselOptions::default());
    assert_eq!(state.slide_count, 0);
    assert_eq!(state.last_slide(), 0);
    assert!(state.is_last_slide());
}
