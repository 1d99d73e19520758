use std::time::Duration;

use super::effect::Effect;
use super::layout::{track_offset, ColumnLayout, WidthRounding};

pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);

/// Box sizing applied to one item, in percent of the visible frame.
///
/// `flex_basis` and `max_width` always carry the same value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemBox {
    pub flex_basis: f64,
    pub max_width: f64,
}

impl ItemBox {
    pub fn for_layout(layout: ColumnLayout) -> Self {
        let share = layout.width_share();
        Self {
            flex_basis: share,
            max_width: share,
        }
    }
}

/// Page indicators. Regenerating replaces the whole set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationDots {
    count: usize,
    active: usize,
    generation: u64,
}

impl NavigationDots {
    pub fn count(&self) -> usize {
        self.count
    }

    /// Index of the active indicator, if any indicator exists.
    pub fn active(&self) -> Option<usize> {
        (self.active < self.count).then_some(self.active)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active() == Some(index)
    }

    /// Bumped on every regeneration.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn regenerate(&mut self, count: usize, active: usize) {
        self.count = count;
        self.active = active;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn set_active(&mut self, active: usize) {
        self.active = active;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutoplayState {
    enabled: bool,
    timer: Option<u64>,
    next_generation: u64,
    interval: Duration,
}

impl AutoplayState {
    pub fn new(enabled: bool, interval: Duration) -> Self {
        Self {
            enabled,
            timer: None,
            next_generation: 1,
            interval,
        }
    }

    /// State of the toggle.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Generation of the live timer, if one is running.
    pub fn timer(&self) -> Option<u64> {
        self.timer
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Cancels any live timer, then starts a fresh one.
    pub(crate) fn start(&mut self, effects: &mut Vec<Effect>) {
        self.stop(effects);
        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);
        self.timer = Some(generation);
        effects.push(Effect::StartAutoplay {
            generation,
            interval: self.interval,
        });
    }

    pub(crate) fn stop(&mut self, effects: &mut Vec<Effect>) {
        if let Some(generation) = self.timer.take() {
            effects.push(Effect::StopAutoplay { generation });
        }
    }

    /// Resets the countdown when the toggle is on.
    pub(crate) fn restart_if_enabled(&mut self, effects: &mut Vec<Effect>) {
        if self.enabled {
            self.start(effects);
        }
    }
}

/// Startup options for a carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselOptions {
    pub layout: ColumnLayout,
    pub autoplay: bool,
    pub autoplay_interval: Duration,
    pub rounding: WidthRounding,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            layout: ColumnLayout::Three,
            autoplay: true,
            autoplay_interval: DEFAULT_AUTOPLAY_INTERVAL,
            rounding: WidthRounding::Legacy,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    pub items: Vec<ItemBox>,
    pub layout: ColumnLayout,
    pub rounding: WidthRounding,
    pub current_slide: usize,
    pub slide_count: usize,
    /// Track translation in percent of the frame width.
    pub offset: f64,
    pub dots: NavigationDots,
    pub autoplay: AutoplayState,
}

impl CarouselState {
    pub fn new(item_count: usize, options: CarouselOptions) -> Self {
        let layout = options.layout;
        Self {
            items: vec![ItemBox::for_layout(layout); item_count],
            layout,
            rounding: options.rounding,
            current_slide: 0,
            slide_count: layout.page_count(item_count),
            offset: 0.0,
            dots: NavigationDots::default(),
            autoplay: AutoplayState::new(options.autoplay, options.autoplay_interval),
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn items_per_page(&self) -> usize {
        self.layout.items_per_page()
    }

    pub fn last_slide(&self) -> usize {
        self.slide_count.saturating_sub(1)
    }

    pub fn is_last_slide(&self) -> bool {
        self.current_slide >= self.last_slide()
    }

    pub(crate) fn apply_layout(&mut self, layout: ColumnLayout) {
        self.layout = layout;
        let item = ItemBox::for_layout(layout);
        for existing in &mut self.items {
            *existing = item;
        }
    }

    pub(crate) fn recompute_slide_count(&mut self) {
        self.slide_count = self.layout.page_count(self.item_count());
    }

    pub(crate) fn recompute_offset(&mut self) {
        self.offset = track_offset(
            self.layout,
            self.rounding,
            self.item_count(),
            self.current_slide,
            self.slide_count,
        );
    }

    pub(crate) fn regenerate_dots(&mut self) {
        self.dots.regenerate(self.slide_count, self.current_slide);
    }

    pub(crate) fn refresh_active_dot(&mut self) {
        self.dots.set_active(self.current_slide);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
