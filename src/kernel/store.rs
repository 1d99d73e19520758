use super::layout::ColumnLayout;
use super::{Action, CarouselState, Effect};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            state_changed: true,
        }
    }
}

/// Carousel controller: owns the state and applies every transition.
pub struct Store {
    state: CarouselState,
}

impl Store {
    pub fn new(state: CarouselState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Applies the starting layout, builds the indicators and starts autoplay
    /// when the toggle begins enabled.
    pub fn initialize(&mut self) -> DispatchResult {
        let mut effects = Vec::new();
        let layout = self.state.layout;
        self.state.apply_layout(layout);
        self.state.recompute_slide_count();
        self.state.current_slide = 0;
        self.state.recompute_offset();
        self.state.regenerate_dots();
        if self.state.autoplay.is_enabled() {
            self.state.autoplay.start(&mut effects);
        }

        tracing::debug!(
            items = self.state.item_count(),
            layout = %layout,
            slides = self.state.slide_count,
            autoplay = self.state.autoplay.is_enabled(),
            "carousel initialized"
        );
        DispatchResult::changed(effects)
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::SetColumns(columns) => match ColumnLayout::try_from(columns) {
                Ok(layout) => self.set_column_layout(layout),
                Err(err) => {
                    tracing::warn!(error = %err, "ignoring column selection");
                    DispatchResult::unchanged()
                }
            },
            Action::SelectLayout(layout) => self.set_column_layout(layout),
            Action::GoToSlide(index) => self.go_to_slide(index),
            Action::NextSlide => {
                let next = self.state.current_slide as i64 + 1;
                self.go_to_slide(next)
            }
            Action::PreviousSlide => {
                let prev = self.state.current_slide as i64 - 1;
                self.go_to_slide(prev)
            }
            Action::SetAutoplay(enabled) => self.set_autoplay(enabled),
            Action::ToggleAutoplay => {
                let enabled = !self.state.autoplay.is_enabled();
                self.set_autoplay(enabled)
            }
            Action::Resize { width, height } => self.resize(width, height),
            Action::AutoplayTick { generation } => self.autoplay_tick(generation),
        }
    }

    fn set_column_layout(&mut self, layout: ColumnLayout) -> DispatchResult {
        let prev = self.state.layout;
        self.state.apply_layout(layout);
        self.state.recompute_slide_count();
        tracing::debug!(from = %prev, to = %layout, slides = self.state.slide_count, "column layout");
        self.reset_slider()
    }

    fn go_to_slide(&mut self, index: i64) -> DispatchResult {
        let max = self.state.last_slide() as i64;
        let target = index.min(max).max(0) as usize;

        self.state.current_slide = target;
        self.state.recompute_offset();
        self.state.refresh_active_dot();

        let mut effects = Vec::new();
        self.state.autoplay.restart_if_enabled(&mut effects);
        DispatchResult::changed(effects)
    }

    fn set_autoplay(&mut self, enabled: bool) -> DispatchResult {
        let mut effects = Vec::new();
        self.state.autoplay.set_enabled(enabled);
        if enabled {
            self.state.autoplay.start(&mut effects);
        } else {
            self.state.autoplay.stop(&mut effects);
        }
        tracing::debug!(enabled, "autoplay toggled");
        DispatchResult::changed(effects)
    }

    fn resize(&mut self, width: u16, height: u16) -> DispatchResult {
        self.state.recompute_slide_count();
        tracing::debug!(width, height, slides = self.state.slide_count, "viewport resized");
        self.reset_slider()
    }

    fn autoplay_tick(&mut self, generation: u64) -> DispatchResult {
        if self.state.autoplay.timer() != Some(generation) {
            tracing::trace!(generation, "dropping tick from cancelled timer");
            return DispatchResult::unchanged();
        }

        if self.state.is_last_slide() {
            self.state.current_slide = 0;
        } else {
            self.state.current_slide += 1;
        }
        self.state.recompute_offset();
        self.state.refresh_active_dot();
        DispatchResult::changed(Vec::new())
    }

    /// Back to the first page with a fresh indicator set and countdown.
    fn reset_slider(&mut self) -> DispatchResult {
        self.state.current_slide = 0;
        self.state.recompute_offset();
        self.state.regenerate_dots();

        let mut effects = Vec::new();
        self.state.autoplay.restart_if_enabled(&mut effects);
        DispatchResult::changed(effects)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
