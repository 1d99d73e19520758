//! Carousel view (pure rendering + hit testing).
//!
//! Reads a [`CarouselState`] and paints it: column buttons and the autoplay
//! checkbox on top, the translated card track in the middle and one dot per
//! page at the bottom. Every clickable region is recorded in a [`UiTree`] so
//! mouse input can be mapped back to store actions.

use crate::core::event::{InputEvent, MouseButton, MouseEvent, MouseEventKind};
use crate::core::Command;
use crate::kernel::services::ports::ItemSettings;
use crate::kernel::{Action, CarouselState, ColumnLayout};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::Painter;
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::theme::Theme;
use crate::ui::core::tree::{Node, NodeKind, UiTree};
use unicode_width::UnicodeWidthStr;

const COLUMNS_LABEL: &str = "Columns ";
const AUTOPLAY_ON: &str = "[x] Autoplay";
const AUTOPLAY_OFF: &str = "[ ] Autoplay";
const DOT_ACTIVE: &str = "●";
const DOT_INACTIVE: &str = "○";
const EMPTY_TRACK: &str = "No temples to show";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub subtitle: Option<String>,
}

impl From<&ItemSettings> for Card {
    fn from(item: &ItemSettings) -> Self {
        Self {
            title: item.title.clone(),
            subtitle: item.subtitle.clone(),
        }
    }
}

/// Cell span of one card inside the track, relative to the track's left edge.
///
/// The card's width share and the track offset are both percentages of the
/// visible frame, so page `n` starts exactly `n` frame widths to the left.
pub fn card_span(
    index: usize,
    width_share: f64,
    offset_percent: f64,
    frame_width: u16,
) -> (i32, i32) {
    let frame = frame_width as f64;
    let card = frame * width_share / 100.0;
    let shift = frame * -offset_percent / 100.0;
    let left = index as f64 * card - shift;
    (left.round() as i32, (left + card).round() as i32)
}

#[derive(Debug, Default)]
pub struct CarouselView {
    area: Option<Rect>,
    tree: UiTree,
}

impl CarouselView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tree(&self) -> &UiTree {
        &self.tree
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area.is_some_and(|a| a.contains(Pos::new(x, y)))
    }

    pub fn paint(
        &mut self,
        painter: &mut Painter,
        area: Rect,
        state: &CarouselState,
        cards: &[Card],
        theme: &Theme,
    ) {
        self.area = Some(area);
        self.tree.clear();
        if area.is_empty() {
            return;
        }
        painter.fill_rect(area, Style::default());

        let (controls, rest) = area.split_top(1);
        let (separator, rest) = rest.split_top(1);
        let (track, dots_row) = rest.split_bottom(1);

        self.paint_controls(painter, controls, state, theme);
        if !separator.is_empty() {
            painter.hline(
                Pos::new(separator.x, separator.y),
                separator.w,
                '─',
                Style::default().fg(theme.muted_fg),
            );
        }
        self.paint_track(painter, track, state, cards, theme);
        self.paint_dots(painter, dots_row, state, theme);
    }

    fn paint_controls(
        &mut self,
        painter: &mut Painter,
        row: Rect,
        state: &CarouselState,
        theme: &Theme,
    ) {
        if row.is_empty() {
            return;
        }
        let muted = Style::default().fg(theme.muted_fg);
        let active = Style::default()
            .fg(theme.button_active_fg)
            .bg(theme.button_active_bg)
            .add_mod(Mod::BOLD);

        let mut x = row.x.saturating_add(1);
        painter.text_clipped(Pos::new(x, row.y), COLUMNS_LABEL, muted, row);
        x = x.saturating_add(text_width(COLUMNS_LABEL));

        for layout in ColumnLayout::ALL {
            let label = format!(" {} ", layout.columns());
            let style = if layout == state.layout {
                active
            } else {
                Style::default()
            };
            let width = text_width(&label);
            painter.text_clipped(Pos::new(x, row.y), label, style, row);
            self.push_node(
                Rect::new(x, row.y, width, 1).intersect(row),
                NodeKind::ColumnButton {
                    columns: layout.columns(),
                },
            );
            x = x.saturating_add(width + 1);
        }

        x = x.saturating_add(2);
        let (toggle, toggle_style) = if state.autoplay.is_enabled() {
            (AUTOPLAY_ON, Style::default().fg(theme.accent_fg))
        } else {
            (AUTOPLAY_OFF, muted)
        };
        painter.text_clipped(Pos::new(x, row.y), toggle, toggle_style, row);
        self.push_node(
            Rect::new(x, row.y, text_width(toggle), 1).intersect(row),
            NodeKind::AutoplayToggle,
        );
        x = x.saturating_add(text_width(toggle));

        if state.slide_count > 0 {
            let page = format!("{}/{} ", state.current_slide + 1, state.slide_count);
            let width = text_width(&page);
            let page_x = row.right().saturating_sub(width);
            if page_x > x.saturating_add(1) {
                painter.text_clipped(Pos::new(page_x, row.y), page, muted, row);
            }
        }
    }

    fn paint_track(
        &mut self,
        painter: &mut Painter,
        track: Rect,
        state: &CarouselState,
        cards: &[Card],
        theme: &Theme,
    ) {
        if track.is_empty() {
            return;
        }
        let muted = Style::default().fg(theme.muted_fg);

        if state.items.is_empty() {
            let x = track.x + track.w.saturating_sub(text_width(EMPTY_TRACK)) / 2;
            let y = track.y + track.h / 2;
            painter.text_clipped(Pos::new(x, y), EMPTY_TRACK, muted, track);
            return;
        }

        let border = Style::default().fg(theme.card_border);
        let title_style = Style::default().fg(theme.card_title_fg).add_mod(Mod::BOLD);
        let total = state.items.len();

        for (index, item) in state.items.iter().enumerate() {
            let (start, end) = card_span(index, item.flex_basis, state.offset, track.w);
            let rect = track.columns(start, end);
            if rect.is_empty() {
                continue;
            }
            self.push_node(rect, NodeKind::Card { index });
            painter.border(rect, border);

            let inner = rect.shrink(1);
            if inner.is_empty() {
                continue;
            }
            let text_x = inner.x.saturating_add(1);
            if let Some(card) = cards.get(index) {
                painter.text_clipped(Pos::new(text_x, inner.y), card.title.as_str(), title_style, inner);
                if let Some(subtitle) = card.subtitle.as_deref() {
                    if inner.h > 1 {
                        painter.text_clipped(Pos::new(text_x, inner.y + 1), subtitle, muted, inner);
                    }
                }
            }
            if inner.h > 2 {
                let number = format!("#{}/{}", index + 1, total);
                painter.text_clipped(Pos::new(text_x, inner.bottom() - 1), number, muted, inner);
            }
        }
    }

    fn paint_dots(&mut self, painter: &mut Painter, row: Rect, state: &CarouselState, theme: &Theme) {
        let count = state.dots.count();
        if row.is_empty() || count == 0 {
            return;
        }
        let active_style = Style::default().fg(theme.dot_active_fg).add_mod(Mod::BOLD);
        let inactive_style = Style::default().fg(theme.dot_inactive_fg);

        let needed = (count * 2 - 1).min(u16::MAX as usize) as u16;
        let mut x = row.x + row.w.saturating_sub(needed) / 2;
        for index in 0..count {
            if x >= row.right() {
                break;
            }
            let (symbol, style) = if state.dots.is_active(index) {
                (DOT_ACTIVE, active_style)
            } else {
                (DOT_INACTIVE, inactive_style)
            };
            painter.text_clipped(Pos::new(x, row.y), symbol, style, row);
            self.push_node(Rect::new(x, row.y, 1, 1), NodeKind::Dot { index });
            x = x.saturating_add(2);
        }
    }

    fn push_node(&mut self, rect: Rect, kind: NodeKind) {
        if !rect.is_empty() {
            self.tree.push(Node::new(rect, kind));
        }
    }

    /// Maps a mouse event onto the regions painted last frame.
    pub fn hit_test(&self, event: &MouseEvent) -> Option<Action> {
        let pos = Pos::new(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {}
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight if self.contains(pos.x, pos.y) => {
                return Some(Action::NextSlide);
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft if self.contains(pos.x, pos.y) => {
                return Some(Action::PreviousSlide);
            }
            _ => return None,
        }

        match self.tree.hit_test(pos)?.kind {
            NodeKind::ColumnButton { columns } => Some(Action::SetColumns(columns)),
            NodeKind::AutoplayToggle => Some(Action::ToggleAutoplay),
            NodeKind::Dot { index } => Some(Action::GoToSlide(index as i64)),
            NodeKind::Card { .. } => None,
        }
    }

    pub fn handle_input(&self, event: &InputEvent) -> Option<Command> {
        match event {
            InputEvent::Key(key) => Command::for_key(key),
            InputEvent::Mouse(mouse) => self.hit_test(mouse).map(Command::Carousel),
            InputEvent::Resize(width, height) => Some(Command::Carousel(Action::Resize {
                width: *width,
                height: *height,
            })),
            InputEvent::FocusGained | InputEvent::FocusLost | InputEvent::Paste(_) => None,
        }
    }
}

fn text_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text).min(u16::MAX as usize) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/views/carousel.rs"]
mod tests;
