//! Column layouts and the page/offset arithmetic derived from them.

use std::fmt;

/// Item width used for the three-column offset calculation.
///
/// Truncated rather than `100 / 3`; pages shifted with it land 0.001% short of a
/// full page. Select [`WidthRounding::Exact`] to use the exact fraction instead.
pub const LEGACY_THIRD_WIDTH_PERCENT: f64 = 33.333;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColumnLayout {
    Two,
    #[default]
    Three,
    Four,
}

impl ColumnLayout {
    pub const ALL: [ColumnLayout; 3] = [ColumnLayout::Two, ColumnLayout::Three, ColumnLayout::Four];

    pub const fn columns(self) -> u8 {
        match self {
            ColumnLayout::Two => 2,
            ColumnLayout::Three => 3,
            ColumnLayout::Four => 4,
        }
    }

    /// Number of items visible on one page.
    pub const fn items_per_page(self) -> usize {
        self.columns() as usize
    }

    /// Flex-basis / max-width share of a single item, in percent of the frame.
    pub fn width_share(self) -> f64 {
        100.0 / self.columns() as f64
    }

    pub fn page_count(self, item_count: usize) -> usize {
        item_count.div_ceil(self.items_per_page())
    }

    /// Per-item width fed into the short-final-page offset.
    pub fn offset_item_width(self, rounding: WidthRounding) -> f64 {
        match (self, rounding) {
            (ColumnLayout::Two, _) => 50.0,
            (ColumnLayout::Four, _) => 25.0,
            (ColumnLayout::Three, WidthRounding::Legacy) => LEGACY_THIRD_WIDTH_PERCENT,
            (ColumnLayout::Three, WidthRounding::Exact) => 100.0 / 3.0,
        }
    }
}

impl fmt::Display for ColumnLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "columns-{}", self.columns())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidColumns(pub u8);

impl fmt::Display for InvalidColumns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported column count {} (expected 2, 3 or 4)", self.0)
    }
}

impl std::error::Error for InvalidColumns {}

impl TryFrom<u8> for ColumnLayout {
    type Error = InvalidColumns;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ColumnLayout::Two),
            3 => Ok(ColumnLayout::Three),
            4 => Ok(ColumnLayout::Four),
            other => Err(InvalidColumns(other)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthRounding {
    #[default]
    Legacy,
    Exact,
}

/// Horizontal translation of the track, in percent of the visible frame.
///
/// A short final page (item count not divisible by the page size) is aligned
/// from the item widths instead of whole pages.
pub fn track_offset(
    layout: ColumnLayout,
    rounding: WidthRounding,
    item_count: usize,
    page_index: usize,
    page_count: usize,
) -> f64 {
    let per_page = layout.items_per_page();
    let remainder = item_count % per_page;
    let on_last_page = page_count > 0 && page_index == page_count - 1;

    if on_last_page && remainder != 0 {
        let shifted = item_count - remainder.min(per_page);
        -(shifted as f64 * layout.offset_item_width(rounding) / per_page as f64)
    } else {
        -(page_index as f64 * 100.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/layout.rs"]
mod tests;
