//! Views: pure rendering + hit testing over kernel state.

pub mod carousel;

pub use carousel::{card_span, Card, CarouselView};
