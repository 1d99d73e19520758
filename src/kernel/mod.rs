//! Headless carousel core (state/action/effect).

pub mod action;
pub mod effect;
pub mod layout;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use layout::{track_offset, ColumnLayout, InvalidColumns, WidthRounding};
pub use state::{
    AutoplayState, CarouselOptions, CarouselState, ItemBox, NavigationDots,
    DEFAULT_AUTOPLAY_INTERVAL,
};
pub use store::{DispatchResult, Store};
