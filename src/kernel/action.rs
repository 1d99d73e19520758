use super::layout::ColumnLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Raw column value from a column-selection control.
    SetColumns(u8),
    SelectLayout(ColumnLayout),
    GoToSlide(i64),
    NextSlide,
    PreviousSlide,
    SetAutoplay(bool),
    ToggleAutoplay,
    Resize {
        width: u16,
        height: u16,
    },
    AutoplayTick {
        generation: u64,
    },
}
