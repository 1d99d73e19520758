use std::time::Duration;

/// Side effects requested by the store; the host applies them in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    StartAutoplay { generation: u64, interval: Duration },
    StopAutoplay { generation: u64 },
}
