#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    AutoplayTick { generation: u64 },
}
