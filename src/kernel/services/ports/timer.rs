use std::time::Duration;

/// Repeating autoplay timer.
///
/// `start` must cancel whatever timer is live before arming a new one, so at
/// most one timer exists at any time.
pub trait AutoplayScheduler {
    fn start(&mut self, generation: u64, interval: Duration);

    fn stop(&mut self, generation: u64);
}
