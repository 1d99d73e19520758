//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the app (kernel-facing).
//! - `adapters`: OS/runtime specific implementations (IO/async).

#[cfg(feature = "tui")]
pub mod adapters;
pub mod ports;

use crate::kernel::Effect;
use ports::AutoplayScheduler;

/// Hands store effects to the timer, in the order they were emitted.
pub fn apply_effects(effects: &[Effect], scheduler: &mut dyn AutoplayScheduler) {
    for effect in effects {
        match *effect {
            Effect::StartAutoplay {
                generation,
                interval,
            } => scheduler.start(generation, interval),
            Effect::StopAutoplay { generation } => scheduler.stop(generation),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/services.rs"]
mod tests;
