use super::message::AppMessage;
use crate::kernel::services::ports::AutoplayScheduler;
use std::io;
use std::sync::mpsc::Sender;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

struct ActiveTimer {
    generation: u64,
    handle: JoinHandle<()>,
}

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
    active: Option<ActiveTimer>,
}

impl AsyncRuntime {
    /// Timer tasks run on the runtime's own worker thread; the UI loop never
    /// drives the runtime, so a build failure is returned instead of degrading.
    pub fn new(tx: Sender<AppMessage>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("autoplay-timer")
            .enable_time()
            .build()
            .inspect_err(|e| tracing::error!(error = %e, "failed to create tokio runtime"))?;
        Ok(Self {
            runtime,
            tx,
            active: None,
        })
    }

    /// Generation of the live timer task.
    pub fn active_generation(&self) -> Option<u64> {
        self.active.as_ref().map(|t| t.generation)
    }

    fn cancel_active(&mut self) {
        if let Some(timer) = self.active.take() {
            timer.handle.abort();
            tracing::debug!(generation = timer.generation, "autoplay timer cancelled");
        }
    }
}

impl AutoplayScheduler for AsyncRuntime {
    fn start(&mut self, generation: u64, interval: Duration) {
        self.cancel_active();

        let tx = self.tx.clone();
        let handle = self.runtime.spawn(async move {
            // First tick fires one full interval after start.
            let start = tokio::time::Instant::now() + interval;
            let mut ticker = tokio::time::interval_at(start, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(AppMessage::AutoplayTick { generation }).is_err() {
                    break;
                }
            }
        });

        tracing::debug!(generation, interval_ms = interval.as_millis() as u64, "autoplay timer started");
        self.active = Some(ActiveTimer { generation, handle });
    }

    fn stop(&mut self, generation: u64) {
        match self.active_generation() {
            Some(active) if active == generation => self.cancel_active(),
            Some(active) => {
                tracing::warn!(generation, active, "stop requested for a stale autoplay timer");
            }
            None => {}
        }
    }
}

impl Drop for AsyncRuntime {
    fn drop(&mut self) {
        self.cancel_active();
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime.rs"]
mod tests;
