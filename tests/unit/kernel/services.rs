use super::*;
use std::time::Duration;

#[derive(Default)]
struct RecordingScheduler {
    calls: Vec<(&'static str, u64)>,
}

impl AutoplayScheduler for RecordingScheduler {
    fn start(&mut self, generation: u64, _interval: Duration) {
        self.calls.push(("start", generation));
    }

    fn stop(&mut self, generation: u64) {
        self.calls.push(("stop", generation));
    }
}

#[test]
fn effects_reach_scheduler_in_order() {
    let interval = Duration::from_secs(5);
    let effects = [
        Effect::StartAutoplay {
            generation: 1,
            interval,
        },
        Effect::StopAutoplay { generation: 1 },
        Effect::StartAutoplay {
            generation: 2,
            interval,
        },
    ];
    let mut scheduler = RecordingScheduler::default();
    apply_effects(&effects, &mut scheduler);

    assert_eq!(scheduler.calls, vec![("start", 1), ("stop", 1), ("start", 2)]);
}

#[test]
fn store_restart_leaves_one_live_timer() {
    use crate::kernel::{Action, CarouselOptions, CarouselState, Store};

    let mut store = Store::new(CarouselState::new(6, CarouselOptions::default()));
    let mut scheduler = RecordingScheduler::default();
    apply_effects(&store.initialize().effects, &mut scheduler);
    apply_effects(&store.dispatch(Action::NextSlide).effects, &mut scheduler);
    apply_effects(&store.dispatch(Action::SetColumns(2)).effects, &mut scheduler);

    let mut live = std::collections::HashSet::new();
    for (call, generation) in &scheduler.calls {
        match *call {
            "start" => assert!(live.insert(*generation)),
            _ => assert!(live.remove(generation)),
        }
        assert!(live.len() <= 1);
    }
    assert_eq!(live.len(), 1);
}
