use super::*;
use std::sync::mpsc;
use std::time::Instant;

const TICK: Duration = Duration::from_millis(20);
const WAIT: Duration = Duration::from_secs(2);

fn runtime() -> (AsyncRuntime, mpsc::Receiver<AppMessage>) {
    let (tx, rx) = mpsc::channel();
    (AsyncRuntime::new(tx).unwrap(), rx)
}

#[test]
fn started_timer_delivers_ticks_with_its_generation() {
    let (mut runtime, rx) = runtime();
    runtime.start(7, TICK);
    assert_eq!(runtime.active_generation(), Some(7));

    let first = rx.recv_timeout(WAIT).unwrap();
    let second = rx.recv_timeout(WAIT).unwrap();
    assert_eq!(first, AppMessage::AutoplayTick { generation: 7 });
    assert_eq!(second, AppMessage::AutoplayTick { generation: 7 });
}

#[test]
fn first_tick_waits_a_full_interval() {
    let (mut runtime, rx) = runtime();
    let interval = Duration::from_millis(150);
    let started = Instant::now();
    runtime.start(1, interval);

    rx.recv_timeout(WAIT).unwrap();
    assert!(started.elapsed() >= Duration::from_millis(100));
}

#[test]
fn restart_replaces_previous_timer() {
    let (mut runtime, rx) = runtime();
    runtime.start(1, TICK);
    runtime.start(2, TICK);
    assert_eq!(runtime.active_generation(), Some(2));

    std::thread::sleep(TICK * 5);
    let generations: Vec<u64> = rx
        .try_iter()
        .map(|AppMessage::AutoplayTick { generation }| generation)
        .collect();
    assert!(!generations.is_empty());
    assert!(generations.iter().all(|&g| g == 2));
}

#[test]
fn stop_cancels_matching_timer() {
    let (mut runtime, rx) = runtime();
    runtime.start(3, TICK);
    rx.recv_timeout(WAIT).unwrap();

    runtime.stop(3);
    assert_eq!(runtime.active_generation(), None);

    std::thread::sleep(TICK * 2);
    let _ = rx.try_iter().count();
    std::thread::sleep(TICK * 4);
    assert!(rx.try_recv().is_err());
}

#[test]
fn stop_ignores_stale_generation() {
    let (mut runtime, _rx) = runtime();
    runtime.start(5, TICK);
    runtime.stop(4);
    assert_eq!(runtime.active_generation(), Some(5));
}

#[test]
fn timer_runs_without_the_caller_driving_the_runtime() {
    let (mut runtime, rx) = runtime();
    assert_eq!(
        runtime.runtime.handle().runtime_flavor(),
        tokio::runtime::RuntimeFlavor::MultiThread
    );

    // The test thread never enters the runtime; only its worker can fire ticks.
    runtime.start(9, TICK);
    assert_eq!(
        rx.recv_timeout(WAIT),
        Ok(AppMessage::AutoplayTick { generation: 9 })
    );
}
