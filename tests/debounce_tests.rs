use futures_util::FutureExt;
use ipaas::utils::Debouncer;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

fn recorder(quiet_ms: u64) -> (Debouncer<u32>, Arc<Mutex<Vec<u32>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let debouncer = Debouncer::new(Duration::from_millis(quiet_ms), move |v: u32| {
        let sink = Arc::clone(&sink);
        async move { sink.lock().unwrap().push(v) }.boxed()
    });
    (debouncer, calls)
}

#[tokio::test(start_paused = true)]
async fn test_burst_fires_once_with_last_args() {
    let (debouncer, calls) = recorder(600);

    for i in 1..=5 {
        debouncer.call(i);
        sleep(Duration::from_millis(100)).await;
    }
    assert!(calls.lock().unwrap().is_empty());
    assert!(debouncer.is_pending());

    sleep(Duration::from_millis(700)).await;
    assert_eq!(*calls.lock().unwrap(), vec![5]);
    assert!(!debouncer.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_quiet_period_is_measured_from_last_call() {
    let (debouncer, calls) = recorder(600);

    debouncer.call(1);
    sleep(Duration::from_millis(500)).await;
    debouncer.call(2);
    sleep(Duration::from_millis(500)).await;
    // 1000ms after the first call, but only 500ms after the second
    assert!(calls.lock().unwrap().is_empty());

    sleep(Duration::from_millis(200)).await;
    assert_eq!(*calls.lock().unwrap(), vec![2]);
}

#[tokio::test(start_paused = true)]
async fn test_separate_bursts_fire_separately() {
    let (debouncer, calls) = recorder(600);

    debouncer.call(1);
    sleep(Duration::from_millis(700)).await;
    debouncer.call(2);
    sleep(Duration::from_millis(700)).await;

    assert_eq!(*calls.lock().unwrap(), vec![1, 2]);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_drops_pending_call() {
    let (debouncer, calls) = recorder(600);

    debouncer.call(1);
    debouncer.cancel();
    sleep(Duration::from_millis(1000)).await;

    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_fired_call_is_not_cancelled_by_new_calls() {
    let finished = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&finished);
    let debouncer = Debouncer::new(Duration::from_millis(600), move |v: u32| {
        let sink = Arc::clone(&sink);
        async move {
            sleep(Duration::from_millis(2000)).await;
            sink.lock().unwrap().push(v);
        }
        .boxed()
    });

    debouncer.call(1);
    sleep(Duration::from_millis(700)).await;
    // the first call is now in flight
    debouncer.call(2);
    sleep(Duration::from_millis(5000)).await;

    assert_eq!(*finished.lock().unwrap(), vec![1, 2]);
}
