use crate::debounce::Debouncer;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const WINDOW: Duration = Duration::from_millis(500);

fn recording_debouncer() -> (Debouncer<u32>, Arc<Mutex<Vec<u32>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let debouncer = Debouncer::new(WINDOW, move |value: u32| {
        let sink = Arc::clone(&sink);
        async move {
            sink.lock().unwrap().push(value);
        }
    });
    (debouncer, calls)
}

#[tokio::test(start_paused = true)]
async fn burst_collapses_into_one_trailing_call() {
    let (debouncer, calls) = recording_debouncer();

    for value in 1..=5 {
        debouncer.invoke(value);
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert!(calls.lock().unwrap().is_empty(), "fired inside the burst");

    tokio::time::sleep(WINDOW * 2).await;

    assert_eq!(*calls.lock().unwrap(), vec![5]);
}

#[tokio::test(start_paused = true)]
async fn waits_for_a_full_quiet_window() {
    let (debouncer, calls) = recording_debouncer();

    debouncer.invoke(1);
    tokio::time::sleep(WINDOW - Duration::from_millis(1)).await;
    assert!(calls.lock().unwrap().is_empty());

    tokio::time::sleep(Duration::from_millis(2)).await;
    tokio::task::yield_now().await;
    assert_eq!(*calls.lock().unwrap(), vec![1]);
}

#[tokio::test(start_paused = true)]
async fn separated_calls_each_fire() {
    let (debouncer, calls) = recording_debouncer();

    debouncer.invoke(1);
    tokio::time::sleep(WINDOW * 2).await;
    debouncer.invoke(2);
    tokio::time::sleep(WINDOW * 2).await;

    assert_eq!(*calls.lock().unwrap(), vec![1, 2]);
}

#[tokio::test(start_paused = true)]
async fn debouncers_do_not_share_a_timer() {
    let (first, first_calls) = recording_debouncer();
    let (second, second_calls) = recording_debouncer();

    first.invoke(1);
    second.invoke(2);
    tokio::time::sleep(WINDOW * 2).await;

    assert_eq!(*first_calls.lock().unwrap(), vec![1]);
    assert_eq!(*second_calls.lock().unwrap(), vec![2]);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_debouncer_cancels_the_pending_call() {
    let (debouncer, calls) = recording_debouncer();

    debouncer.invoke(1);
    drop(debouncer);
    tokio::time::sleep(WINDOW * 2).await;

    assert!(calls.lock().unwrap().is_empty());
}
