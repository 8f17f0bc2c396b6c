use super::*;
use std::cell::Cell;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn trailing_burst_fires_once_after_quiet_period() {
    let fired = Cell::new(0);
    let mut debounced = Debounced::new(|| fired.set(fired.get() + 1), ms(250), Edge::Trailing);
    let t0 = Instant::now();

    for i in 0..10 {
        debounced.call(t0 + ms(i * 50));
        assert!(!debounced.poll(t0 + ms(i * 50 + 10)));
    }
    assert_eq!(fired.get(), 0);

    // Last call at 450ms; deadline is 700ms.
    assert!(!debounced.poll(t0 + ms(699)));
    assert!(debounced.poll(t0 + ms(700)));
    assert_eq!(fired.get(), 1);

    assert!(!debounced.poll(t0 + ms(2000)));
    assert_eq!(fired.get(), 1);
}

#[test]
fn leading_burst_fires_once_immediately() {
    let fired = Cell::new(0);
    let mut debounced = Debounced::new(|| fired.set(fired.get() + 1), ms(250), Edge::Leading);
    let t0 = Instant::now();

    debounced.call(t0);
    assert_eq!(fired.get(), 1);
    for i in 1..10 {
        debounced.call(t0 + ms(i * 50));
        debounced.poll(t0 + ms(i * 50 + 10));
    }
    assert_eq!(fired.get(), 1);

    // Quiet period ends without a trailing call.
    assert!(!debounced.poll(t0 + ms(1000)));
    assert_eq!(fired.get(), 1);
    assert!(!debounced.is_pending());

    // A new burst fires again.
    debounced.call(t0 + ms(1100));
    assert_eq!(fired.get(), 2);
}

#[test]
fn separate_bursts_fire_separately() {
    let mut debouncer = Debouncer::trailing(ms(100));
    let t0 = Instant::now();

    assert!(!debouncer.call(t0));
    assert!(debouncer.poll(t0 + ms(100)));
    assert!(!debouncer.call(t0 + ms(300)));
    assert!(debouncer.poll(t0 + ms(400)));
}

#[test]
fn each_call_pushes_the_deadline_back() {
    let mut debouncer = Debouncer::trailing(ms(100));
    let t0 = Instant::now();

    debouncer.call(t0);
    assert_eq!(debouncer.deadline(), Some(t0 + ms(100)));
    debouncer.call(t0 + ms(80));
    assert_eq!(debouncer.deadline(), Some(t0 + ms(180)));
    assert!(!debouncer.poll(t0 + ms(120)));
    assert!(debouncer.poll(t0 + ms(180)));
}

#[test]
fn cancel_drops_pending_fire() {
    let fired = Cell::new(false);
    let mut debounced = Debounced::new(|| fired.set(true), ms(50), Edge::Trailing);
    let t0 = Instant::now();

    debounced.call(t0);
    assert!(debounced.is_pending());
    debounced.cancel();
    assert!(!debounced.is_pending());
    assert!(!debounced.poll(t0 + ms(500)));
    assert!(!fired.get());
}

#[test]
fn leading_call_after_quiet_period_starts_new_burst_without_poll() {
    let mut debouncer = Debouncer::leading(ms(250));
    let t0 = Instant::now();

    assert!(debouncer.call(t0));
    assert!(!debouncer.call(t0 + ms(100)));
    // Deadline was t0+350ms; nothing polled in between.
    assert!(debouncer.call(t0 + ms(1000)));
    assert_eq!(debouncer.deadline(), Some(t0 + ms(1250)));
}

#[test]
fn trailing_call_after_quiet_period_fires_overdue_burst() {
    let fired = Cell::new(0);
    let mut debounced = Debounced::new(|| fired.set(fired.get() + 1), ms(250), Edge::Trailing);
    let t0 = Instant::now();

    debounced.call(t0);
    debounced.call(t0 + ms(1000));
    assert_eq!(fired.get(), 1);

    // The new burst still gets its own trailing fire.
    assert!(!debounced.poll(t0 + ms(1000)));
    assert!(debounced.poll(t0 + ms(1250)));
    assert_eq!(fired.get(), 2);
}

#[test]
fn call_exactly_at_deadline_ends_the_burst() {
    let mut debouncer = Debouncer::trailing(ms(100));
    let t0 = Instant::now();

    assert!(!debouncer.call(t0));
    assert!(!debouncer.call(t0 + ms(99)));
    assert!(debouncer.call(t0 + ms(199)));
}

#[test]
fn poll_without_call_is_noop() {
    let mut debouncer = Debouncer::leading(DEFAULT_RESIZE_DELAY);
    assert!(!debouncer.poll(Instant::now()));
    assert_eq!(debouncer.edge(), Edge::Leading);
    assert_eq!(debouncer.delay(), ms(250));
}
