use coinjack_engine::timer::{DepletionTimer, Tick, TimerChange, COUNTDOWN_SECS};

#[test]
fn arms_only_from_inactive_at_non_positive_balance() {
    let mut timer = DepletionTimer::new();
    assert_eq!(timer.observe(50), TimerChange::Unchanged);
    assert_eq!(timer.observe(-20), TimerChange::Armed);
    assert_eq!(timer.remaining(), COUNTDOWN_SECS);
    assert_eq!(timer.observe(0), TimerChange::Unchanged);
    assert!(timer.is_active());
}

#[test]
fn counts_down_one_second_per_tick() {
    let mut timer = DepletionTimer::new();
    timer.observe(0);
    for expected in (1..COUNTDOWN_SECS).rev() {
        assert_eq!(timer.tick(), Tick::Counting(expected));
    }
    assert_eq!(timer.tick(), Tick::Expired);
    assert!(!timer.is_active());
    assert_eq!(timer.tick(), Tick::Idle);
}

#[test]
fn cancelled_timer_stops_ticking() {
    let mut timer = DepletionTimer::new();
    timer.observe(0);
    timer.tick();
    assert_eq!(timer.observe(10), TimerChange::Cancelled);
    assert_eq!(timer.tick(), Tick::Idle);
    assert_eq!(timer.remaining(), COUNTDOWN_SECS);
}

#[test]
fn can_rearm_after_expiry() {
    let mut timer = DepletionTimer::new();
    timer.observe(0);
    for _ in 0..COUNTDOWN_SECS {
        timer.tick();
    }
    assert!(!timer.is_active());
    assert_eq!(timer.observe(0), TimerChange::Armed);
}
