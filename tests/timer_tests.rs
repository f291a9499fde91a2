//! Countdown tests - the clock as plain state, ticked by hand

use memory_match::core::CountdownTimer;
use memory_match::types::{TickOutcome, GAME_DURATION_SECS};

#[test]
fn test_full_default_countdown() {
    let mut timer = CountdownTimer::new(GAME_DURATION_SECS);
    timer.start();

    let mut running = 0;
    loop {
        match timer.tick() {
            TickOutcome::Running { elapsed_secs } => {
                running += 1;
                assert_eq!(elapsed_secs, running);
            }
            TickOutcome::Expired => break,
            TickOutcome::Idle => panic!("timer stopped before expiry"),
        }
    }

    assert_eq!(running, GAME_DURATION_SECS - 1);
    assert_eq!(timer.elapsed_secs(), GAME_DURATION_SECS);
    assert!(timer.is_expired());
}

#[test]
fn test_elapsed_never_passes_duration() {
    let mut timer = CountdownTimer::new(5);
    timer.start();
    for _ in 0..20 {
        timer.tick();
        assert!(timer.elapsed_secs() <= timer.duration_secs());
    }
    assert_eq!(timer.remaining_secs(), 0);
}

#[test]
fn test_restart_mid_count() {
    let mut timer = CountdownTimer::new(10);
    timer.start();
    for _ in 0..4 {
        timer.tick();
    }
    timer.stop();
    timer.start();
    assert_eq!(timer.elapsed_secs(), 0);
    assert_eq!(timer.tick(), TickOutcome::Running { elapsed_secs: 1 });
}
