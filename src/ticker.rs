use std::time::Duration;

/// Event-poll interval in milliseconds (keeps the UI responsive between
/// timer seconds)
pub const POLL_INTERVAL_MS: u64 = 250;

/// Focus-timer advancement interval in seconds
pub const TIMER_TICK_SECS: u64 = 1;

/// How long the event loop waits for input before re-rendering
pub fn poll_duration() -> Duration {
    Duration::from_millis(POLL_INTERVAL_MS)
}

/// One focus-timer tick
pub fn timer_tick() -> Duration {
    Duration::from_secs(TIMER_TICK_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_is_shorter_than_timer_tick() {
        assert!(poll_duration() < timer_tick());
    }

    #[test]
    fn test_timer_tick_is_one_second() {
        assert_eq!(timer_tick(), Duration::from_secs(1));
    }
}
