use std::time::{Duration, Instant};

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// How long to wait for input before the timers need polling again
pub fn poll_timeout(now: Instant, next_due: Option<Instant>) -> Duration {
    let tick = tick_duration();
    match next_due {
        Some(due) => due.saturating_duration_since(now).min(tick),
        None => tick,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(250));
    }

    #[test]
    fn test_poll_timeout_wakes_for_next_deadline() {
        let now = Instant::now();
        assert_eq!(poll_timeout(now, None), tick_duration());
        assert_eq!(
            poll_timeout(now, Some(now + Duration::from_millis(40))),
            Duration::from_millis(40)
        );
        assert_eq!(poll_timeout(now, Some(now + Duration::from_secs(2))), tick_duration());
        assert_eq!(poll_timeout(now + Duration::from_secs(1), Some(now)), Duration::ZERO);
    }
}
