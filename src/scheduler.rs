//! Cancellable timed callbacks for the single-threaded event loop.
//!
//! Nothing here runs on its own: the main loop asks the schedule what is due
//! at `now` and the app reacts. Cancelling is dropping the handle.

use std::time::{Duration, Instant};

/// Period of the countdown process
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Quiet period before the controls hide during a running countdown
pub const AUTO_HIDE_DELAY: Duration = Duration::from_secs(2);

/// Length of the highlight after a work interval finishes
pub const PULSE_DURATION: Duration = Duration::from_millis(600);

/// Length of the clock emphasis after time is added
pub const EMPHASIS_DURATION: Duration = Duration::from_millis(200);

/// A pending one-shot callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    due: Instant,
}

impl Deadline {
    pub fn after(now: Instant, delay: Duration) -> Self {
        Self { due: now + delay }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }

    pub fn due(&self) -> Instant {
        self.due
    }
}

/// The periodic countdown process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Countdown {
    next_tick: Instant,
}

/// All pending callbacks of the session. At most one of each kind exists.
#[derive(Debug, Default)]
pub struct Schedule {
    countdown: Option<Countdown>,
    auto_hide: Option<Deadline>,
    pulse: Option<Deadline>,
    emphasis: Option<Deadline>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the countdown process. Refuses if one is already active.
    pub fn start_countdown(&mut self, now: Instant) -> bool {
        if self.countdown.is_some() {
            return false;
        }
        self.countdown = Some(Countdown {
            next_tick: now + TICK_PERIOD,
        });
        true
    }

    pub fn cancel_countdown(&mut self) -> bool {
        self.countdown.take().is_some()
    }

    pub fn countdown_active(&self) -> bool {
        self.countdown.is_some()
    }

    /// Consume one due tick, if any. Call repeatedly to catch up after a stall.
    pub fn take_due_tick(&mut self, now: Instant) -> bool {
        match &mut self.countdown {
            Some(countdown) if now >= countdown.next_tick => {
                countdown.next_tick += TICK_PERIOD;
                true
            }
            _ => false,
        }
    }

    /// Arm (or re-arm) the auto-hide timeout, replacing any pending one
    pub fn arm_auto_hide(&mut self, now: Instant) {
        self.auto_hide = Some(Deadline::after(now, AUTO_HIDE_DELAY));
    }

    pub fn cancel_auto_hide(&mut self) {
        self.auto_hide = None;
    }

    #[cfg(test)]
    pub fn auto_hide_armed(&self) -> bool {
        self.auto_hide.is_some()
    }

    /// Fire the auto-hide timeout once it is due
    pub fn take_due_auto_hide(&mut self, now: Instant) -> bool {
        take_if_due(&mut self.auto_hide, now)
    }

    pub fn start_pulse(&mut self, now: Instant) {
        self.pulse = Some(Deadline::after(now, PULSE_DURATION));
    }

    pub fn start_emphasis(&mut self, now: Instant) {
        self.emphasis = Some(Deadline::after(now, EMPHASIS_DURATION));
    }

    pub fn is_pulsing(&self, now: Instant) -> bool {
        self.pulse.is_some_and(|d| !d.is_due(now))
    }

    pub fn is_emphasized(&self, now: Instant) -> bool {
        self.emphasis.is_some_and(|d| !d.is_due(now))
    }

    /// Drop cosmetic effects that have run their course
    pub fn expire_cosmetics(&mut self, now: Instant) {
        take_if_due(&mut self.pulse, now);
        take_if_due(&mut self.emphasis, now);
    }

    /// Earliest moment anything needs attention
    pub fn next_due(&self) -> Option<Instant> {
        [
            self.countdown.map(|c| c.next_tick),
            self.auto_hide.map(|d| d.due()),
            self.pulse.map(|d| d.due()),
            self.emphasis.map(|d| d.due()),
        ]
        .into_iter()
        .flatten()
        .min()
    }
}

fn take_if_due(slot: &mut Option<Deadline>, now: Instant) -> bool {
    if slot.is_some_and(|d| d.is_due(now)) {
        *slot = None;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_one_countdown() {
        let now = Instant::now();
        let mut schedule = Schedule::new();

        assert!(schedule.start_countdown(now));
        assert!(!schedule.start_countdown(now));
        assert!(schedule.countdown_active());
        assert!(schedule.cancel_countdown());
        assert!(!schedule.cancel_countdown());
    }

    #[test]
    fn test_ticks_once_per_second() {
        let now = Instant::now();
        let mut schedule = Schedule::new();
        schedule.start_countdown(now);

        assert!(!schedule.take_due_tick(now + Duration::from_millis(999)));
        assert!(schedule.take_due_tick(now + TICK_PERIOD));
        assert!(!schedule.take_due_tick(now + TICK_PERIOD));

        // Stalled for three seconds: catch up one tick at a time
        let later = now + Duration::from_secs(4);
        let mut ticks = 0;
        while schedule.take_due_tick(later) {
            ticks += 1;
        }
        assert_eq!(ticks, 3);
    }

    #[test]
    fn test_auto_hide_rearm_and_fire() {
        let now = Instant::now();
        let mut schedule = Schedule::new();
        schedule.arm_auto_hide(now);

        let later = now + Duration::from_millis(1500);
        schedule.arm_auto_hide(later);
        assert!(!schedule.take_due_auto_hide(now + AUTO_HIDE_DELAY));
        assert!(schedule.take_due_auto_hide(later + AUTO_HIDE_DELAY));
        assert!(!schedule.auto_hide_armed());
        assert!(!schedule.take_due_auto_hide(later + AUTO_HIDE_DELAY));
    }

    #[test]
    fn test_cosmetics_expire() {
        let now = Instant::now();
        let mut schedule = Schedule::new();
        schedule.start_pulse(now);
        schedule.start_emphasis(now);

        assert!(schedule.is_pulsing(now));
        assert!(schedule.is_emphasized(now));
        assert!(!schedule.is_emphasized(now + EMPHASIS_DURATION));

        schedule.expire_cosmetics(now + PULSE_DURATION);
        assert!(!schedule.is_pulsing(now));
        assert_eq!(schedule.next_due(), None);
    }

    #[test]
    fn test_next_due_is_earliest() {
        let now = Instant::now();
        let mut schedule = Schedule::new();
        schedule.arm_auto_hide(now);
        schedule.start_countdown(now);
        assert_eq!(schedule.next_due(), Some(now + TICK_PERIOD));
    }
}
