/// Which interval the session is currently counting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalKind {
    Work,
    Break,
}

impl IntervalKind {
    /// Get the emoji symbol for this interval
    pub fn symbol(&self) -> &'static str {
        match self {
            IntervalKind::Work => "🍅",
            IntervalKind::Break => "🍌",
        }
    }

    /// Get the display name for this interval
    pub fn name(&self) -> &'static str {
        match self {
            IntervalKind::Work => "Work",
            IntervalKind::Break => "Break",
        }
    }

    /// Both intervals in display order
    pub fn all() -> &'static [IntervalKind] {
        &[IntervalKind::Work, IntervalKind::Break]
    }
}

/// Coarse state of the session state machine, derived from the session flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle(IntervalKind),
    Running(IntervalKind),
    /// A work interval just finished and the user has not chosen what comes next
    CallToAction,
}

/// UI mode for the application (decides which key map is active)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    CallToAction,
    Settings,
}

/// Outcome of asking the session to start counting down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    AlreadyRunning,
    /// Nothing was left on the clock, so the session was reset to a fresh work interval
    ResetInstead,
    /// The post-work choice is pending; start is not offered until it is made
    AwaitingChoice,
}

/// Outcome of a single countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Expired,
    NotRunning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_names() {
        assert_eq!(IntervalKind::Work.name(), "Work");
        assert_eq!(IntervalKind::Break.name(), "Break");
        assert_eq!(IntervalKind::all().len(), 2);
    }
}
