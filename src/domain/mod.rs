pub mod enums;
pub mod session;
pub mod views;

pub use enums::{IntervalKind, Phase, StartOutcome, TickOutcome, UiMode};
pub use session::{Durations, Session, EXTENSION_SECS};
pub use views::ViewModel;
