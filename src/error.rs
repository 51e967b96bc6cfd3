use derive_more::derive::Display;

use crate::Label;

/// Misuse of the timer registry by its caller.
///
/// None of these are fatal. [TimerRegistry](crate::TimerRegistry) reports them
/// to its sink and carries on.
#[derive(PartialEq, Eq, Clone, Debug, Display)]
pub enum TimerError {
    /// `start` targeted a label that is already open.
    #[display("Timer '{_0}' already exists")]
    Duplicate(Label),
    /// `log` or `end` targeted a label that is not open.
    #[display("Timer '{_0}' does not exist")]
    Missing(Label),
}

impl TimerError {
    /// Stable numeric code attached to the reported message.
    pub fn code(&self) -> u32 {
        match self {
            TimerError::Duplicate(_) => 1,
            TimerError::Missing(_) => 2,
        }
    }
}

impl std::error::Error for TimerError {}
