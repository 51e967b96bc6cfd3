use serde::{Deserialize, Serialize};

use crate::{Label, DEFAULT_DECIMAL_PRECISION};

/// Settings of a [TimerRegistry](crate::TimerRegistry).
///
/// Missing fields fall back to their defaults when deserializing, so a host
/// can embed this in its own settings and only spell out what it changes.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Decimal places of every reported duration.
    pub decimal_precision: usize,
    /// Label substituted when the caller omits one.
    pub default_label: Label,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decimal_precision: DEFAULT_DECIMAL_PRECISION,
            default_label: Label::default(),
        }
    }
}
