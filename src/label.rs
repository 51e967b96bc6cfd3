use std::{borrow::Borrow, fmt, str::FromStr};

use derive_more::derive::Display;
use serde_with::{DeserializeFromStr, SerializeDisplay};

/// Label used when the caller does not name a timer.
pub const DEFAULT_LABEL: &str = "default";

/// The key identifying one open timer.
///
/// Any non-empty string is a valid label.
#[derive(PartialOrd, Ord, PartialEq, Eq, Clone, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct Label(Box<str>);

#[derive(PartialEq, Eq, Clone, Copy, Debug, Display)]
pub enum ParseLabelError {
    #[display("label is empty")]
    Empty,
}

impl std::error::Error for ParseLabelError {}

impl Label {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves an optional caller-supplied label, substituting `default` when
    /// it is missing or empty.
    pub(crate) fn resolve(label: Option<&str>, default: &Label) -> Self {
        match label {
            None | Some("") => default.clone(),
            Some(s) => Self(s.into()),
        }
    }
}

impl Default for Label {
    fn default() -> Self {
        Self(DEFAULT_LABEL.into())
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Label(\"{}\")", self)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Label {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseLabelError::Empty);
        }
        Ok(Self(s.into()))
    }
}

impl Borrow<str> for Label {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
