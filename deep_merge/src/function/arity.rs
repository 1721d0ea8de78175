//! Argument-count contracts for host functions.

use std::fmt;

/// Argument counts a [`super::HostFunction`] accepts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Arity {
    /// Exactly this many arguments.
    Exactly(usize),
    /// This many arguments or more.
    AtLeast(usize),
}

impl Arity {
    /// Returns `true` when `count` arguments satisfy this arity.
    ///
    /// # Examples
    ///
    /// ```
    /// use deep_merge::Arity;
    ///
    /// assert!(Arity::AtLeast(2).accepts(5));
    /// assert!(!Arity::AtLeast(2).accepts(1));
    /// assert!(Arity::Exactly(1).accepts(1));
    /// ```
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exactly(expected) => count == expected,
            Self::AtLeast(minimum) => count >= minimum,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(expected) => write!(f, "{expected}"),
            Self::AtLeast(minimum) => write!(f, "at least {minimum}"),
        }
    }
}
