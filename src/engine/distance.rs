// src/engine/distance.rs
use serde::{Serialize, Serializer};
use std::fmt;

/// Text used for [`Distance::Infinite`] unless configured otherwise.
pub const DEFAULT_UNREACHABLE: &str = "unreachable";

/// Best-known path cost. `Infinite` orders after every finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(u64),
    Infinite,
}

impl Distance {
    pub const ZERO: Self = Self::Finite(0);

    #[must_use]
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    #[must_use]
    pub fn value(self) -> Option<u64> {
        match self {
            Self::Finite(d) => Some(d),
            Self::Infinite => None,
        }
    }

    /// Extends the distance by one edge. Overflow saturates to `Infinite`.
    #[must_use]
    pub fn saturating_add(self, weight: u64) -> Self {
        match self {
            Self::Finite(d) => d.checked_add(weight).map_or(Self::Infinite, Self::Finite),
            Self::Infinite => Self::Infinite,
        }
    }

    /// Renders with a caller-chosen sentinel for `Infinite`.
    #[must_use]
    pub fn render(self, unreachable: &str) -> String {
        match self {
            Self::Finite(d) => d.to_string(),
            Self::Infinite => unreachable.to_string(),
        }
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::Infinite
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{d}"),
            Self::Infinite => f.write_str(DEFAULT_UNREACHABLE),
        }
    }
}

// Infinite serializes as null so JSON consumers never see a magic number.
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinite_orders_last() {
        assert!(Distance::Finite(u64::MAX) < Distance::Infinite);
        assert!(Distance::ZERO < Distance::Finite(1));
    }

    #[test]
    fn test_saturating_add() {
        assert_eq!(Distance::Finite(2).saturating_add(3), Distance::Finite(5));
        assert_eq!(Distance::Finite(u64::MAX).saturating_add(1), Distance::Infinite);
        assert_eq!(Distance::Infinite.saturating_add(0), Distance::Infinite);
    }

    #[test]
    fn test_render_sentinel() {
        assert_eq!(Distance::Infinite.render("inf"), "inf");
        assert_eq!(Distance::Finite(7).to_string(), "7");
        assert_eq!(Distance::Infinite.to_string(), "unreachable");
    }
}
