use std::fmt;

use serde::Serialize;

/// Non-negative, finite item price.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Parses free-text price input.
    ///
    /// Surrounding whitespace is ignored. Returns `None` for empty input,
    /// anything that is not a finite number, and negative values.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        let value: f64 = trimmed.parse().ok()?;
        Self::new(value)
    }

    pub fn new(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        // -0.0 compares equal to 0.0 but would display as "-0".
        Some(Self(value + 0.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Positional decimal form with no trailing zeros. Very large or very small
/// values are written out in full rather than in exponent notation.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
