//! Naira amounts for catalog prices.
//!
//! Uses an integer representation to avoid floating-point precision
//! issues. Catalog prices are whole-naira amounts with no kobo component,
//! so the smallest unit here is one naira.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A whole-naira monetary amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Naira(i64);

impl Naira {
    /// Create an amount from whole naira.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Zero naira.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The raw whole-naira amount.
    pub fn amount(&self) -> i64 {
        self.0
    }

    /// Format as a display string with the naira sign and thousands
    /// grouping (e.g., "₦45,000"), the storefront price format.
    pub fn display(&self) -> String {
        let negative = self.0 < 0;
        let digits = self.0.unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        if negative {
            format!("-\u{20a6}{}", grouped)
        } else {
            format!("\u{20a6}{}", grouped)
        }
    }
}

impl Add for Naira {
    type Output = Naira;

    fn add(self, other: Naira) -> Naira {
        Naira(self.0 + other.0)
    }
}

impl Sub for Naira {
    type Output = Naira;

    fn sub(self, other: Naira) -> Naira {
        Naira(self.0 - other.0)
    }
}

impl Mul<i64> for Naira {
    type Output = Naira;

    fn mul(self, factor: i64) -> Naira {
        Naira(self.0 * factor)
    }
}

impl fmt::Display for Naira {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<i64> for Naira {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_grouping() {
        assert_eq!(Naira::new(45000).display(), "\u{20a6}45,000");
        assert_eq!(Naira::new(3500).display(), "\u{20a6}3,500");
        assert_eq!(Naira::new(800).display(), "\u{20a6}800");
        assert_eq!(Naira::new(1_250_000).display(), "\u{20a6}1,250,000");
        assert_eq!(Naira::new(0).display(), "\u{20a6}0");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Naira::new(-1500).display(), "-\u{20a6}1,500");
    }

    #[test]
    fn test_arithmetic() {
        let a = Naira::new(3000);
        let b = Naira::new(500);
        assert_eq!(a + b, Naira::new(3500));
        assert_eq!(a - b, Naira::new(2500));
        assert_eq!(b * 4, Naira::new(2000));
    }

    #[test]
    fn test_ordering() {
        assert!(Naira::new(2800) < Naira::new(3000));
        assert!(Naira::new(100_000) >= Naira::new(100_000));
    }
}
