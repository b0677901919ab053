//! Prices in whole rubles.
//!
//! The shop never deals in kopecks, so a price is a plain count of whole
//! currency units. Arithmetic saturates instead of wrapping.

use std::fmt;
use std::iter::Sum;

use serde::{Deserialize, Serialize};

/// Currency sign appended to every displayed amount.
pub const CURRENCY_SIGN: &str = "₽";

/// An amount of money in whole rubles.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Zero rubles.
    pub const ZERO: Self = Self(0);

    /// Create a price from a whole number of rubles.
    #[must_use]
    pub const fn rubles(amount: u64) -> Self {
        Self(amount)
    }

    /// The amount in whole rubles.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Whether the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Sum of two prices.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{CURRENCY_SIGN}", self.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}
