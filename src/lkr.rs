use anyhow::bail;
use serde_with::{DeserializeFromStr, SerializeDisplay};

use std::{
    fmt::{Debug, Display},
    iter::Sum,
    ops::AddAssign,
    str::FromStr,
};

/// Represents an amount of money in Sri Lankan rupees (LKR).
///
/// Amounts are whole rupees, stored exactly as the base-10 integer text found
/// in the `Amount Sold` column. The [`Display`] implementation writes the bare
/// number back out, so records round-trip through CSV unchanged.
#[derive(
    Clone, Copy, Default, DeserializeFromStr, SerializeDisplay, Eq, PartialEq, Ord, PartialOrd,
)]
pub struct Lkr(pub i64);

impl Lkr {
    /// Returns the amount as a float, for computing means and medians.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl Debug for Lkr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Lkr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Lkr {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let units: i64 = s.trim().parse()?;
        if units < 0 {
            bail!("negative sale amount: {s:?}");
        }
        Ok(Self(units))
    }
}

impl AddAssign for Lkr {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Lkr {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, amount| {
            acc += amount;
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_fn_parses_plain_integer_text() {
        assert_eq!(Lkr::from_str("240").unwrap(), Lkr(240));
        assert_eq!(Lkr::from_str(" 1005 ").unwrap(), Lkr(1005));
    }

    #[test]
    fn from_str_fn_rejects_non_numeric_and_negative_amounts() {
        assert!(Lkr::from_str("12.50").is_err());
        assert!(Lkr::from_str("lots").is_err());
        assert!(Lkr::from_str("-5").is_err());
    }

    #[test]
    fn display_round_trips_the_original_text() {
        assert_eq!(Lkr::from_str("240").unwrap().to_string(), "240");
    }

    #[test]
    fn sum_adds_amounts() {
        let total: Lkr = [Lkr(50), Lkr(25), Lkr(25)].into_iter().sum();
        assert_eq!(total, Lkr(100));
    }
}
