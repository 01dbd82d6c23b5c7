//! Money amounts for catalog prices.

use core::fmt;
use core::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DomainError, DomainResult};

/// Largest amount (in cents) that still round-trips exactly through an `f64`.
const MAX_CENTS: i64 = 1 << 53;

/// A non-negative price with two decimal places.
///
/// Stored in the smallest currency unit (cents) so comparisons and storage are
/// exact. Serialized as a JSON number (`999.99`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    /// Build a price from cents, rejecting negative or oversized amounts.
    pub fn from_cents(cents: i64) -> DomainResult<Self> {
        if cents < 0 {
            return Err(DomainError::invalid_price("price must not be negative"));
        }
        if cents > MAX_CENTS {
            return Err(DomainError::invalid_price("price is too large"));
        }
        Ok(Self(cents))
    }

    /// Amount in cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Convert a floating point amount (e.g. from JSON).
    ///
    /// Values with more than two fractional digits are rejected rather than
    /// silently rounded.
    pub fn from_f64(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::invalid_price("price must be a finite number"));
        }
        if value < 0.0 {
            return Err(DomainError::invalid_price("price must not be negative"));
        }
        let scaled = value * 100.0;
        let cents = scaled.round();
        if (scaled - cents).abs() > 1e-6 {
            return Err(DomainError::invalid_price(
                "price must have at most two decimal places",
            ));
        }
        if cents > MAX_CENTS as f64 {
            return Err(DomainError::invalid_price("price is too large"));
        }
        Self::from_cents(cents as i64)
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl From<u32> for Price {
    fn from(cents: u32) -> Self {
        Self(i64::from(cents))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = DomainError;

    /// Parse decimal text: `"80"`, `"79.5"`, `"999.99"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('-') {
            return Err(DomainError::invalid_price("price must not be negative"));
        }

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(frac) {
            return Err(DomainError::invalid_price(format!("not a decimal amount: {s:?}")));
        }
        if frac.len() > 2 {
            return Err(DomainError::invalid_price(
                "price must have at most two decimal places",
            ));
        }

        let too_large = || DomainError::invalid_price("price is too large");
        let whole: i64 = whole.parse().map_err(|_| too_large())?;
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| too_large())? * 10,
            _ => frac.parse().map_err(|_| too_large())?,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .ok_or_else(too_large)?;
        Self::from_cents(cents)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

struct PriceVisitor;

impl<'de> Visitor<'de> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative amount with at most two decimal places")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        Price::from_f64(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        let cents = i64::try_from(v)
            .ok()
            .and_then(|v| v.checked_mul(100))
            .ok_or_else(|| E::custom("price is too large"))?;
        Price::from_cents(cents).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        let cents = v
            .checked_mul(100)
            .ok_or_else(|| E::custom("price is too large"))?;
        Price::from_cents(cents).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_text() {
        assert_eq!("999.99".parse::<Price>().unwrap().cents(), 99_999);
        assert_eq!("79.5".parse::<Price>().unwrap().cents(), 7_950);
        assert_eq!("80".parse::<Price>().unwrap().cents(), 8_000);
        assert_eq!("0".parse::<Price>().unwrap(), Price::ZERO);
    }

    #[test]
    fn rejects_negative_and_malformed_text() {
        for bad in ["-1", "-0.01", "", ".5", "1.234", "12a", "1.2.3", "1e3"] {
            let err = bad.parse::<Price>().unwrap_err();
            assert!(matches!(err, DomainError::InvalidPrice(_)), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn displays_with_two_decimals() {
        assert_eq!(Price::from(7_950).to_string(), "79.50");
        assert_eq!(Price::from(5).to_string(), "0.05");
        assert_eq!(Price::from(129_999).to_string(), "1299.99");
    }

    #[test]
    fn json_uses_plain_numbers() {
        let price = Price::from(99_999);
        assert_eq!(serde_json::to_string(&price).unwrap(), "999.99");

        let back: Price = serde_json::from_str("999.99").unwrap();
        assert_eq!(back, price);

        let whole: Price = serde_json::from_str("50").unwrap();
        assert_eq!(whole.cents(), 5_000);
    }

    #[test]
    fn json_rejects_negative_and_sub_cent_amounts() {
        assert!(serde_json::from_str::<Price>("-3.00").is_err());
        assert!(serde_json::from_str::<Price>("1.005").is_err());
        assert!(serde_json::from_str::<Price>("-3").is_err());
    }

    #[test]
    fn orders_by_amount() {
        let cheap: Price = "32.95".parse().unwrap();
        let pricey: Price = "2299".parse().unwrap();
        assert!(cheap < pricey);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any whole/fraction pair survives display -> parse.
            #[test]
            fn display_parses_back(cents in 0i64..1_000_000_000) {
                let price = Price::from_cents(cents).unwrap();
                let reparsed: Price = price.to_string().parse().unwrap();
                prop_assert_eq!(reparsed, price);
            }

            /// Property: JSON numbers map to the same cents as the text form.
            #[test]
            fn json_number_matches_text(cents in 0i64..10_000_000) {
                let price = Price::from_cents(cents).unwrap();
                let json = serde_json::to_string(&price).unwrap();
                let back: Price = serde_json::from_str(&json).unwrap();
                prop_assert_eq!(back, price);
            }
        }
    }
}
