//! Non-negative product price with cent precision.
//!
//! Prices are stored as `NUMERIC(12,2)`, so anything with more than two
//! fractional digits or more than ten integer digits is rejected up front
//! instead of being silently rounded by the database.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative")]
    Negative,
    /// The amount has more than two fractional digits.
    #[error("price must have at most {max} decimal places")]
    TooPrecise {
        /// Maximum number of fractional digits.
        max: u32,
    },
    /// The amount does not fit in the storage column.
    #[error("price must be less than {0}")]
    TooLarge(Decimal),
}

/// A product price.
///
/// Serializes as a JSON number (`9.99`). Deserializes from either a number or
/// a decimal string (`"9.99"`), validating the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Maximum number of fractional digits.
    pub const MAX_SCALE: u32 = 2;

    /// Exclusive upper bound (ten integer digits).
    pub const UPPER_BOUND: Decimal = Decimal::from_parts(1_410_065_408, 2, 0, false, 0);

    /// Create a validated price.
    ///
    /// Trailing zeros do not count towards the scale, so `1.500` is accepted
    /// and stored as `1.5`.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is negative, has more than two
    /// fractional digits, or is too large for the storage column.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        let amount = amount.normalize();

        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }

        if amount.scale() > Self::MAX_SCALE {
            return Err(PriceError::TooPrecise {
                max: Self::MAX_SCALE,
            });
        }

        if amount >= Self::UPPER_BOUND {
            return Err(PriceError::TooLarge(Self::UPPER_BOUND));
        }

        Ok(Self(amount))
    }

    /// Returns the price as a decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Price {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <Decimal as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <Decimal as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Price {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let amount = <Decimal as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self::new(amount)?)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <Decimal as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_bound_is_ten_digits() {
        assert_eq!(Price::UPPER_BOUND, Decimal::from(10_000_000_000_i64));
    }

    #[test]
    fn test_new_accepts_cents() {
        let price = Price::new(Decimal::new(999, 2)).unwrap();
        assert_eq!(price.amount(), Decimal::new(999, 2));
        assert_eq!(price.to_string(), "9.99");
        assert!(Price::new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_new_ignores_trailing_zeros() {
        let price = Price::new("1.500".parse().unwrap()).unwrap();
        assert_eq!(price.amount(), Decimal::new(15, 1));
    }

    #[test]
    fn test_new_rejects_negative() {
        assert_eq!(Price::new(Decimal::new(-1, 2)), Err(PriceError::Negative));
    }

    #[test]
    fn test_new_rejects_sub_cent() {
        assert_eq!(
            Price::new("9.999".parse().unwrap()),
            Err(PriceError::TooPrecise { max: 2 })
        );
    }

    #[test]
    fn test_new_rejects_too_large() {
        assert!(matches!(
            Price::new(Decimal::from(10_000_000_000_i64)),
            Err(PriceError::TooLarge(_))
        ));
        assert!(Price::new("9999999999.99".parse().unwrap()).is_ok());
    }

    #[test]
    fn test_serde_number_and_string_input() {
        let from_number: Price = serde_json::from_str("9.99").unwrap();
        let from_string: Price = serde_json::from_str("\"9.99\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(serde_json::to_string(&from_number).unwrap(), "9.99");
    }

    #[test]
    fn test_serde_rejects_negative() {
        assert!(serde_json::from_str::<Price>("-5").is_err());
    }
}
