//! Stock quantity type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned for a stock quantity outside `0..=i32::MAX`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("stock quantity must be between 0 and {max}, got {value}", max = i32::MAX)]
pub struct StockError {
    value: i64,
}

/// Units of a product on hand. Never negative.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i32")]
pub struct StockQuantity(i32);

impl StockQuantity {
    /// Create a validated stock quantity.
    ///
    /// # Errors
    ///
    /// Returns `StockError` if the value is negative or does not fit the
    /// `INTEGER` storage column.
    pub fn new(value: i64) -> Result<Self, StockError> {
        i32::try_from(value)
            .ok()
            .filter(|v| *v >= 0)
            .map(Self)
            .ok_or(StockError { value })
    }

    /// Returns the quantity as stored.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for StockQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for StockQuantity {
    type Error = StockError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StockQuantity> for i32 {
    fn from(quantity: StockQuantity) -> Self {
        quantity.0
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for StockQuantity {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <i32 as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <i32 as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for StockQuantity {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <i32 as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self::new(i64::from(raw))?)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for StockQuantity {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i32 as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(StockQuantity::new(0).unwrap().get(), 0);
        assert_eq!(StockQuantity::new(10).unwrap().get(), 10);
        assert!(StockQuantity::new(i64::from(i32::MAX)).is_ok());
        assert!(StockQuantity::new(-1).is_err());
        assert!(StockQuantity::new(i64::from(i32::MAX) + 1).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = StockQuantity::new(-3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "stock quantity must be between 0 and 2147483647, got -3"
        );
    }

    #[test]
    fn test_serde() {
        let qty: StockQuantity = serde_json::from_str("25").unwrap();
        assert_eq!(serde_json::to_string(&qty).unwrap(), "25");
        assert!(serde_json::from_str::<StockQuantity>("-1").is_err());
        assert!(serde_json::from_str::<StockQuantity>("2.5").is_err());
    }
}
