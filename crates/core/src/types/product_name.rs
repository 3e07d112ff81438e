//! Product name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProductName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductNameError {
    /// The input is empty after trimming.
    #[error("product name cannot be empty")]
    Empty,
    /// The input is longer than the maximum.
    #[error("product name must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length in characters.
        max: usize,
    },
}

/// Display name of a product. Trimmed, non-empty, at most 200 characters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ProductName(String);

impl ProductName {
    /// Maximum length in characters.
    pub const MAX_LENGTH: usize = 200;

    /// Parse a `ProductName` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or too long.
    pub fn parse(s: &str) -> Result<Self, ProductNameError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ProductNameError::Empty);
        }
        if s.chars().count() > Self::MAX_LENGTH {
            return Err(ProductNameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProductName {
    type Error = ProductNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ProductName> for String {
    fn from(name: ProductName) -> Self {
        name.0
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for ProductName {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for ProductName {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(ProductName::parse("  Widget ").unwrap().as_str(), "Widget");
        assert_eq!(ProductName::parse(" \t "), Err(ProductNameError::Empty));
        assert!(ProductName::parse(&"é".repeat(200)).is_ok());
        assert_eq!(
            ProductName::parse(&"x".repeat(201)),
            Err(ProductNameError::TooLong { max: 200 })
        );
    }
}
