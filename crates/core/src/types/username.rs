//! Username type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Username`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    /// The input is shorter than the minimum after trimming.
    #[error("username must be at least {min} characters")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// The input is longer than the maximum.
    #[error("username must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside the allowed set.
    #[error("username may only contain letters, digits, '_', '-' and '.' (found {0:?})")]
    InvalidCharacter(char),
}

/// A login name.
///
/// Usernames are unique per account (enforced by the store) and are the key
/// the credential lookup uses.
///
/// ## Constraints
///
/// - Surrounding whitespace is trimmed
/// - Length: 3-50 characters
/// - ASCII letters, digits, `_`, `-` and `.` only
///
/// ## Examples
///
/// ```
/// use pemplat_core::Username;
///
/// assert_eq!(Username::parse("  alice ").unwrap().as_str(), "alice");
/// assert!(Username::parse("al").is_err());
/// assert!(Username::parse("alice smith").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Minimum length of a username.
    pub const MIN_LENGTH: usize = 3;
    /// Maximum length of a username.
    pub const MAX_LENGTH: usize = 50;

    /// Parse a `Username` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is too short, too long, or
    /// contains a character outside the allowed set.
    pub fn parse(s: &str) -> Result<Self, UsernameError> {
        let s = s.trim();

        if s.len() < Self::MIN_LENGTH {
            return Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(c) = s
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')))
        {
            return Err(UsernameError::InvalidCharacter(c));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Username` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Username {
    type Err = UsernameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Username {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Username {
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
    fn test_parse_valid() {
        assert!(Username::parse("bob").is_ok());
        assert!(Username::parse("jane.doe-99").is_ok());
        assert!(Username::parse("under_score").is_ok());
        assert!(Username::parse(&"x".repeat(50)).is_ok());
    }

    #[test]
    fn test_parse_trims() {
        assert_eq!(Username::parse("\tcarol\n").unwrap().as_str(), "carol");
    }

    #[test]
    fn test_parse_too_short() {
        assert_eq!(
            Username::parse("  ab  "),
            Err(UsernameError::TooShort { min: 3 })
        );
        assert!(Username::parse("").is_err());
    }

    #[test]
    fn test_parse_too_long() {
        assert_eq!(
            Username::parse(&"x".repeat(51)),
            Err(UsernameError::TooLong { max: 50 })
        );
    }

    #[test]
    fn test_parse_invalid_character() {
        assert_eq!(
            Username::parse("drop;table"),
            Err(UsernameError::InvalidCharacter(';'))
        );
        assert!(Username::parse("zoë-user").is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Username = serde_json::from_str("\"dave\"").unwrap();
        assert_eq!(ok.as_str(), "dave");
        assert!(serde_json::from_str::<Username>("\"a b\"").is_err());
    }
}
