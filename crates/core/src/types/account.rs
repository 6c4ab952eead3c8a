//! Customer account code type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`AccountCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountCodeError {
    /// The input string is empty or only whitespace.
    #[error("account code cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("account code must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `[A-Za-z0-9-]`.
    #[error("account code contains invalid character '{0}'")]
    InvalidCharacter(char),
}

/// A customer account code, e.g. `CORP-0042`.
///
/// ## Constraints
///
/// - Length: 1-16 characters after trimming
/// - ASCII letters, digits and `-` only
/// - Stored upper-case
///
/// ## Examples
///
/// ```
/// use parcelport_core::AccountCode;
///
/// let code = AccountCode::parse("corp-0042").unwrap();
/// assert_eq!(code.as_str(), "CORP-0042");
///
/// assert!(AccountCode::parse("").is_err());
/// assert!(AccountCode::parse("has space").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct AccountCode(String);

impl AccountCode {
    /// Maximum length of an account code.
    pub const MAX_LENGTH: usize = 16;

    /// Parse an `AccountCode` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty, longer than
    /// [`Self::MAX_LENGTH`], or contains characters other than ASCII
    /// alphanumerics and `-`.
    pub fn parse(s: &str) -> Result<Self, AccountCodeError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AccountCodeError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(AccountCodeError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(bad) = s.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '-') {
            return Err(AccountCodeError::InvalidCharacter(bad));
        }

        Ok(Self(s.to_ascii_uppercase()))
    }

    /// Returns the account code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for AccountCode {
    type Err = AccountCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AccountCode {
    type Error = AccountCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AccountCode> for String {
    fn from(code: AccountCode) -> Self {
        code.0
    }
}

impl AsRef<str> for AccountCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        let code = AccountCode::parse("  corp-7 ").unwrap();
        assert_eq!(code.as_str(), "CORP-7");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(AccountCode::parse("   "), Err(AccountCodeError::Empty));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "A".repeat(AccountCode::MAX_LENGTH + 1);
        assert!(matches!(
            AccountCode::parse(&long),
            Err(AccountCodeError::TooLong { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_character() {
        assert_eq!(
            AccountCode::parse("ab_cd"),
            Err(AccountCodeError::InvalidCharacter('_'))
        );
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let ok: AccountCode = serde_json::from_str("\"acme\"").unwrap();
        assert_eq!(ok.as_str(), "ACME");
        assert!(serde_json::from_str::<AccountCode>("\"a b\"").is_err());
    }
}
