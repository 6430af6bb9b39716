//! Currency codes.
//!
//! Monetary values are stored as an `i64` number of **minor units** next to a
//! three-letter currency code. The engine does not keep a closed list of
//! currencies; any ISO-style three-letter code is accepted and normalized to
//! uppercase before it reaches the database.

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// A validated, uppercase three-letter currency code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency([u8; 3]);

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub fn code(&self) -> &str {
        // Constructors only accept ASCII letters.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        let bytes = trimmed.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(|b| b.is_ascii_alphabetic()) {
            return Err(EngineError::Validation(format!(
                "currency must be a 3-letter code, got \"{trimmed}\""
            )));
        }
        let mut code = [0u8; 3];
        for (slot, b) in code.iter_mut().zip(bytes) {
            *slot = b.to_ascii_uppercase();
        }
        Ok(Currency(code))
    }
}

impl TryFrom<String> for Currency {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Currency::try_from(value.as_str())
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_is_normalized() {
        let currency = Currency::try_from("usd").unwrap();
        assert_eq!(currency.code(), "USD");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let currency = Currency::try_from(" eur ").unwrap();
        assert_eq!(currency.code(), "EUR");
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(Currency::try_from("EU").is_err());
        assert!(Currency::try_from("EURO").is_err());
        assert!(Currency::try_from("").is_err());
    }

    #[test]
    fn non_alphabetic_is_rejected() {
        assert!(Currency::try_from("E1R").is_err());
        assert!(Currency::try_from("€€€").is_err());
    }
}
