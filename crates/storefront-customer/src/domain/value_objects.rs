//! Value objects for the Customer context.

use std::fmt;

use serde::{Deserialize, Serialize};
use storefront_core::error::DomainError;

/// A postal address. Immutable; change a customer's address by replacing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl Address {
    /// Creates a validated address.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if any text field is blank or
    /// `number` is zero.
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.street.trim().is_empty() {
            return Err(DomainError::Validation("street is required".into()));
        }
        if self.number == 0 {
            return Err(DomainError::Validation(
                "number must be greater than zero".into(),
            ));
        }
        if self.zip.trim().is_empty() {
            return Err(DomainError::Validation("zip is required".into()));
        }
        if self.city.trim().is_empty() {
            return Err(DomainError::Validation("city is required".into()));
        }
        Ok(())
    }

    /// Street name.
    #[must_use]
    pub fn street(&self) -> &str {
        &self.street
    }

    /// Street number.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Postal code.
    #[must_use]
    pub fn zip(&self) -> &str {
        &self.zip
    }

    /// City.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}
