//! Customer records and derived identity.

use std::collections::HashMap;
use std::fmt;

/// A synthetic storefront customer.
///
/// Identity is derived from the three fields below: two customers with
/// the same names and phone number are the same person, no matter how
/// or when they were produced. Distinct people who happen to share all
/// three fields collapse into one entity; acceptable for a simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl Customer {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// The identity key for this customer.
    pub fn id(&self) -> CustomerId {
        CustomerId {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone_number: self.phone_number.clone(),
        }
    }
}

/// Human-readable form: "First Last (phone)".
impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.first_name, self.last_name, self.phone_number
        )
    }
}

/// Identity key over the full customer record. Equality and hashing
/// cover all three fields, so lookups never depend on any string
/// encoding of the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomerId {
    first_name: String,
    last_name: String,
    phone_number: String,
}

/// Keyed customer registry; one entry per distinct identity.
pub type CustomerMap = HashMap<CustomerId, Customer>;
