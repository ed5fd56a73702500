//! Synthetic customer generation.

use crate::customer::Customer;
use crate::error::{SimError, SimResult};
use crate::name_generator::NameGenerator;
use crate::phone_generator::{PhoneNumberGenerator, Region};
use crate::rng::{RngBank, StreamRng, StreamSlot};

/// Produces synthetic customers from the name and phone collaborators.
///
/// Uniqueness is never enforced here; colliding identities are the
/// registration ledger's concern.
pub struct CustomerGenerator {
    region: Region,
    name_rng: StreamRng,
    phone_rng: StreamRng,
}

impl CustomerGenerator {
    pub fn new(bank: &RngBank, region: Region) -> Self {
        Self {
            region,
            name_rng: bank.for_stream(StreamSlot::Name),
            phone_rng: bank.for_stream(StreamSlot::Phone),
        }
    }

    /// Create exactly `count` customers. First and last names are
    /// independent dictionary draws; phone numbers are regional local
    /// numbers without the country code.
    pub fn create_customers(&mut self, count: usize) -> Vec<Customer> {
        let mut customers = Vec::with_capacity(count);
        for _ in 0..count {
            let first_name = NameGenerator::generate_name(&mut self.name_rng);
            let last_name = NameGenerator::generate_name(&mut self.name_rng);
            let phone_number =
                PhoneNumberGenerator::generate(&mut self.phone_rng, self.region, true);
            customers.push(Customer::new(first_name, last_name, phone_number));
        }
        customers
    }
}

/// Validate a raw customer count arriving from the shell boundary.
/// Only non-negative integers pass; fractional, negative, and
/// non-numeric input is rejected before it reaches the generator.
pub fn validate_count(raw: &str) -> SimResult<usize> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n as usize),
        _ => Err(SimError::InvalidCount {
            value: trimmed.to_string(),
        }),
    }
}
