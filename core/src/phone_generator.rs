//! Deterministic phone number generation for North American regions.
//!
//! Numbers are plain digit strings built from three components: a
//! 3-digit area code drawn from the region's pool, a 3-digit exchange
//! code whose first digit is 2-9, and a 4-digit subscriber number.
//! The country code prefix is optional. All generation is deterministic
//! (same RNG seed = same numbers).

use crate::rng::StreamRng;
use serde::{Deserialize, Serialize};

/// Phone number region. Both regions share country code 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    #[default]
    Canada,
    UnitedStates,
}

impl Region {
    pub fn country_code(&self) -> &'static str {
        "1"
    }

    /// Area codes in service for this region
    fn area_codes(&self) -> &'static [&'static str] {
        match self {
            Self::Canada => &[
                "204", "236", "249", "250", "289", "306", "343", "403", "416", "418",
                "431", "437", "438", "450", "506", "514", "519", "548", "579", "581",
                "587", "604", "613", "639", "647", "705", "709", "778", "780", "782",
                "807", "819", "825", "867", "873", "902", "905",
            ],
            Self::UnitedStates => &[
                "206", "212", "213", "303", "305", "312", "404", "415", "469", "512",
                "602", "617", "702", "713", "718", "720", "786", "818", "832", "917",
            ],
        }
    }
}

/// Deterministic phone number generator
pub struct PhoneNumberGenerator;

impl PhoneNumberGenerator {
    /// Generate a phone number for the region, digits only.
    /// With `without_country_code` the result is the 10-digit local
    /// number; otherwise the country code is prepended.
    pub fn generate(rng: &mut StreamRng, region: Region, without_country_code: bool) -> String {
        let area_codes = region.area_codes();
        let area_code = area_codes[rng.next_u64_below(area_codes.len() as u64) as usize];

        // Exchange codes never start with 0 or 1.
        let exchange_lead = 2 + rng.next_u64_below(8);
        let exchange_rest = rng.next_u64_below(100);
        let subscriber = rng.next_u64_below(10_000);

        let local = format!("{area_code}{exchange_lead}{exchange_rest:02}{subscriber:04}");
        if without_country_code {
            local
        } else {
            format!("{}{local}", region.country_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{RngBank, StreamSlot};

    fn test_rng(seed: u64) -> StreamRng {
        RngBank::new(seed).for_stream(StreamSlot::Phone)
    }

    #[test]
    fn local_numbers_are_ten_digits() {
        let mut rng = test_rng(12345);
        for _ in 0..100 {
            let number = PhoneNumberGenerator::generate(&mut rng, Region::Canada, true);
            assert_eq!(number.len(), 10, "Local number should be 10 digits: {}", number);
            assert!(
                number.chars().all(|c| c.is_ascii_digit()),
                "Number should be digits only: {}",
                number
            );
        }
    }

    #[test]
    fn full_numbers_carry_the_country_code() {
        let mut rng = test_rng(12345);
        for _ in 0..100 {
            let number = PhoneNumberGenerator::generate(&mut rng, Region::Canada, false);
            assert_eq!(number.len(), 11, "Full number should be 11 digits: {}", number);
            assert!(number.starts_with('1'), "Country code should be 1: {}", number);
        }
    }

    #[test]
    fn exchange_codes_never_start_with_0_or_1() {
        let mut rng = test_rng(9);
        for _ in 0..200 {
            let number = PhoneNumberGenerator::generate(&mut rng, Region::UnitedStates, true);
            let lead = number.as_bytes()[3] - b'0';
            assert!((2..=9).contains(&lead), "Exchange lead digit out of range: {}", number);
        }
    }

    #[test]
    fn area_codes_come_from_the_region_pool() {
        let mut rng = test_rng(42);
        for _ in 0..100 {
            let number = PhoneNumberGenerator::generate(&mut rng, Region::Canada, true);
            let area_code = &number[0..3];
            assert!(
                Region::Canada.area_codes().contains(&area_code),
                "Area code should come from the Canada pool: {}",
                number
            );
        }
    }

    #[test]
    fn phone_generation_is_deterministic() {
        let mut rng1 = test_rng(777);
        let mut rng2 = test_rng(777);
        for _ in 0..20 {
            assert_eq!(
                PhoneNumberGenerator::generate(&mut rng1, Region::Canada, true),
                PhoneNumberGenerator::generate(&mut rng2, Region::Canada, true),
                "Same seed should produce same numbers"
            );
        }
    }
}
