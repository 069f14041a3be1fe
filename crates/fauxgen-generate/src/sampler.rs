//! Sampling for fields whose template alone cannot hold the constraint.

use fauxgen_core::{Error, NumericRange, Result};
use rand::{Rng, RngCore};

use crate::template::random_digit;

pub use fauxgen_locale::validate::ZIP_WIDTH;

/// Digits in a subscriber number when no length is given.
pub const DEFAULT_SUBSCRIBER_LENGTH: usize = 4;

/// Longest subscriber number the catalog accepts.
pub const MAX_SUBSCRIBER_LENGTH: usize = 64;

/// SSN area numbers issued by policy: 666 and 900-999 are never assigned.
pub const SSN_AREA_RANGES: &[(u32, u32)] = &[(1, 665), (667, 899)];

/// Exactly `len` uniformly random digits.
pub fn numeric_string(len: usize, rng: &mut dyn RngCore) -> String {
    (0..len).map(|_| random_digit(rng)).collect()
}

/// Parse the range candidates stored under `key`.
pub fn parse_ranges(key: &str, candidates: &[String], width: usize) -> Result<Vec<NumericRange>> {
    candidates
        .iter()
        .map(|raw| {
            NumericRange::parse(raw, width)
                .map_err(|err| Error::InvalidLocaleData(format!("{key}: {err}")))
        })
        .collect()
}

/// Pick one range uniformly, then a value uniformly inside it.
pub fn sample_ranges(ranges: &[NumericRange], rng: &mut dyn RngCore) -> Option<String> {
    if ranges.is_empty() {
        return None;
    }
    let range = ranges[rng.random_range(0..ranges.len())];
    let value = rng.random_range(range.low..=range.high);
    Some(range.render(value))
}

/// SSN that avoids every reserved pattern by construction.
pub fn ssn_valid(rng: &mut dyn RngCore) -> String {
    let (low, high) = SSN_AREA_RANGES[rng.random_range(0..SSN_AREA_RANGES.len())];
    let area = rng.random_range(low..=high);
    let group = rng.random_range(1..=99_u32);
    let serial = rng.random_range(1..=9999_u32);
    format!("{area:03}-{group:02}-{serial:04}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn numeric_string_has_exact_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for len in [0, 1, 4, 10, 32] {
            let value = numeric_string(len, &mut rng);
            assert_eq!(value.len(), len);
            assert!(value.chars().all(|ch| ch.is_ascii_digit()));
        }
    }

    #[test]
    fn samples_stay_inside_disjoint_ranges() {
        let candidates = vec!["02601-02652".to_string(), "02660-02699".to_string()];
        let ranges = parse_ranges("address.zip_ranges.MA", &candidates, ZIP_WIDTH).expect("ranges");
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..500 {
            let value = sample_ranges(&ranges, &mut rng).expect("sample");
            assert_eq!(value.len(), ZIP_WIDTH);
            assert!(value.starts_with('0'));
            let number: u32 = value.parse().expect("numeric");
            assert!(ranges.iter().any(|range| range.contains(number)), "{value}");
            assert!(!(2653..2660).contains(&number));
        }
        assert!(sample_ranges(&[], &mut rng).is_none());
    }

    #[test]
    fn malformed_range_names_the_key() {
        let candidates = vec!["abc".to_string()];
        match parse_ranges("address.zip_ranges.ZZ", &candidates, ZIP_WIDTH) {
            Err(Error::InvalidLocaleData(message)) => {
                assert!(message.contains("address.zip_ranges.ZZ"))
            }
            other => panic!("expected invalid data, got {other:?}"),
        }
    }

    #[test]
    fn ssn_segments_follow_issuing_policy() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..1000 {
            let ssn = ssn_valid(&mut rng);
            let parts: Vec<u32> = ssn.split('-').map(|part| part.parse().expect("digits")).collect();
            assert_eq!(parts.len(), 3);
            assert!((1..=899).contains(&parts[0]) && parts[0] != 666);
            assert!((1..=99).contains(&parts[1]));
            assert!((1..=9999).contains(&parts[2]));
        }
    }
}
