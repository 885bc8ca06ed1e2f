//! Bhava (house) derivation and classical house groupings.
//!
//! Houses are whole-sign relative to the ascendant: house 1 covers the
//! ascendant's sign, house 2 the next sign, and so on. The Kendra, Trikona,
//! Dusthana, and Upachaya groups carry fixed strength connotations used by
//! the analysis engines.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Kendra (angular) houses: 1, 4, 7, 10.
pub const KENDRA_HOUSES: [u8; 4] = [1, 4, 7, 10];

/// Trikona (trinal) houses: 1, 5, 9.
pub const TRIKONA_HOUSES: [u8; 3] = [1, 5, 9];

/// Dusthana (challenging) houses: 6, 8, 12.
pub const DUSTHANA_HOUSES: [u8; 3] = [6, 8, 12];

/// Upachaya (growth) houses: 3, 6, 10, 11.
pub const UPACHAYA_HOUSES: [u8; 4] = [3, 6, 10, 11];

/// Primary house group classification.
///
/// Mutually exclusive and exhaustive over houses 1-12, resolved in priority
/// order Kendra > Trikona > Dusthana > Other: house 1 classifies as Kendra,
/// houses 5 and 9 as Trikona, 6/8/12 as Dusthana, the rest as Other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BhavaGroup {
    Kendra,
    Trikona,
    Dusthana,
    Other,
}

/// Classify a house 1-12 into its primary group.
pub const fn bhava_group(house: u8) -> BhavaGroup {
    match house {
        1 | 4 | 7 | 10 => BhavaGroup::Kendra,
        5 | 9 => BhavaGroup::Trikona,
        6 | 8 | 12 => BhavaGroup::Dusthana,
        _ => BhavaGroup::Other,
    }
}

/// True if the house is a Kendra (1, 4, 7, 10).
pub const fn is_kendra(house: u8) -> bool {
    matches!(house, 1 | 4 | 7 | 10)
}

/// True if the house is a Trikona (1, 5, 9).
pub const fn is_trikona(house: u8) -> bool {
    matches!(house, 1 | 5 | 9)
}

/// True if the house is a Dusthana (6, 8, 12).
pub const fn is_dusthana(house: u8) -> bool {
    matches!(house, 6 | 8 | 12)
}

/// True if the house is an Upachaya (3, 6, 10, 11).
pub const fn is_upachaya(house: u8) -> bool {
    matches!(house, 3 | 6 | 10 | 11)
}

/// Whole-sign house (1-12) of a longitude relative to the ascendant.
pub fn house_from_longitude(longitude: f64, ascendant_longitude: f64) -> u8 {
    let diff = normalize_360(longitude - ascendant_longitude);
    (diff / 30.0).floor() as u8 % 12 + 1
}

/// House reached by counting `offset` houses from `house`, both 1-based.
///
/// `nth_house_from(h, 1)` = h (same house), `nth_house_from(h, 7)` = the
/// opposite house.
pub fn nth_house_from(house: u8, offset: u8) -> u8 {
    (house as u16 + offset as u16 - 2) as u8 % 12 + 1
}

/// Classical significations of a house.
pub const fn house_significations(house: u8) -> &'static [&'static str] {
    match house {
        1 => &["personality", "health", "appearance", "vitality", "self"],
        2 => &["wealth", "family", "speech", "food", "values"],
        3 => &["courage", "siblings", "communication", "short journeys", "efforts"],
        4 => &["mother", "home", "property", "education", "emotional foundation"],
        5 => &["children", "creativity", "intelligence", "romance", "speculation"],
        6 => &["enemies", "disease", "service", "debt", "competition"],
        7 => &["marriage", "partnerships", "business", "spouse", "public image"],
        8 => &["longevity", "transformation", "occult", "inheritance", "sudden events"],
        9 => &["fortune", "father", "dharma", "higher education", "spirituality"],
        10 => &["career", "reputation", "authority", "profession", "public life"],
        11 => &["gains", "friends", "desires", "income", "elder siblings"],
        12 => &["loss", "liberation", "foreign lands", "spirituality", "expenses"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_exhaustive_and_exclusive() {
        // Every house 1-12 lands in exactly one primary group.
        let mut counts = [0usize; 4];
        for house in 1..=12u8 {
            match bhava_group(house) {
                BhavaGroup::Kendra => counts[0] += 1,
                BhavaGroup::Trikona => counts[1] += 1,
                BhavaGroup::Dusthana => counts[2] += 1,
                BhavaGroup::Other => counts[3] += 1,
            }
        }
        assert_eq!(counts, [4, 2, 3, 3]);
    }

    #[test]
    fn house_1_is_kendra_and_trikona() {
        // House 1 belongs to both sets; primary classification picks Kendra.
        assert!(is_kendra(1));
        assert!(is_trikona(1));
        assert_eq!(bhava_group(1), BhavaGroup::Kendra);
    }

    #[test]
    fn dusthana_membership() {
        for h in DUSTHANA_HOUSES {
            assert!(is_dusthana(h));
            assert_eq!(bhava_group(h), BhavaGroup::Dusthana);
        }
        assert!(!is_dusthana(7));
    }

    #[test]
    fn upachaya_membership() {
        for h in UPACHAYA_HOUSES {
            assert!(is_upachaya(h));
        }
        assert!(!is_upachaya(1));
    }

    #[test]
    fn house_from_longitude_same_sign() {
        // Planet 5 deg ahead of ascendant is in house 1
        assert_eq!(house_from_longitude(15.0, 10.0), 1);
    }

    #[test]
    fn house_from_longitude_opposition() {
        assert_eq!(house_from_longitude(190.0, 10.0), 7);
    }

    #[test]
    fn house_from_longitude_wraparound() {
        // Ascendant at 350, planet at 10: 20 deg ahead -> house 1
        assert_eq!(house_from_longitude(10.0, 350.0), 1);
        // Planet at 345, just behind the ascendant: house 12
        assert_eq!(house_from_longitude(345.0, 350.0), 12);
    }

    #[test]
    fn house_from_longitude_all_twelve() {
        for h in 0..12u8 {
            let lon = 10.0 + h as f64 * 30.0;
            assert_eq!(house_from_longitude(lon, 10.0), h + 1);
        }
    }

    #[test]
    fn nth_house_identity_and_wrap() {
        assert_eq!(nth_house_from(3, 1), 3);
        assert_eq!(nth_house_from(3, 7), 9);
        assert_eq!(nth_house_from(10, 5), 2);
        assert_eq!(nth_house_from(12, 12), 11);
    }

    #[test]
    fn significations_present_for_all_houses() {
        for h in 1..=12u8 {
            assert!(!house_significations(h).is_empty(), "house {h}");
        }
        assert!(house_significations(0).is_empty());
        assert!(house_significations(13).is_empty());
    }
}
