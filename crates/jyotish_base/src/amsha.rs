//! Amsha (divisional chart) longitude mappings.
//!
//! Each amsha divides the 30-degree rashi span into N equal parts and maps
//! each part to a target rashi. Only the divisions the analysis consumes are
//! implemented: D9 (navamsa), D3 (drekkana), D7 (saptamsha).
//!
//! Clean-room implementation from BPHS Shodashavarga definitions.

use serde::{Deserialize, Serialize};

use crate::rashi::{Rashi, RashiElement, RashiInfo, rashi_from_longitude};
use crate::util::normalize_360;

/// Supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Amsha {
    D1,
    D3,
    D7,
    D9,
}

impl Amsha {
    /// Number of divisions per rashi.
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D3 => 3,
            Self::D7 => 7,
            Self::D9 => 9,
        }
    }

    /// Division key as used in chart documents ("d9", "d3", ...).
    pub const fn key(self) -> &'static str {
        match self {
            Self::D1 => "d1",
            Self::D3 => "d3",
            Self::D7 => "d7",
            Self::D9 => "d9",
        }
    }

    /// Resolve from a chart-document key, case-insensitive.
    pub fn from_key(key: &str) -> Option<Amsha> {
        match key.trim().to_ascii_lowercase().as_str() {
            "d1" => Some(Self::D1),
            "d3" => Some(Self::D3),
            "d7" => Some(Self::D7),
            "d9" => Some(Self::D9),
            _ => None,
        }
    }
}

/// Target rashi index for a division of a natal rashi.
fn amsha_target_rashi(amsha: Amsha, natal_rashi_idx: u8, div_idx: u16) -> u8 {
    match amsha {
        Amsha::D1 => natal_rashi_idx,

        // D3: trine progression (+4 step)
        Amsha::D3 => {
            let start = natal_rashi_idx as u16;
            ((start + div_idx * 4) % 12) as u8
        }

        // D7: odd rashi starts from natal, even from the 7th
        Amsha::D7 => {
            // 0-indexed: 0,2,4.. are odd rashis (1-based 1,3,5..)
            let is_odd = natal_rashi_idx % 2 == 0;
            let start = if is_odd {
                natal_rashi_idx as u16
            } else {
                (natal_rashi_idx as u16 + 6) % 12
            };
            ((start + div_idx) % 12) as u8
        }

        // D9: element-keyed fixed starting rashi
        Amsha::D9 => {
            let start: u16 = match crate::rashi::ALL_RASHIS[natal_rashi_idx as usize].element() {
                RashiElement::Fire => 0,  // Aries
                RashiElement::Earth => 9, // Capricorn
                RashiElement::Air => 6,   // Libra
                RashiElement::Water => 3, // Cancer
            };
            ((start + div_idx) % 12) as u8
        }
    }
}

/// Transform a sidereal longitude through an amsha division.
///
/// Returns the amsha-chart longitude in [0, 360).
pub fn amsha_longitude(sidereal_lon: f64, amsha: Amsha) -> f64 {
    let lon = normalize_360(sidereal_lon);
    if amsha == Amsha::D1 {
        return lon;
    }
    let natal = rashi_from_longitude(lon);
    let n = amsha.divisions() as f64;
    let span = 30.0 / n;
    let div_idx = ((natal.degrees_in_rashi / span).floor() as u16).min(amsha.divisions() - 1);
    let target = amsha_target_rashi(amsha, natal.rashi_index, div_idx);
    // Position within the division scales back up to a full sign
    let frac = (natal.degrees_in_rashi - div_idx as f64 * span) / span;
    target as f64 * 30.0 + frac * 30.0
}

/// Rashi occupied in an amsha chart.
pub fn amsha_rashi(sidereal_lon: f64, amsha: Amsha) -> RashiInfo {
    rashi_from_longitude(amsha_longitude(sidereal_lon, amsha))
}

/// Navamsa (D9) sign of a longitude.
pub fn navamsa_rashi(sidereal_lon: f64) -> Rashi {
    amsha_rashi(sidereal_lon, Amsha::D9).rashi
}

/// Vargottama: same sign in D1 and D9 strengthens the placement.
pub fn is_vargottama(sidereal_lon: f64) -> bool {
    rashi_from_longitude(sidereal_lon).rashi == navamsa_rashi(sidereal_lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d1_identity() {
        assert!((amsha_longitude(123.456, Amsha::D1) - 123.456).abs() < 1e-10);
    }

    #[test]
    fn navamsa_of_zero_aries_is_aries() {
        // First navamsa of a fire sign starts at Aries
        assert_eq!(navamsa_rashi(0.0), Rashi::Aries);
    }

    #[test]
    fn navamsa_element_starts() {
        // First navamsa division of each element's first sign
        assert_eq!(navamsa_rashi(0.0), Rashi::Aries); // Fire -> Aries
        assert_eq!(navamsa_rashi(30.0), Rashi::Capricorn); // Earth -> Capricorn
        assert_eq!(navamsa_rashi(60.0), Rashi::Libra); // Air -> Libra
        assert_eq!(navamsa_rashi(90.0), Rashi::Cancer); // Water -> Cancer
    }

    #[test]
    fn navamsa_progression_within_sign() {
        // Each 3°20' step advances one sign
        assert_eq!(navamsa_rashi(0.0), Rashi::Aries);
        assert_eq!(navamsa_rashi(3.5), Rashi::Taurus);
        assert_eq!(navamsa_rashi(7.0), Rashi::Gemini);
        // Last navamsa of Aries (26°40'-30°) is Sagittarius
        assert_eq!(navamsa_rashi(28.0), Rashi::Sagittarius);
    }

    #[test]
    fn vargottama_first_navamsa_of_aries() {
        // 0-3°20' Aries maps to Aries navamsa: vargottama
        assert!(is_vargottama(1.0));
        assert!(!is_vargottama(5.0));
    }

    #[test]
    fn d3_trine_progression() {
        // Decanates of Aries: Aries, Leo, Sagittarius
        assert_eq!(amsha_rashi(5.0, Amsha::D3).rashi, Rashi::Aries);
        assert_eq!(amsha_rashi(15.0, Amsha::D3).rashi, Rashi::Leo);
        assert_eq!(amsha_rashi(25.0, Amsha::D3).rashi, Rashi::Sagittarius);
    }

    #[test]
    fn d7_odd_starts_from_natal() {
        // First saptamsha of Aries (odd sign) is Aries
        assert_eq!(amsha_rashi(1.0, Amsha::D7).rashi, Rashi::Aries);
    }

    #[test]
    fn d7_even_starts_from_seventh() {
        // First saptamsha of Taurus (even sign) starts from Scorpio
        assert_eq!(amsha_rashi(31.0, Amsha::D7).rashi, Rashi::Scorpio);
    }

    #[test]
    fn amsha_longitude_in_range() {
        for amsha in [Amsha::D3, Amsha::D7, Amsha::D9] {
            for i in 0..72 {
                let lon = i as f64 * 5.0;
                let out = amsha_longitude(lon, amsha);
                assert!((0.0..360.0).contains(&out), "{amsha:?} at {lon}: {out}");
            }
        }
    }

    #[test]
    fn from_key_round_trip() {
        for amsha in [Amsha::D1, Amsha::D3, Amsha::D7, Amsha::D9] {
            assert_eq!(Amsha::from_key(amsha.key()), Some(amsha));
        }
        assert_eq!(Amsha::from_key("D9"), Some(Amsha::D9));
        assert_eq!(Amsha::from_key("d60"), None);
    }
}
