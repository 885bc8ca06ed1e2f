//! Rashi (zodiac sign) identification from sidereal longitude.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 deg. Longitude is the single source of truth:
//! sign index and degrees-within-sign are always re-derived from it.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// The 12 rashis (zodiac signs) starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Rashi {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 rashis in order (0 = Aries, 11 = Pisces).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Aries,
    Rashi::Taurus,
    Rashi::Gemini,
    Rashi::Cancer,
    Rashi::Leo,
    Rashi::Virgo,
    Rashi::Libra,
    Rashi::Scorpio,
    Rashi::Sagittarius,
    Rashi::Capricorn,
    Rashi::Aquarius,
    Rashi::Pisces,
];

/// Rashi element classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RashiElement {
    Fire,
    Earth,
    Air,
    Water,
}

/// Rashi quality (modality) classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RashiQuality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Rashi {
    /// Western (English) name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Sanskrit name of the rashi.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Aries => "Mesha",
            Self::Taurus => "Vrishabha",
            Self::Gemini => "Mithuna",
            Self::Cancer => "Karka",
            Self::Leo => "Simha",
            Self::Virgo => "Kanya",
            Self::Libra => "Tula",
            Self::Scorpio => "Vrischika",
            Self::Sagittarius => "Dhanu",
            Self::Capricorn => "Makara",
            Self::Aquarius => "Kumbha",
            Self::Pisces => "Meena",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Element: Fire 0,4,8 / Earth 1,5,9 / Air 2,6,10 / Water 3,7,11.
    pub const fn element(self) -> RashiElement {
        match self.index() % 4 {
            0 => RashiElement::Fire,
            1 => RashiElement::Earth,
            2 => RashiElement::Air,
            _ => RashiElement::Water,
        }
    }

    /// Quality: Cardinal 0,3,6,9 / Fixed 1,4,7,10 / Mutable 2,5,8,11.
    pub const fn quality(self) -> RashiQuality {
        match self.index() % 3 {
            0 => RashiQuality::Cardinal,
            1 => RashiQuality::Fixed,
            _ => RashiQuality::Mutable,
        }
    }

    /// Ruling graha of this rashi.
    pub const fn lord(self) -> crate::graha::Graha {
        crate::graha::rashi_lord(self)
    }

    /// Rashi by 0-based index. Returns None if index >= 12.
    pub fn from_index(index: u8) -> Option<Rashi> {
        ALL_RASHIS.get(index as usize).copied()
    }

    /// Resolve a rashi from a name, case-insensitive.
    ///
    /// Accepts both western and Sanskrit names. Returns `None` for unknown
    /// names; callers apply the documented neutral default.
    pub fn from_name(name: &str) -> Option<Rashi> {
        let lower = name.trim().to_ascii_lowercase();
        ALL_RASHIS.into_iter().find(|r| {
            r.name().eq_ignore_ascii_case(&lower) || r.sanskrit_name().eq_ignore_ascii_case(&lower)
        })
    }
}

impl std::fmt::Display for Rashi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for Rashi {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rashi::from_name(&value).ok_or_else(|| format!("unknown rashi name: {value}"))
    }
}

impl From<Rashi> for String {
    fn from(r: Rashi) -> String {
        r.name().to_owned()
    }
}

/// Full rashi position derived from a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Aries).
    pub rashi_index: u8,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Each rashi spans exactly 30 degrees: Aries = [0, 30), Taurus = [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let rashi_index = ((lon / 30.0).floor() as u8).min(11);
    let degrees_in_rashi = lon - (rashi_index as f64) * 30.0;
    RashiInfo {
        rashi: ALL_RASHIS[rashi_index as usize],
        rashi_index,
        degrees_in_rashi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rashis_count() {
        assert_eq!(ALL_RASHIS.len(), 12);
    }

    #[test]
    fn rashi_indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
        }
    }

    #[test]
    fn rashi_all_boundaries() {
        for i in 0..12u8 {
            let info = rashi_from_longitude(i as f64 * 30.0);
            assert_eq!(info.rashi_index, i, "boundary at {} deg", i as f64 * 30.0);
            assert!(info.degrees_in_rashi.abs() < 1e-10);
        }
    }

    #[test]
    fn rashi_mid_sign() {
        let info = rashi_from_longitude(45.5);
        assert_eq!(info.rashi, Rashi::Taurus);
        assert!((info.degrees_in_rashi - 15.5).abs() < 1e-10);
    }

    #[test]
    fn rashi_wrap_around() {
        let info = rashi_from_longitude(365.0);
        assert_eq!(info.rashi, Rashi::Aries);
        assert!((info.degrees_in_rashi - 5.0).abs() < 1e-10);
    }

    #[test]
    fn rashi_negative() {
        let info = rashi_from_longitude(-10.0);
        assert_eq!(info.rashi, Rashi::Pisces); // 350 deg
        assert!((info.degrees_in_rashi - 20.0).abs() < 1e-10);
    }

    #[test]
    fn elements_cycle() {
        assert_eq!(Rashi::Aries.element(), RashiElement::Fire);
        assert_eq!(Rashi::Taurus.element(), RashiElement::Earth);
        assert_eq!(Rashi::Gemini.element(), RashiElement::Air);
        assert_eq!(Rashi::Cancer.element(), RashiElement::Water);
        assert_eq!(Rashi::Leo.element(), RashiElement::Fire);
        assert_eq!(Rashi::Pisces.element(), RashiElement::Water);
    }

    #[test]
    fn qualities_cycle() {
        assert_eq!(Rashi::Aries.quality(), RashiQuality::Cardinal);
        assert_eq!(Rashi::Taurus.quality(), RashiQuality::Fixed);
        assert_eq!(Rashi::Gemini.quality(), RashiQuality::Mutable);
        assert_eq!(Rashi::Capricorn.quality(), RashiQuality::Cardinal);
    }

    #[test]
    fn from_name_both_conventions() {
        assert_eq!(Rashi::from_name("pisces"), Some(Rashi::Pisces));
        assert_eq!(Rashi::from_name("Meena"), Some(Rashi::Pisces));
        assert_eq!(Rashi::from_name("SAGITTARIUS"), Some(Rashi::Sagittarius));
        assert_eq!(Rashi::from_name("Ophiuchus"), None);
    }

    #[test]
    fn from_index_bounds() {
        assert_eq!(Rashi::from_index(0), Some(Rashi::Aries));
        assert_eq!(Rashi::from_index(11), Some(Rashi::Pisces));
        assert_eq!(Rashi::from_index(12), None);
    }

    #[test]
    fn serde_accepts_sanskrit() {
        let r: Rashi = serde_json::from_str("\"Dhanu\"").unwrap();
        assert_eq!(r, Rashi::Sagittarius);
        assert_eq!(serde_json::to_string(&r).unwrap(), "\"Sagittarius\"");
    }
}
