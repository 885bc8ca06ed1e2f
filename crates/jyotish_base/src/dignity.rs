//! Dignity determination from the classical exaltation/debilitation tables.
//!
//! A graha's dignity is a pure function of its longitude and the static
//! per-planet tables: exaltation sign, debilitation sign, own sign(s), and
//! moolatrikona degree range. Rahu and Ketu have no entries and resolve to
//! the documented neutral default so downstream totals stay computable.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::rashi::{Rashi, rashi_from_longitude};

/// Dignity classification, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dignity {
    Exalted,
    Moolatrikona,
    OwnSign,
    Debilitated,
    Neutral,
}

/// Dignity plus its 0-100 placement strength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DignityInfo {
    pub dignity: Dignity,
    pub strength: f64,
}

/// Exaltation sign for sapta grahas. Returns None for Rahu/Ketu.
pub const fn exaltation_sign(graha: Graha) -> Option<Rashi> {
    match graha {
        Graha::Sun => Some(Rashi::Aries),
        Graha::Moon => Some(Rashi::Taurus),
        Graha::Mars => Some(Rashi::Capricorn),
        Graha::Mercury => Some(Rashi::Virgo),
        Graha::Jupiter => Some(Rashi::Cancer),
        Graha::Venus => Some(Rashi::Pisces),
        Graha::Saturn => Some(Rashi::Libra),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation sign = seventh from exaltation. Returns None for Rahu/Ketu.
pub const fn debilitation_sign(graha: Graha) -> Option<Rashi> {
    match graha {
        Graha::Sun => Some(Rashi::Libra),
        Graha::Moon => Some(Rashi::Scorpio),
        Graha::Mars => Some(Rashi::Cancer),
        Graha::Mercury => Some(Rashi::Pisces),
        Graha::Jupiter => Some(Rashi::Capricorn),
        Graha::Venus => Some(Rashi::Virgo),
        Graha::Saturn => Some(Rashi::Aries),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Own-sign rashis for sapta grahas. Empty for Rahu/Ketu.
pub const fn own_signs(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Sun => &[Rashi::Leo],
        Graha::Moon => &[Rashi::Cancer],
        Graha::Mars => &[Rashi::Aries, Rashi::Scorpio],
        Graha::Mercury => &[Rashi::Gemini, Rashi::Virgo],
        Graha::Jupiter => &[Rashi::Sagittarius, Rashi::Pisces],
        Graha::Venus => &[Rashi::Taurus, Rashi::Libra],
        Graha::Saturn => &[Rashi::Capricorn, Rashi::Aquarius],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

/// Moolatrikona range: (rashi, start_deg, end_deg) within the sign,
/// inclusive on both ends. Returns None for Rahu/Ketu.
pub const fn moolatrikona_range(graha: Graha) -> Option<(Rashi, f64, f64)> {
    match graha {
        Graha::Sun => Some((Rashi::Leo, 0.0, 20.0)),
        Graha::Moon => Some((Rashi::Taurus, 4.0, 20.0)),
        Graha::Mars => Some((Rashi::Aries, 0.0, 12.0)),
        Graha::Mercury => Some((Rashi::Virgo, 16.0, 20.0)),
        Graha::Jupiter => Some((Rashi::Sagittarius, 0.0, 10.0)),
        Graha::Venus => Some((Rashi::Libra, 0.0, 15.0)),
        Graha::Saturn => Some((Rashi::Aquarius, 0.0, 20.0)),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Placement strength (0-100) assigned to each dignity.
const fn dignity_strength(dignity: Dignity) -> f64 {
    match dignity {
        Dignity::Exalted => 100.0,
        Dignity::Moolatrikona => 90.0,
        Dignity::OwnSign => 85.0,
        Dignity::Debilitated => 25.0,
        Dignity::Neutral => 60.0,
    }
}

/// Neutral default for bodies outside the dignity tables (Rahu/Ketu).
pub const NODE_DEFAULT: DignityInfo = DignityInfo {
    dignity: Dignity::Neutral,
    strength: 50.0,
};

/// Dignity of a graha at a sidereal longitude.
///
/// Priority: exaltation > debilitation > moolatrikona > own sign > neutral.
/// Moolatrikona degree boundaries are inclusive on both ends.
pub fn dignity_from_longitude(graha: Graha, sidereal_lon: f64) -> DignityInfo {
    if !graha.is_sapta() {
        return NODE_DEFAULT;
    }
    let info = rashi_from_longitude(sidereal_lon);

    if exaltation_sign(graha) == Some(info.rashi) {
        return make(Dignity::Exalted);
    }
    if debilitation_sign(graha) == Some(info.rashi) {
        return make(Dignity::Debilitated);
    }
    if let Some((mt_rashi, start, end)) = moolatrikona_range(graha) {
        if mt_rashi == info.rashi && info.degrees_in_rashi >= start && info.degrees_in_rashi <= end
        {
            return make(Dignity::Moolatrikona);
        }
    }
    if own_signs(graha).contains(&info.rashi) {
        return make(Dignity::OwnSign);
    }
    make(Dignity::Neutral)
}

/// Sign-only dignity for queries without degree precision.
///
/// Moolatrikona cannot be distinguished without degrees, so a placement in
/// the moolatrikona sign that is neither exalted nor debilitated resolves to
/// own sign when applicable, else neutral.
pub fn dignity_in_sign(graha: Graha, rashi: Rashi) -> DignityInfo {
    if !graha.is_sapta() {
        return NODE_DEFAULT;
    }
    if exaltation_sign(graha) == Some(rashi) {
        return make(Dignity::Exalted);
    }
    if debilitation_sign(graha) == Some(rashi) {
        return make(Dignity::Debilitated);
    }
    if own_signs(graha).contains(&rashi) {
        return make(Dignity::OwnSign);
    }
    make(Dignity::Neutral)
}

/// True if the graha is debilitated at the longitude.
pub fn is_debilitated(graha: Graha, sidereal_lon: f64) -> bool {
    dignity_from_longitude(graha, sidereal_lon).dignity == Dignity::Debilitated
}

const fn make(dignity: Dignity) -> DignityInfo {
    DignityInfo {
        dignity,
        strength: dignity_strength(dignity),
    }
}
