//! Shad Bala (six-fold planetary strength) computation.
//!
//! **Sapta grahas only** (Sun through Saturn); requesting a node is a
//! per-planet error, as is a planet absent from the snapshot. Components
//! are summed in shashtiamsas (60ths of a rupa) and compared against the
//! per-planet required minimum.
//!
//! The six components:
//! 1. Sthana Bala (positional, dignity-derived)
//! 2. Dig Bala (directional)
//! 3. Kala Bala (temporal): nathonnatha + paksha + tribhaga + abda + masa
//!    + vara + hora + ayana
//! 4. Chesta Bala (motional)
//! 5. Naisargika Bala (natural)
//! 6. Drik Bala (aspectual)
//!
//! Clean-room implementation from BPHS.

use serde::{Deserialize, Serialize};
use tracing::debug;

use jyotish_base::chart::BirthChart;
use jyotish_base::dignity::{Dignity, dignity_from_longitude};
use jyotish_base::error::ChartError;
use jyotish_base::graha::{Graha, GrahaNature, SAPTA_GRAHAS};
use jyotish_base::util::normalize_360;

use crate::kala::{
    Ayana, abda_lord, ayana_from_sun, day_night_fraction, hora_lord, is_daytime, masa_lord,
    vara_lord,
};
use crate::virupa::total_virupa;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Natural strength in shashtiamsas, per BPHS. Indexed by `Graha::index()`.
pub const NAISARGIKA_BALA: [f64; 7] = [60.0, 51.43, 17.14, 25.71, 34.29, 42.86, 8.57];

/// Bhava of maximum directional strength for each sapta graha.
/// Sun=10, Moon=4, Mars=10, Mercury=1, Jupiter=1, Venus=4, Saturn=7.
pub const DIG_BALA_BHAVA: [u8; 7] = [10, 4, 10, 1, 1, 4, 7];

/// Mean daily motion (deg/day) used by Chesta Bala. Zero for Sun/Moon,
/// which receive no Chesta Bala.
pub const MEAN_SPEED: [f64; 7] = [0.0, 0.0, 0.524, 1.383, 0.083, 1.202, 0.034];

/// Required strength (shashtiamsas) for a graha to be considered strong.
pub const REQUIRED_STRENGTH: [f64; 7] = [390.0, 360.0, 300.0, 420.0, 390.0, 330.0, 300.0];

// ---------------------------------------------------------------------------
// Nature classification for temporal/aspectual components
// ---------------------------------------------------------------------------

/// Moon's benefic/malefic state from its elongation: benefic in the bright
/// half (90-270 deg from the Sun), malefic in the dark half.
pub fn moon_nature(moon_sun_elongation: f64) -> GrahaNature {
    let elong = normalize_360(moon_sun_elongation);
    if (90.0..270.0).contains(&elong) {
        GrahaNature::Benefic
    } else {
        GrahaNature::Malefic
    }
}

/// Effective nature for temporal scoring: Moon and Mercury follow the lunar
/// phase, everything else keeps its natural classification.
fn temporal_nature(graha: Graha, moon_sun_elongation: f64) -> GrahaNature {
    match graha {
        Graha::Moon | Graha::Mercury => moon_nature(moon_sun_elongation),
        g => g.nature(),
    }
}

// ---------------------------------------------------------------------------
// Sthana Bala
// ---------------------------------------------------------------------------

/// Sthana Bala: dignity-derived positional bonus.
/// Exalted 60, Moolatrikona 45, Own Sign 30, otherwise 0.
pub fn sthana_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    if !graha.is_sapta() {
        return 0.0;
    }
    match dignity_from_longitude(graha, sidereal_lon).dignity {
        Dignity::Exalted => 60.0,
        Dignity::Moolatrikona => 45.0,
        Dignity::OwnSign => 30.0,
        Dignity::Debilitated | Dignity::Neutral => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Dig Bala
// ---------------------------------------------------------------------------

/// Dig Bala: 60 * (1 - dist/6), dist = circular house distance from the
/// planet's ideal bhava, capped at 6.
pub fn dig_bala(graha: Graha, bhava_number: u8) -> f64 {
    if !graha.is_sapta() || bhava_number == 0 || bhava_number > 12 {
        return 0.0;
    }
    let ideal = DIG_BALA_BHAVA[graha.index() as usize];
    let diff = (bhava_number as i16 - ideal as i16).unsigned_abs();
    let dist = diff.min(12 - diff).min(6);
    60.0 * (1.0 - dist as f64 / 6.0)
}

// ---------------------------------------------------------------------------
// Kala Bala sub-components
// ---------------------------------------------------------------------------

/// Nathonnatha Bala: malefics strong by day (60), benefics by night (60).
pub fn nathonnatha_bala(graha: Graha, daytime: bool, moon_sun_elongation: f64) -> f64 {
    if !graha.is_sapta() {
        return 0.0;
    }
    match (temporal_nature(graha, moon_sun_elongation), daytime) {
        (GrahaNature::Malefic, true) | (GrahaNature::Benefic, false) => 60.0,
        _ => 0.0,
    }
}

/// Paksha Bala: benefics strong at full moon, malefics at new moon.
/// The Moon itself always scores with the benefic formula.
pub fn paksha_bala(graha: Graha, moon_sun_elongation: f64) -> f64 {
    if !graha.is_sapta() {
        return 0.0;
    }
    let elong = normalize_360(moon_sun_elongation);
    let phase_angle = if elong <= 180.0 { elong } else { 360.0 - elong };
    let benefic_score = phase_angle / 3.0; // 0 at new moon, 60 at full moon

    let nature = if graha == Graha::Moon {
        GrahaNature::Benefic
    } else {
        temporal_nature(graha, moon_sun_elongation)
    };
    match nature {
        GrahaNature::Benefic => benefic_score,
        GrahaNature::Malefic => 60.0 - benefic_score,
    }
}

/// Tribhaga Bala: day/night divided into thirds, one ruler each.
/// Day thirds: Jupiter, Mercury, Saturn. Night thirds: Moon, Venus, Mars.
/// The Sun always receives 60.
pub fn tribhaga_bala(graha: Graha, daytime: bool, fraction: f64) -> f64 {
    if !graha.is_sapta() {
        return 0.0;
    }
    if graha == Graha::Sun {
        return 60.0;
    }
    let third = if fraction < 1.0 / 3.0 {
        0
    } else if fraction < 2.0 / 3.0 {
        1
    } else {
        2
    };
    let ruler = if daytime {
        [Graha::Jupiter, Graha::Mercury, Graha::Saturn][third]
    } else {
        [Graha::Moon, Graha::Venus, Graha::Mars][third]
    };
    if graha == ruler { 60.0 } else { 0.0 }
}

/// Abda (year lord) Bala: 15 when the graha rules the birth year.
pub fn abda_bala(graha: Graha, year_lord: Graha) -> f64 {
    if graha.is_sapta() && graha == year_lord { 15.0 } else { 0.0 }
}

/// Masa (month lord) Bala: 30 when the graha rules the birth month.
pub fn masa_bala(graha: Graha, month_lord: Graha) -> f64 {
    if graha.is_sapta() && graha == month_lord { 30.0 } else { 0.0 }
}

/// Vara (weekday lord) Bala: 45 when the graha rules the birth weekday.
pub fn vara_bala(graha: Graha, weekday_lord: Graha) -> f64 {
    if graha.is_sapta() && graha == weekday_lord { 45.0 } else { 0.0 }
}

/// Hora Bala: 60 when the graha rules the birth hour.
pub fn hora_bala(graha: Graha, hour_lord: Graha) -> f64 {
    if graha.is_sapta() && graha == hour_lord { 60.0 } else { 0.0 }
}

/// Ayana Bala: solstice-half group strength.
/// Uttarayana favors Sun/Mars/Jupiter, Dakshinayana favors
/// Moon/Venus/Saturn; Mercury scores in both halves.
pub fn ayana_bala(graha: Graha, ayana: Ayana) -> f64 {
    if !graha.is_sapta() {
        return 0.0;
    }
    if graha == Graha::Mercury {
        return 30.0;
    }
    let favored = match ayana {
        Ayana::Uttarayana => matches!(graha, Graha::Sun | Graha::Mars | Graha::Jupiter),
        Ayana::Dakshinayana => matches!(graha, Graha::Moon | Graha::Venus | Graha::Saturn),
    };
    if favored { 30.0 } else { 0.0 }
}

/// Kala Bala breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KalaBalaBreakdown {
    pub nathonnatha: f64,
    pub paksha: f64,
    pub tribhaga: f64,
    pub abda: f64,
    pub masa: f64,
    pub vara: f64,
    pub hora: f64,
    pub ayana: f64,
    pub total: f64,
}

/// Kala Bala for one graha, from the chart's birth fields and luminaries.
pub fn kala_bala(chart: &BirthChart, graha: Graha) -> Result<KalaBalaBreakdown, ChartError> {
    if !graha.is_sapta() {
        return Err(ChartError::UnsupportedGraha(graha));
    }
    let birth = chart.birth.as_ref().ok_or(ChartError::MissingBirthInfo)?;
    let sun = chart.require(Graha::Sun)?;
    chart.require(Graha::Moon)?;
    let elong = chart
        .moon_sun_elongation()
        .ok_or(ChartError::MissingGraha(Graha::Moon))?;

    let daytime = is_daytime(birth);
    let n = nathonnatha_bala(graha, daytime, elong);
    let p = paksha_bala(graha, elong);
    let t = tribhaga_bala(graha, daytime, day_night_fraction(birth));
    let ab = abda_bala(graha, abda_lord(birth));
    let ma = masa_bala(graha, masa_lord(birth));
    let va = vara_bala(graha, vara_lord(birth));
    let ho = hora_bala(graha, hora_lord(birth));
    let ay = ayana_bala(graha, ayana_from_sun(sun.longitude));
    Ok(KalaBalaBreakdown {
        nathonnatha: n,
        paksha: p,
        tribhaga: t,
        abda: ab,
        masa: ma,
        vara: va,
        hora: ho,
        ayana: ay,
        total: n + p + t + ab + ma + va + ho + ay,
    })
}

// ---------------------------------------------------------------------------
// Chesta Bala
// ---------------------------------------------------------------------------

/// Chesta Bala from motion. Sun and Moon always score 0.
///
/// Retrograde motion scores a 50 base, rising toward 60 the slower it is.
/// Direct inner planets (Mercury/Venus) are stronger below their mean
/// speed; direct outer planets are stronger above it. Saturn gains a small
/// bonus when nearly stationary. Without a speed value, the retrograde
/// flag alone estimates 50 (retrograde) or 20 (direct).
pub fn chesta_bala(graha: Graha, is_retrograde: bool, speed: Option<f64>) -> f64 {
    if !graha.is_sapta() || matches!(graha, Graha::Sun | Graha::Moon) {
        return 0.0;
    }
    let mean = MEAN_SPEED[graha.index() as usize];
    let Some(speed) = speed else {
        return if is_retrograde { 50.0 } else { 20.0 };
    };

    let mut score = if speed < 0.0 || is_retrograde {
        let slowness = (1.0 - (speed.abs() / mean).min(1.0)).max(0.0);
        50.0 + 10.0 * slowness
    } else {
        let ratio = speed / mean;
        match graha {
            Graha::Mercury | Graha::Venus => {
                if ratio <= 1.0 {
                    30.0 + 30.0 * (1.0 - ratio)
                } else {
                    (30.0 * (2.0 - ratio)).clamp(0.0, 30.0)
                }
            }
            // Mars, Jupiter, Saturn: faster than mean is stronger
            _ => (ratio * 30.0).min(60.0),
        }
    };
    if graha == Graha::Saturn && speed.abs() < 0.01 {
        score += 10.0;
    }
    score.min(60.0)
}

// ---------------------------------------------------------------------------
// Naisargika Bala
// ---------------------------------------------------------------------------

/// Naisargika (natural) bala for a graha.
pub fn naisargika_bala(graha: Graha) -> f64 {
    if graha.is_sapta() {
        NAISARGIKA_BALA[graha.index() as usize]
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Drik Bala
// ---------------------------------------------------------------------------

/// Drik Bala: (benefic virupa sum - malefic virupa sum) / 4, clamped to
/// [-60, +60].
///
/// Every other body in the snapshot contributes its total virupa onto the
/// target, signed by the aspecting body's nature; Moon and Mercury follow
/// the lunar phase when the elongation is computable.
pub fn drik_bala(chart: &BirthChart, graha: Graha) -> Result<f64, ChartError> {
    if !graha.is_sapta() {
        return Err(ChartError::UnsupportedGraha(graha));
    }
    let target = chart.require(graha)?;
    let elong = chart.moon_sun_elongation();

    let mut benefic_sum = 0.0;
    let mut malefic_sum = 0.0;
    for pos in &chart.positions {
        if pos.graha == graha {
            continue;
        }
        let virupa = total_virupa(pos.graha, pos.longitude, target.longitude);
        let nature = match (pos.graha, elong) {
            (Graha::Moon | Graha::Mercury, Some(e)) => moon_nature(e),
            (g, _) => g.nature(),
        };
        match nature {
            GrahaNature::Benefic => benefic_sum += virupa,
            GrahaNature::Malefic => malefic_sum += virupa,
        }
    }
    Ok(((benefic_sum - malefic_sum) / 4.0).clamp(-60.0, 60.0))
}

// ---------------------------------------------------------------------------
// Complete Shad Bala
// ---------------------------------------------------------------------------

/// Complete Shad Bala breakdown for one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthScore {
    pub graha: Graha,
    pub sthana: f64,
    pub dig: f64,
    pub kala: KalaBalaBreakdown,
    pub chesta: f64,
    pub naisargika: f64,
    pub drik: f64,
    /// Sum of all components in shashtiamsas.
    pub total: f64,
    /// Total expressed in rupas (shashtiamsas / 60).
    pub total_rupas: f64,
    pub required: f64,
    pub is_strong: bool,
}

/// Compute complete Shad Bala for a single graha.
///
/// Errors are local to the requested planet: a missing position, a node,
/// or absent birth fields do not affect other planets' computations.
pub fn shad_bala(chart: &BirthChart, graha: Graha) -> Result<StrengthScore, ChartError> {
    if !graha.is_sapta() {
        return Err(ChartError::UnsupportedGraha(graha));
    }
    let pos = chart.require(graha)?;

    let sthana = sthana_bala(graha, pos.longitude);
    let dig = dig_bala(graha, pos.house);
    let kala = kala_bala(chart, graha)?;
    let chesta = chesta_bala(graha, pos.is_retrograde, pos.speed);
    let naisargika = naisargika_bala(graha);
    let drik = drik_bala(chart, graha)?;

    let total = sthana + dig + kala.total + chesta + naisargika + drik;
    let required = REQUIRED_STRENGTH[graha.index() as usize];
    debug!(graha = %graha, total, required, "computed shad bala");
    Ok(StrengthScore {
        graha,
        sthana,
        dig,
        kala,
        chesta,
        naisargika,
        drik,
        total,
        total_rupas: total / 60.0,
        required,
        is_strong: total >= required,
    })
}

/// Shad Bala for all sapta grahas; per-planet failures stay isolated.
pub fn all_shad_balas(chart: &BirthChart) -> Vec<(Graha, Result<StrengthScore, ChartError>)> {
    SAPTA_GRAHAS
        .into_iter()
        .map(|g| (g, shad_bala(chart, g)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_base::chart::{Ascendant, BirthInfo};

    const EPS: f64 = 1e-9;

    fn birth_noon() -> BirthInfo {
        BirthInfo {
            year: 1990,
            month: 3,
            day: 15,
            hour: 12,
            minute: 0,
        }
    }

    fn full_chart() -> BirthChart {
        BirthChart::new(
            Ascendant::from_longitude(0.0),
            vec![
                (Graha::Sun, 10.0, false, Some(0.98)),
                (Graha::Moon, 190.0, false, Some(13.2)),
                (Graha::Mars, 298.0, false, Some(0.6)),
                (Graha::Mercury, 20.0, false, Some(1.2)),
                (Graha::Jupiter, 95.0, false, Some(0.09)),
                (Graha::Venus, 357.0, false, Some(1.1)),
                (Graha::Saturn, 200.0, false, Some(0.03)),
                (Graha::Rahu, 130.0, true, None),
                (Graha::Ketu, 310.0, true, None),
            ],
        )
        .unwrap()
        .with_birth_info(birth_noon())
    }

    // --- Sthana ---

    #[test]
    fn sthana_exalted_sun() {
        // Sun in Aries
        assert!((sthana_bala(Graha::Sun, 10.0) - 60.0).abs() < EPS);
    }

    #[test]
    fn sthana_moolatrikona_sun() {
        // Sun at 10 Leo
        assert!((sthana_bala(Graha::Sun, 130.0) - 45.0).abs() < EPS);
    }

    #[test]
    fn sthana_own_sign_sun() {
        // Sun at 25 Leo, past moolatrikona
        assert!((sthana_bala(Graha::Sun, 145.0) - 30.0).abs() < EPS);
    }

    #[test]
    fn sthana_debilitated_zero() {
        assert!(sthana_bala(Graha::Sun, 190.0).abs() < EPS);
    }

    // --- Dig ---

    #[test]
    fn dig_sun_at_ideal() {
        assert!((dig_bala(Graha::Sun, 10) - 60.0).abs() < EPS);
    }

    #[test]
    fn dig_sun_at_opposite() {
        assert!(dig_bala(Graha::Sun, 4).abs() < EPS);
    }

    #[test]
    fn dig_sun_halfway() {
        // 10 to 7 is 3 houses: 60 * (1 - 3/6) = 30
        assert!((dig_bala(Graha::Sun, 7) - 30.0).abs() < EPS);
    }

    #[test]
    fn dig_wraps_circularly() {
        // Mercury ideal house 1; house 12 is distance 1
        assert!((dig_bala(Graha::Mercury, 12) - 50.0).abs() < EPS);
    }

    #[test]
    fn exalted_kendra_beats_debilitated_dusthana() {
        // Sthana+Dig must rank exalted-in-kendra strictly above
        // debilitated-in-dusthana for the same planet.
        let strong = sthana_bala(Graha::Sun, 10.0) + dig_bala(Graha::Sun, 10);
        let weak = sthana_bala(Graha::Sun, 190.0) + dig_bala(Graha::Sun, 6);
        assert!(strong > weak);
    }

    // --- Kala sub-components ---

    #[test]
    fn nathonnatha_malefic_day() {
        assert!((nathonnatha_bala(Graha::Mars, true, 180.0) - 60.0).abs() < EPS);
        assert!(nathonnatha_bala(Graha::Mars, false, 180.0).abs() < EPS);
    }

    #[test]
    fn nathonnatha_benefic_night() {
        assert!((nathonnatha_bala(Graha::Jupiter, false, 180.0) - 60.0).abs() < EPS);
    }

    #[test]
    fn paksha_full_moon() {
        assert!((paksha_bala(Graha::Jupiter, 180.0) - 60.0).abs() < EPS);
        assert!(paksha_bala(Graha::Mars, 180.0).abs() < EPS);
    }

    #[test]
    fn paksha_new_moon() {
        assert!((paksha_bala(Graha::Mars, 0.0) - 60.0).abs() < EPS);
    }

    #[test]
    fn paksha_moon_always_benefic_formula() {
        // Waning moon at 300 elongation: phase angle 60 -> 20
        assert!((paksha_bala(Graha::Moon, 300.0) - 20.0).abs() < EPS);
    }

    #[test]
    fn tribhaga_day_rulers() {
        assert!((tribhaga_bala(Graha::Jupiter, true, 0.1) - 60.0).abs() < EPS);
        assert!((tribhaga_bala(Graha::Mercury, true, 0.5) - 60.0).abs() < EPS);
        assert!((tribhaga_bala(Graha::Saturn, true, 0.9) - 60.0).abs() < EPS);
        assert!(tribhaga_bala(Graha::Jupiter, true, 0.5).abs() < EPS);
    }

    #[test]
    fn tribhaga_night_rulers() {
        assert!((tribhaga_bala(Graha::Moon, false, 0.1) - 60.0).abs() < EPS);
        assert!((tribhaga_bala(Graha::Venus, false, 0.5) - 60.0).abs() < EPS);
        assert!((tribhaga_bala(Graha::Mars, false, 0.9) - 60.0).abs() < EPS);
    }

    #[test]
    fn tribhaga_sun_always() {
        assert!((tribhaga_bala(Graha::Sun, true, 0.5) - 60.0).abs() < EPS);
        assert!((tribhaga_bala(Graha::Sun, false, 0.9) - 60.0).abs() < EPS);
    }

    #[test]
    fn lord_match_bonuses() {
        assert!((abda_bala(Graha::Jupiter, Graha::Jupiter) - 15.0).abs() < EPS);
        assert!((masa_bala(Graha::Venus, Graha::Venus) - 30.0).abs() < EPS);
        assert!((vara_bala(Graha::Saturn, Graha::Saturn) - 45.0).abs() < EPS);
        assert!((hora_bala(Graha::Sun, Graha::Sun) - 60.0).abs() < EPS);
        assert!(abda_bala(Graha::Jupiter, Graha::Venus).abs() < EPS);
    }

    #[test]
    fn ayana_groups_complementary() {
        assert!((ayana_bala(Graha::Sun, Ayana::Uttarayana) - 30.0).abs() < EPS);
        assert!(ayana_bala(Graha::Sun, Ayana::Dakshinayana).abs() < EPS);
        assert!((ayana_bala(Graha::Saturn, Ayana::Dakshinayana) - 30.0).abs() < EPS);
        assert!(ayana_bala(Graha::Saturn, Ayana::Uttarayana).abs() < EPS);
        // Mercury scores in both halves
        assert!((ayana_bala(Graha::Mercury, Ayana::Uttarayana) - 30.0).abs() < EPS);
        assert!((ayana_bala(Graha::Mercury, Ayana::Dakshinayana) - 30.0).abs() < EPS);
    }

    #[test]
    fn kala_requires_birth_info() {
        let chart = BirthChart::new(
            Ascendant::from_longitude(0.0),
            vec![
                (Graha::Sun, 10.0, false, None),
                (Graha::Moon, 100.0, false, None),
            ],
        )
        .unwrap();
        assert_eq!(
            kala_bala(&chart, Graha::Sun).unwrap_err(),
            ChartError::MissingBirthInfo
        );
    }

    #[test]
    fn kala_total_sums_components() {
        let chart = full_chart();
        let k = kala_bala(&chart, Graha::Jupiter).unwrap();
        let sum =
            k.nathonnatha + k.paksha + k.tribhaga + k.abda + k.masa + k.vara + k.hora + k.ayana;
        assert!((k.total - sum).abs() < EPS);
    }

    // --- Chesta ---

    #[test]
    fn chesta_luminaries_zero() {
        assert!(chesta_bala(Graha::Sun, false, Some(1.0)).abs() < EPS);
        assert!(chesta_bala(Graha::Moon, true, Some(-1.0)).abs() < EPS);
    }

    #[test]
    fn chesta_slow_retrograde_beats_fast() {
        // Mars retrograde: near-stationary outranks fast retrograde
        let slow = chesta_bala(Graha::Mars, true, Some(-0.05));
        let fast = chesta_bala(Graha::Mars, true, Some(-0.5));
        assert!(slow > fast);
        assert!(slow <= 60.0 && fast >= 50.0);
    }

    #[test]
    fn chesta_inner_slower_is_stronger() {
        let slow = chesta_bala(Graha::Mercury, false, Some(0.7));
        let mean = chesta_bala(Graha::Mercury, false, Some(1.383));
        let fast = chesta_bala(Graha::Mercury, false, Some(1.8));
        assert!(slow > mean);
        assert!(mean > fast);
    }

    #[test]
    fn chesta_outer_faster_is_stronger() {
        let fast = chesta_bala(Graha::Jupiter, false, Some(0.15));
        let slow = chesta_bala(Graha::Jupiter, false, Some(0.05));
        assert!(fast > slow);
    }

    #[test]
    fn chesta_saturn_stationary_bonus() {
        let stationary = chesta_bala(Graha::Saturn, true, Some(-0.005));
        let moving = chesta_bala(Graha::Saturn, true, Some(-0.03));
        assert!(stationary > moving);
        assert!(stationary <= 60.0);
    }

    #[test]
    fn chesta_missing_speed_uses_flag() {
        assert!((chesta_bala(Graha::Mars, true, None) - 50.0).abs() < EPS);
        assert!((chesta_bala(Graha::Mars, false, None) - 20.0).abs() < EPS);
    }

    // --- Naisargika ---

    #[test]
    fn naisargika_ordering() {
        assert!((naisargika_bala(Graha::Sun) - 60.0).abs() < EPS);
        assert!((naisargika_bala(Graha::Saturn) - 8.57).abs() < EPS);
        assert!(naisargika_bala(Graha::Sun) > naisargika_bala(Graha::Moon));
        assert!(naisargika_bala(Graha::Moon) > naisargika_bala(Graha::Venus));
        assert!(naisargika_bala(Graha::Rahu).abs() < EPS);
    }

    // --- Drik ---

    #[test]
    fn drik_within_bounds() {
        let chart = full_chart();
        for g in SAPTA_GRAHAS {
            let d = drik_bala(&chart, g).unwrap();
            assert!((-60.0..=60.0).contains(&d), "{g}: {d}");
        }
    }

    #[test]
    fn drik_benefic_opposition_positive() {
        // Jupiter exactly opposing the Sun: strong benefic aspect
        let chart = BirthChart::new(
            Ascendant::from_longitude(0.0),
            vec![
                (Graha::Sun, 10.0, false, None),
                (Graha::Moon, 100.0, false, None),
                (Graha::Jupiter, 190.0, false, None),
            ],
        )
        .unwrap();
        assert!(drik_bala(&chart, Graha::Sun).unwrap() > 0.0);
    }

    #[test]
    fn drik_node_rejected() {
        let chart = full_chart();
        assert_eq!(
            drik_bala(&chart, Graha::Rahu).unwrap_err(),
            ChartError::UnsupportedGraha(Graha::Rahu)
        );
    }

    // --- Complete ---

    #[test]
    fn shad_bala_totals_consistent() {
        let chart = full_chart();
        let score = shad_bala(&chart, Graha::Jupiter).unwrap();
        let sum = score.sthana
            + score.dig
            + score.kala.total
            + score.chesta
            + score.naisargika
            + score.drik;
        assert!((score.total - sum).abs() < EPS);
        assert!((score.total_rupas - score.total / 60.0).abs() < EPS);
        assert_eq!(score.is_strong, score.total >= score.required);
    }

    #[test]
    fn shad_bala_missing_planet_is_local() {
        // Chart without Saturn: Saturn errors, Jupiter still computes.
        let chart = BirthChart::new(
            Ascendant::from_longitude(0.0),
            vec![
                (Graha::Sun, 10.0, false, None),
                (Graha::Moon, 190.0, false, None),
                (Graha::Jupiter, 95.0, false, None),
            ],
        )
        .unwrap()
        .with_birth_info(birth_noon());
        assert_eq!(
            shad_bala(&chart, Graha::Saturn).unwrap_err(),
            ChartError::MissingGraha(Graha::Saturn)
        );
        assert!(shad_bala(&chart, Graha::Jupiter).is_ok());
    }

    #[test]
    fn all_shad_balas_covers_sapta() {
        let chart = full_chart();
        let all = all_shad_balas(&chart);
        assert_eq!(all.len(), 7);
        for (g, result) in &all {
            assert!(result.is_ok(), "{g} should compute");
        }
    }

    #[test]
    fn required_minimums_table() {
        let chart = full_chart();
        let expected = [390.0, 360.0, 300.0, 420.0, 390.0, 330.0, 300.0];
        for (i, g) in SAPTA_GRAHAS.into_iter().enumerate() {
            assert!((shad_bala(&chart, g).unwrap().required - expected[i]).abs() < EPS);
        }
    }

    #[test]
    fn idempotent_scores() {
        let chart = full_chart();
        let a = shad_bala(&chart, Graha::Venus).unwrap();
        let b = shad_bala(&chart, Graha::Venus).unwrap();
        assert_eq!(a, b);
    }
}
