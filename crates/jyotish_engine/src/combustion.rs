//! Combustion (Asta) detection with severity tiers.
//!
//! A graha is combust when it is too close to the Sun, with thresholds
//! varying by planet and retrograde status per BPHS. Severity grows as the
//! separation shrinks relative to the planet's threshold.

use serde::{Deserialize, Serialize};

use jyotish_base::graha::Graha;
use jyotish_base::util::angular_separation;

/// Severity of a combustion, by fraction of the planet's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombustionSeverity {
    Mild,
    Moderate,
    Severe,
}

/// Combustion status for one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Combustion {
    /// Angular distance from the Sun in degrees.
    pub distance: f64,
    pub severity: CombustionSeverity,
}

impl Combustion {
    /// Aspect-strength penalty for this severity.
    pub fn penalty(&self) -> f64 {
        match self.severity {
            CombustionSeverity::Severe => 2.5,
            CombustionSeverity::Moderate => 1.5,
            CombustionSeverity::Mild => 0.5,
        }
    }
}

/// BPHS combustion threshold (degrees from Sun) for a graha.
///
/// Returns `None` for Sun, Rahu, and Ketu (not applicable).
/// For Mercury and Venus, retrograde thresholds are tighter.
pub fn combustion_threshold(graha: Graha, is_retrograde: bool) -> Option<f64> {
    match graha {
        Graha::Sun | Graha::Rahu | Graha::Ketu => None,
        Graha::Moon => Some(12.0),
        Graha::Mars => Some(17.0),
        Graha::Mercury => {
            if is_retrograde {
                Some(12.0)
            } else {
                Some(14.0)
            }
        }
        Graha::Jupiter => Some(11.0),
        Graha::Venus => {
            if is_retrograde {
                Some(8.0)
            } else {
                Some(10.0)
            }
        }
        Graha::Saturn => Some(15.0),
    }
}

/// Check a graha for combustion against the Sun's longitude.
///
/// A graha at exactly the threshold distance is **not** combust (strict
/// less-than). Returns `None` for Sun, Rahu, Ketu, and non-combust planets.
///
/// Severity tiers: within 30% of the threshold Severe, within 60% Moderate,
/// otherwise Mild.
pub fn check_combustion(
    graha: Graha,
    graha_lon: f64,
    sun_lon: f64,
    is_retrograde: bool,
) -> Option<Combustion> {
    let threshold = combustion_threshold(graha, is_retrograde)?;
    let distance = angular_separation(graha_lon, sun_lon);
    if distance >= threshold {
        return None;
    }
    let severity = if distance <= threshold * 0.3 {
        CombustionSeverity::Severe
    } else if distance <= threshold * 0.6 {
        CombustionSeverity::Moderate
    } else {
        CombustionSeverity::Mild
    };
    Some(Combustion { distance, severity })
}
