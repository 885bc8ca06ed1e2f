//! Classical virupa (aspect-angle strength) curves for Drik Bala.
//!
//! The piecewise base formula maps angular separation to aspect strength in
//! virupa units, peaking at the full 7th-house aspect (180 deg). Mars,
//! Jupiter, Saturn, and the nodes add bonus arcs for their special aspects.
//!
//! Clean-room implementation from standard Vedic jyotish texts (BPHS).

use jyotish_base::graha::Graha;
use jyotish_base::util::normalize_360;

/// Piecewise base virupa for a given angular distance.
///
/// - `[0, 30)`:    0
/// - `[30, 90)`:   `(A - 30) * 0.75`       -> 0..45
/// - `[90, 150)`:  `45 - (A - 90) * 0.75`  -> 45..0
/// - `[150, 180)`: `(A - 150) * 2`         -> 0..60
/// - `[180, 300)`: `60 - (A - 180) * 0.5`  -> 60..0
/// - `[300, 360)`: 0
pub fn base_virupa(angular_distance: f64) -> f64 {
    let a = normalize_360(angular_distance);
    if a < 30.0 {
        0.0
    } else if a < 90.0 {
        (a - 30.0) * 0.75
    } else if a < 150.0 {
        45.0 - (a - 90.0) * 0.75
    } else if a < 180.0 {
        (a - 150.0) * 2.0
    } else if a < 300.0 {
        60.0 - (a - 180.0) * 0.5
    } else {
        0.0
    }
}

/// Planet-specific bonus virupa for special aspects.
///
/// - Mars: +15 in `[90, 120)` or `[210, 240)` (4th/8th arcs)
/// - Jupiter: +30 in `[120, 150)` or `[240, 270)` (5th/9th arcs)
/// - Saturn: +45 in `[60, 90)` or `[270, 300)` (3rd/10th arcs)
/// - Rahu/Ketu: +30 in the 5th/9th arcs, like Jupiter
/// - Sun, Moon, Mercury, Venus: 0
pub fn special_virupa(graha: Graha, angular_distance: f64) -> f64 {
    let a = normalize_360(angular_distance);
    match graha {
        Graha::Mars => {
            if (90.0..120.0).contains(&a) || (210.0..240.0).contains(&a) {
                15.0
            } else {
                0.0
            }
        }
        Graha::Jupiter | Graha::Rahu | Graha::Ketu => {
            if (120.0..150.0).contains(&a) || (240.0..270.0).contains(&a) {
                30.0
            } else {
                0.0
            }
        }
        Graha::Saturn => {
            if (60.0..90.0).contains(&a) || (270.0..300.0).contains(&a) {
                45.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

/// Total virupa (base + special) cast by a graha onto a sidereal point.
///
/// Angular distance = `normalize_360(target_lon - source_lon)`.
pub fn total_virupa(graha: Graha, source_lon: f64, target_lon: f64) -> f64 {
    let a = normalize_360(target_lon - source_lon);
    base_virupa(a) + special_virupa(graha, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn base_virupa_key_points() {
        assert!(base_virupa(0.0).abs() < EPS);
        assert!(base_virupa(15.0).abs() < EPS);
        assert!((base_virupa(60.0) - 22.5).abs() < EPS);
        assert!((base_virupa(90.0) - 45.0).abs() < EPS);
        assert!((base_virupa(120.0) - 22.5).abs() < EPS);
        assert!(base_virupa(150.0).abs() < EPS);
        assert!((base_virupa(165.0) - 30.0).abs() < EPS);
        assert!((base_virupa(180.0) - 60.0).abs() < EPS);
        assert!((base_virupa(240.0) - 30.0).abs() < EPS);
        assert!(base_virupa(300.0).abs() < EPS);
        assert!(base_virupa(360.0).abs() < EPS);
    }

    #[test]
    fn opposition_is_peak() {
        for a in [30.0, 90.0, 150.0, 170.0, 200.0, 270.0] {
            assert!(base_virupa(a) <= base_virupa(180.0));
        }
    }

    #[test]
    fn mars_special_arcs() {
        assert!((special_virupa(Graha::Mars, 100.0) - 15.0).abs() < EPS);
        assert!((special_virupa(Graha::Mars, 225.0) - 15.0).abs() < EPS);
        assert!(special_virupa(Graha::Mars, 150.0).abs() < EPS);
    }

    #[test]
    fn jupiter_special_arcs() {
        assert!((special_virupa(Graha::Jupiter, 135.0) - 30.0).abs() < EPS);
        assert!((special_virupa(Graha::Jupiter, 250.0) - 30.0).abs() < EPS);
        assert!(special_virupa(Graha::Jupiter, 180.0).abs() < EPS);
    }

    #[test]
    fn saturn_special_arcs() {
        assert!((special_virupa(Graha::Saturn, 75.0) - 45.0).abs() < EPS);
        assert!((special_virupa(Graha::Saturn, 285.0) - 45.0).abs() < EPS);
        assert!(special_virupa(Graha::Saturn, 180.0).abs() < EPS);
    }

    #[test]
    fn nodes_share_jupiter_arcs() {
        assert!((special_virupa(Graha::Rahu, 135.0) - 30.0).abs() < EPS);
        assert!((special_virupa(Graha::Ketu, 250.0) - 30.0).abs() < EPS);
        assert!(special_virupa(Graha::Rahu, 100.0).abs() < EPS);
    }

    #[test]
    fn no_special_for_luminaries_and_inner() {
        for g in [Graha::Sun, Graha::Moon, Graha::Mercury, Graha::Venus] {
            for a in [75.0, 100.0, 135.0, 250.0, 285.0] {
                assert!(special_virupa(g, a).abs() < EPS, "{g} at {a}");
            }
        }
    }

    #[test]
    fn total_virupa_wraparound() {
        // source=350, target=20 -> distance=30 -> base 0
        assert!(total_virupa(Graha::Sun, 350.0, 20.0).abs() < EPS);
    }

    #[test]
    fn total_virupa_mars_stacks() {
        // Mars at 0, target at 100: base 37.5 + special 15
        assert!((total_virupa(Graha::Mars, 0.0, 100.0) - 52.5).abs() < EPS);
    }
}
