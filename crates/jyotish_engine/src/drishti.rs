//! Drishti (planetary aspect) engine.
//!
//! Aspects are house-based: every graha casts the full 7th-house aspect;
//! Mars, Jupiter, Saturn, and the nodes add their special aspects. Each
//! detected aspect carries a 0-100 base strength, and can be scored in
//! detail on a 1-10 scale combining dignity, planet nature, house weight,
//! retrogression, combustion, and mutual-aspect bonuses.

use serde::{Deserialize, Serialize};
use tracing::debug;

use jyotish_base::bhava::nth_house_from;
use jyotish_base::chart::BirthChart;
use jyotish_base::dignity::{Dignity, dignity_from_longitude};
use jyotish_base::graha::{Graha, GrahaNature};
use jyotish_base::util::{angular_separation, normalize_360};

use crate::combustion::check_combustion;

/// Aspect kind: the classical 7th or a planet-specific special aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectKind {
    Seventh,
    MarsFourth,
    MarsEighth,
    JupiterFifth,
    JupiterNinth,
    SaturnThird,
    SaturnTenth,
    NodeFifth,
    NodeNinth,
}

impl AspectKind {
    /// House offset counted inclusively from the aspecting planet's house.
    pub const fn offset(self) -> u8 {
        match self {
            Self::Seventh => 7,
            Self::MarsFourth => 4,
            Self::MarsEighth => 8,
            Self::JupiterFifth | Self::NodeFifth => 5,
            Self::JupiterNinth | Self::NodeNinth => 9,
            Self::SaturnThird => 3,
            Self::SaturnTenth => 10,
        }
    }

    /// Base strength (0-100) before orb decay.
    pub const fn base_strength(self) -> f64 {
        match self {
            Self::Seventh => 75.0,
            Self::MarsFourth | Self::MarsEighth => 70.0,
            Self::JupiterFifth | Self::JupiterNinth => 80.0,
            Self::SaturnThird | Self::SaturnTenth => 75.0,
            Self::NodeFifth | Self::NodeNinth => 70.0,
        }
    }

    /// Multiplier used by detailed 1-10 scoring.
    const fn type_factor(self) -> f64 {
        match self {
            Self::JupiterFifth | Self::JupiterNinth => 1.2,
            Self::SaturnThird => 0.8,
            _ => 1.0,
        }
    }

    /// True for the trinal special aspects (5th/9th).
    pub const fn is_trinal_special(self) -> bool {
        matches!(
            self,
            Self::JupiterFifth | Self::JupiterNinth | Self::NodeFifth | Self::NodeNinth
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Seventh => "7th aspect",
            Self::MarsFourth => "4th aspect",
            Self::MarsEighth => "8th aspect",
            Self::JupiterFifth | Self::NodeFifth => "5th aspect",
            Self::JupiterNinth | Self::NodeNinth => "9th aspect",
            Self::SaturnThird => "3rd aspect",
            Self::SaturnTenth => "10th aspect",
        }
    }
}

/// Aspect kinds a graha is capable of casting.
pub fn aspect_kinds(graha: Graha) -> &'static [AspectKind] {
    match graha {
        Graha::Mars => &[AspectKind::Seventh, AspectKind::MarsFourth, AspectKind::MarsEighth],
        Graha::Jupiter => &[
            AspectKind::Seventh,
            AspectKind::JupiterFifth,
            AspectKind::JupiterNinth,
        ],
        Graha::Saturn => &[
            AspectKind::Seventh,
            AspectKind::SaturnThird,
            AspectKind::SaturnTenth,
        ],
        Graha::Rahu | Graha::Ketu => &[
            AspectKind::Seventh,
            AspectKind::NodeFifth,
            AspectKind::NodeNinth,
        ],
        _ => &[AspectKind::Seventh],
    }
}

/// Benefic/malefic/mixed nature of an aspect, from the aspecting graha.
///
/// Jupiter, Venus, and Mercury cast benefic aspects; Sun, Mars, Saturn, and
/// the nodes cast malefic ones; the Moon's aspect is mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectNature {
    Benefic,
    Malefic,
    Mixed,
}

pub fn aspect_nature(graha: Graha) -> AspectNature {
    match graha {
        Graha::Jupiter | Graha::Venus | Graha::Mercury => AspectNature::Benefic,
        Graha::Moon => AspectNature::Mixed,
        _ => AspectNature::Malefic,
    }
}

/// One detected aspect from a planet onto a house (or a planet in it).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectRelation {
    pub source: Graha,
    pub target_house: u8,
    /// Target planet when the query was planet-directed.
    pub target_planet: Option<Graha>,
    pub kind: AspectKind,
    /// Deviation from the exact aspect angle, degrees. Zero for
    /// house-directed queries (whole-sign aspects).
    pub orb: f64,
    /// Base strength 0-100 after orb decay.
    pub strength: f64,
    pub nature: AspectNature,
}

/// Qualitative level for a 1-10 detailed strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Moderate,
    Good,
    Strong,
    VeryStrong,
    Exceptional,
}

impl StrengthLevel {
    pub fn from_strength(strength: f64) -> StrengthLevel {
        if strength >= 8.5 {
            Self::Exceptional
        } else if strength >= 7.5 {
            Self::VeryStrong
        } else if strength >= 6.5 {
            Self::Strong
        } else if strength >= 5.5 {
            Self::Good
        } else if strength >= 4.5 {
            Self::Moderate
        } else if strength >= 3.5 {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }
}

/// One factor of a detailed strength score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Adjustment {
    pub factor: &'static str,
    pub value: f64,
}

/// Detailed 1-10 strength analysis of an aspect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectStrength {
    pub final_strength: f64,
    pub level: StrengthLevel,
    pub adjustments: Vec<Adjustment>,
}

const BASE_DETAILED_STRENGTH: f64 = 5.0;
const MUTUAL_BONUS_CAP: f64 = 2.0;
const PATTERN_ORB: f64 = 8.0;

/// Target house of an aspect cast from `house`.
pub fn aspect_target(house: u8, kind: AspectKind) -> u8 {
    nth_house_from(house, kind.offset())
}

/// All aspects falling on a house (whole-sign; orb zero).
pub fn aspects_on_house(chart: &BirthChart, target_house: u8) -> Vec<AspectRelation> {
    let mut aspects = Vec::new();
    for pos in &chart.positions {
        if pos.house == target_house {
            continue; // occupancy is conjunction, not aspect
        }
        for &kind in aspect_kinds(pos.graha) {
            if aspect_target(pos.house, kind) == target_house {
                aspects.push(AspectRelation {
                    source: pos.graha,
                    target_house,
                    target_planet: None,
                    kind,
                    orb: 0.0,
                    strength: kind.base_strength(),
                    nature: aspect_nature(pos.graha),
                });
            }
        }
    }
    aspects
}

/// All aspects falling on a planet, with longitude-based orb decay.
///
/// The house aspect must hold; the orb is the deviation of the actual
/// angular distance from the exact aspect angle, decaying strength by 5 per
/// degree with a floor of 20.
pub fn aspects_on_planet(chart: &BirthChart, target: Graha) -> Vec<AspectRelation> {
    let Some(target_pos) = chart.position(target) else {
        return Vec::new();
    };
    let mut aspects = Vec::new();
    for pos in &chart.positions {
        if pos.graha == target {
            continue;
        }
        for &kind in aspect_kinds(pos.graha) {
            if aspect_target(pos.house, kind) != target_pos.house {
                continue;
            }
            let exact = (kind.offset() as f64 - 1.0) * 30.0;
            let actual = normalize_360(target_pos.longitude - pos.longitude);
            let orb = (actual - exact).abs().min(360.0 - (actual - exact).abs());
            let strength = (kind.base_strength() - orb * 5.0).max(20.0);
            aspects.push(AspectRelation {
                source: pos.graha,
                target_house: target_pos.house,
                target_planet: Some(target),
                kind,
                orb,
                strength,
                nature: aspect_nature(pos.graha),
            });
        }
    }
    aspects
}

/// Does `source` cast any aspect onto `target_house`?
pub fn aspects_house(chart: &BirthChart, source: Graha, target_house: u8) -> bool {
    chart.position(source).is_some_and(|pos| {
        aspect_kinds(source)
            .iter()
            .any(|&k| aspect_target(pos.house, k) == target_house)
    })
}

/// A mutual aspect between two planets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MutualAspect {
    pub a: Graha,
    pub b: Graha,
    /// Combined 0-1 strength of the two directions.
    pub strength: f64,
}

/// Detect a mutual aspect: each planet aspects the other's house.
///
/// Both directions are computed independently; A aspecting B does not imply
/// B aspects A.
pub fn mutual_aspect(chart: &BirthChart, a: Graha, b: Graha) -> Option<MutualAspect> {
    let pos_a = chart.position(a)?;
    let pos_b = chart.position(b)?;
    let a_to_b = aspect_kinds(a)
        .iter()
        .find(|&&k| aspect_target(pos_a.house, k) == pos_b.house)
        .copied()?;
    let b_to_a = aspect_kinds(b)
        .iter()
        .find(|&&k| aspect_target(pos_b.house, k) == pos_a.house)
        .copied()?;

    let mut strength: f64 = 0.5;
    if a_to_b.is_trinal_special() {
        strength += 0.2;
    }
    if b_to_a.is_trinal_special() {
        strength += 0.2;
    }
    Some(MutualAspect {
        a,
        b,
        strength: strength.min(1.0),
    })
}

/// Natural friends of a graha (naisargika maitri, BPHS table).
fn natural_friends(graha: Graha) -> &'static [Graha] {
    match graha {
        Graha::Sun => &[Graha::Moon, Graha::Mars, Graha::Jupiter],
        Graha::Moon => &[Graha::Sun, Graha::Mercury],
        Graha::Mars => &[Graha::Sun, Graha::Moon, Graha::Jupiter],
        Graha::Mercury => &[Graha::Sun, Graha::Venus],
        Graha::Jupiter => &[Graha::Sun, Graha::Moon, Graha::Mars],
        Graha::Venus => &[Graha::Mercury, Graha::Saturn],
        Graha::Saturn => &[Graha::Mercury, Graha::Venus],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

fn pairing_bonus(a: Graha, b: Graha) -> f64 {
    let luminaries = |g: Graha| matches!(g, Graha::Sun | Graha::Moon);
    let benefic = |g: Graha| g.nature() == GrahaNature::Benefic;
    if luminaries(a) && luminaries(b) {
        0.5
    } else if benefic(a) && benefic(b) {
        0.4
    } else if (a == Graha::Jupiter && b == Graha::Mercury)
        || (a == Graha::Mercury && b == Graha::Jupiter)
    {
        0.3
    } else if !benefic(a) && !benefic(b) {
        0.2
    } else {
        0.1
    }
}

fn named_pair_boost(a: Graha, b: Graha) -> f64 {
    let pair = |x: Graha, y: Graha| (a == x && b == y) || (a == y && b == x);
    if pair(Graha::Jupiter, Graha::Venus) {
        0.8
    } else if pair(Graha::Sun, Graha::Moon) {
        0.6
    } else if pair(Graha::Mars, Graha::Saturn) {
        0.5
    } else if (a == Graha::Mercury && b.nature() == GrahaNature::Benefic && b != Graha::Mercury)
        || (b == Graha::Mercury && a.nature() == GrahaNature::Benefic && a != Graha::Mercury)
    {
        0.4
    } else {
        0.0
    }
}

/// Grand Trine: three planets pairwise ~120 deg apart within the orb.
pub fn has_grand_trine(chart: &BirthChart) -> bool {
    triple_pattern(chart, |ab, ac, bc| {
        near(ab, 120.0) && near(ac, 120.0) && near(bc, 120.0)
    })
}

/// T-Square: one opposition plus two squares within the orb.
pub fn has_t_square(chart: &BirthChart) -> bool {
    triple_pattern(chart, |ab, ac, bc| {
        (near(ab, 180.0) && near(ac, 90.0) && near(bc, 90.0))
            || (near(ac, 180.0) && near(ab, 90.0) && near(bc, 90.0))
            || (near(bc, 180.0) && near(ab, 90.0) && near(ac, 90.0))
    })
}

fn near(separation: f64, angle: f64) -> bool {
    (separation - angle).abs() <= PATTERN_ORB
}

fn triple_pattern(chart: &BirthChart, pred: impl Fn(f64, f64, f64) -> bool) -> bool {
    let n = chart.positions.len();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                let ab = angular_separation(
                    chart.positions[i].longitude,
                    chart.positions[j].longitude,
                );
                let ac = angular_separation(
                    chart.positions[i].longitude,
                    chart.positions[k].longitude,
                );
                let bc = angular_separation(
                    chart.positions[j].longitude,
                    chart.positions[k].longitude,
                );
                if pred(ab, ac, bc) {
                    return true;
                }
            }
        }
    }
    false
}

/// Stellium: three or more planets sharing the house.
pub fn has_stellium(chart: &BirthChart, house: u8) -> bool {
    chart.planets_in_house(house).len() >= 3
}

/// Mutual-aspect bonus for an aspect, capped at 2.0.
fn mutual_bonus(chart: &BirthChart, aspect: &AspectRelation) -> f64 {
    let mut bonus = 0.0;
    let occupants: Vec<Graha> = chart
        .planets_in_house(aspect.target_house)
        .iter()
        .map(|p| p.graha)
        .collect();

    for &other in &occupants {
        if other == aspect.source {
            continue;
        }
        if let Some(mutual) = mutual_aspect(chart, aspect.source, other) {
            bonus += (0.3 + pairing_bonus(aspect.source, other)) * mutual.strength;
        }
        bonus += named_pair_boost(aspect.source, other);
        if natural_friends(aspect.source).contains(&other) {
            bonus += 0.2;
        }
    }

    if has_grand_trine(chart) {
        bonus += 0.6;
    }
    if has_t_square(chart) {
        bonus += 0.3;
    }
    if has_stellium(chart, aspect.target_house) {
        bonus += 0.4;
    }

    bonus.min(MUTUAL_BONUS_CAP)
}

fn dignity_factor(dignity: Dignity) -> f64 {
    match dignity {
        Dignity::Exalted => 2.0,
        Dignity::Moolatrikona | Dignity::OwnSign => 1.5,
        Dignity::Neutral => 0.8,
        Dignity::Debilitated => 0.3,
    }
}

fn nature_factor(graha: Graha) -> f64 {
    match graha {
        Graha::Jupiter => 1.3,
        Graha::Saturn => 1.2,
        Graha::Mars | Graha::Venus | Graha::Rahu => 1.1,
        Graha::Sun => 1.0,
        Graha::Moon | Graha::Ketu => 0.9,
        Graha::Mercury => 0.8,
    }
}

/// Weight of the aspecting planet's own house position.
///
/// Kendra strongest, then Trikona, then Upachaya; houses 8 and 12 weigh
/// negatively.
fn house_weight(house: u8) -> f64 {
    match house {
        1 | 4 | 7 | 10 => 1.0,
        5 | 9 => 0.8,
        3 | 6 | 11 => 0.6,
        8 | 12 => -0.5,
        2 => 0.3,
        _ => 0.0,
    }
}

/// Score an aspect in detail on the 1-10 scale.
pub fn detailed_strength(chart: &BirthChart, aspect: &AspectRelation) -> AspectStrength {
    let mut adjustments = Vec::new();
    let mut total = BASE_DETAILED_STRENGTH;

    let source_pos = chart.position(aspect.source);

    let dignity = source_pos
        .map(|p| dignity_from_longitude(p.graha, p.longitude).dignity)
        .unwrap_or(Dignity::Neutral);
    let dignity_adj = dignity_factor(dignity) * 2.0;
    total += dignity_adj;
    adjustments.push(Adjustment {
        factor: "planetary dignity",
        value: dignity_adj,
    });

    let kind_adj = aspect.kind.type_factor() * 1.5;
    total += kind_adj;
    adjustments.push(Adjustment {
        factor: "aspect kind",
        value: kind_adj,
    });

    let nature_adj = (nature_factor(aspect.source) - 1.0) * 2.0;
    total += nature_adj;
    adjustments.push(Adjustment {
        factor: "planet nature",
        value: nature_adj,
    });

    if let Some(pos) = source_pos {
        let house_adj = house_weight(pos.house);
        total += house_adj;
        adjustments.push(Adjustment {
            factor: "house position",
            value: house_adj,
        });

        if pos.is_retrograde {
            total += 0.5;
            adjustments.push(Adjustment {
                factor: "retrograde",
                value: 0.5,
            });
        }

        if let Some(sun) = chart.position(Graha::Sun) {
            if let Some(combustion) =
                check_combustion(pos.graha, pos.longitude, sun.longitude, pos.is_retrograde)
            {
                let penalty = combustion.penalty();
                total -= penalty;
                adjustments.push(Adjustment {
                    factor: "combustion",
                    value: -penalty,
                });
            }
        }
    }

    let mutual = mutual_bonus(chart, aspect);
    if mutual > 0.0 {
        total += mutual;
        adjustments.push(Adjustment {
            factor: "mutual aspect",
            value: mutual,
        });
    }

    let final_strength = total.clamp(1.0, 10.0);
    debug!(
        source = %aspect.source,
        target_house = aspect.target_house,
        strength = final_strength,
        "scored aspect"
    );
    AspectStrength {
        final_strength,
        level: StrengthLevel::from_strength(final_strength),
        adjustments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_base::chart::Ascendant;

    fn chart_with(positions: Vec<(Graha, f64)>) -> BirthChart {
        BirthChart::new(
            Ascendant::from_longitude(0.0),
            positions
                .into_iter()
                .map(|(g, lon)| (g, lon, false, None))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn aspect_target_wraps() {
        assert_eq!(aspect_target(1, AspectKind::Seventh), 7);
        assert_eq!(aspect_target(7, AspectKind::Seventh), 1);
        assert_eq!(aspect_target(10, AspectKind::MarsFourth), 1);
        assert_eq!(aspect_target(12, AspectKind::SaturnThird), 2);
        assert_eq!(aspect_target(5, AspectKind::JupiterNinth), 1);
    }

    #[test]
    fn seventh_aspect_for_every_planet() {
        // The 7th aspect must be detected for every graha, not just the
        // special-aspect planets.
        for (i, g) in jyotish_base::graha::ALL_GRAHAS.into_iter().enumerate() {
            // place the graha in house 1, a probe far away to avoid overlap
            let chart = chart_with(vec![(g, 5.0 + i as f64)]);
            let aspects = aspects_on_house(&chart, 7);
            assert!(
                aspects.iter().any(|a| a.source == g && a.kind == AspectKind::Seventh),
                "{g} must cast the 7th aspect"
            );
        }
    }

    #[test]
    fn mars_special_aspects() {
        // Mars in house 1 aspects houses 4, 7, 8
        let chart = chart_with(vec![(Graha::Mars, 10.0)]);
        assert!(aspects_house(&chart, Graha::Mars, 4));
        assert!(aspects_house(&chart, Graha::Mars, 7));
        assert!(aspects_house(&chart, Graha::Mars, 8));
        assert!(!aspects_house(&chart, Graha::Mars, 5));
    }

    #[test]
    fn jupiter_special_aspects() {
        let chart = chart_with(vec![(Graha::Jupiter, 10.0)]);
        assert!(aspects_house(&chart, Graha::Jupiter, 5));
        assert!(aspects_house(&chart, Graha::Jupiter, 7));
        assert!(aspects_house(&chart, Graha::Jupiter, 9));
        assert!(!aspects_house(&chart, Graha::Jupiter, 4));
    }

    #[test]
    fn saturn_special_aspects() {
        let chart = chart_with(vec![(Graha::Saturn, 10.0)]);
        assert!(aspects_house(&chart, Graha::Saturn, 3));
        assert!(aspects_house(&chart, Graha::Saturn, 7));
        assert!(aspects_house(&chart, Graha::Saturn, 10));
        assert!(!aspects_house(&chart, Graha::Saturn, 9));
    }

    #[test]
    fn node_trinal_aspects() {
        let chart = chart_with(vec![(Graha::Rahu, 10.0)]);
        assert!(aspects_house(&chart, Graha::Rahu, 5));
        assert!(aspects_house(&chart, Graha::Rahu, 9));
    }

    #[test]
    fn occupant_does_not_aspect_own_house() {
        let chart = chart_with(vec![(Graha::Sun, 10.0)]);
        assert!(aspects_on_house(&chart, 1).is_empty());
    }

    #[test]
    fn base_strengths_follow_table() {
        assert!((AspectKind::Seventh.base_strength() - 75.0).abs() < 1e-12);
        assert!((AspectKind::JupiterFifth.base_strength() - 80.0).abs() < 1e-12);
        assert!((AspectKind::MarsEighth.base_strength() - 70.0).abs() < 1e-12);
        assert!((AspectKind::SaturnTenth.base_strength() - 75.0).abs() < 1e-12);
    }

    #[test]
    fn planet_directed_orb_decays_strength() {
        // Sun at 0 in house 1; Moon at 190 in house 7: exact 7th would be
        // 180, so orb = 10 and strength floors toward 20.
        let chart = chart_with(vec![(Graha::Sun, 0.0), (Graha::Moon, 190.0)]);
        let aspects = aspects_on_planet(&chart, Graha::Moon);
        let sun = aspects.iter().find(|a| a.source == Graha::Sun).unwrap();
        assert!((sun.orb - 10.0).abs() < 1e-10);
        assert!((sun.strength - 25.0).abs() < 1e-10); // 75 - 50
    }

    #[test]
    fn exact_opposition_keeps_full_strength() {
        let chart = chart_with(vec![(Graha::Sun, 0.0), (Graha::Moon, 180.0)]);
        let aspects = aspects_on_planet(&chart, Graha::Moon);
        let sun = aspects.iter().find(|a| a.source == Graha::Sun).unwrap();
        assert!(sun.orb.abs() < 1e-10);
        assert!((sun.strength - 75.0).abs() < 1e-10);
    }

    #[test]
    fn aspect_nature_classification() {
        assert_eq!(aspect_nature(Graha::Jupiter), AspectNature::Benefic);
        assert_eq!(aspect_nature(Graha::Mercury), AspectNature::Benefic);
        assert_eq!(aspect_nature(Graha::Moon), AspectNature::Mixed);
        assert_eq!(aspect_nature(Graha::Saturn), AspectNature::Malefic);
    }

    #[test]
    fn mutual_aspect_opposition() {
        // Two planets in opposite houses both cast the 7th at each other.
        let chart = chart_with(vec![(Graha::Sun, 10.0), (Graha::Moon, 190.0)]);
        let mutual = mutual_aspect(&chart, Graha::Sun, Graha::Moon).unwrap();
        assert!((mutual.strength - 0.5).abs() < 1e-12);
    }

    #[test]
    fn mutual_aspect_is_directional() {
        // Jupiter in house 1 casts the 5th onto house 5; a planet there
        // casts its 7th onto house 11, not house 1. No mutual aspect.
        let chart = chart_with(vec![(Graha::Jupiter, 10.0), (Graha::Sun, 130.0)]);
        assert!(aspects_house(&chart, Graha::Jupiter, 5));
        assert!(mutual_aspect(&chart, Graha::Jupiter, Graha::Sun).is_none());
    }

    #[test]
    fn grand_trine_detection() {
        let chart = chart_with(vec![
            (Graha::Sun, 0.0),
            (Graha::Jupiter, 120.0),
            (Graha::Moon, 241.0),
        ]);
        assert!(has_grand_trine(&chart));
    }

    #[test]
    fn grand_trine_requires_tight_orb() {
        let chart = chart_with(vec![
            (Graha::Sun, 0.0),
            (Graha::Jupiter, 120.0),
            (Graha::Moon, 250.0),
        ]);
        assert!(!has_grand_trine(&chart));
    }

    #[test]
    fn t_square_detection() {
        let chart = chart_with(vec![
            (Graha::Sun, 0.0),
            (Graha::Saturn, 180.0),
            (Graha::Mars, 90.0),
        ]);
        assert!(has_t_square(&chart));
    }

    #[test]
    fn stellium_detection() {
        let chart = chart_with(vec![
            (Graha::Sun, 10.0),
            (Graha::Mercury, 15.0),
            (Graha::Venus, 20.0),
        ]);
        assert!(has_stellium(&chart, 1));
        assert!(!has_stellium(&chart, 2));
    }

    #[test]
    fn detailed_strength_clamped() {
        let chart = chart_with(vec![(Graha::Jupiter, 95.0), (Graha::Sun, 275.0)]);
        let aspects = aspects_on_planet(&chart, Graha::Sun);
        for a in &aspects {
            let s = detailed_strength(&chart, a);
            assert!((1.0..=10.0).contains(&s.final_strength));
            assert_eq!(s.level, StrengthLevel::from_strength(s.final_strength));
        }
    }

    #[test]
    fn exalted_source_outscores_debilitated() {
        // Jupiter exalted in Cancer vs debilitated in Capricorn, same
        // relative house geometry (source house 4, target house 10).
        let exalted = chart_with(vec![(Graha::Jupiter, 95.0), (Graha::Sun, 275.0)]);
        let debilitated = chart_with(vec![(Graha::Jupiter, 275.0), (Graha::Sun, 95.0)]);
        let strong = detailed_strength(
            &exalted,
            &aspects_on_planet(&exalted, Graha::Sun)[0],
        );
        let weak = detailed_strength(
            &debilitated,
            &aspects_on_planet(&debilitated, Graha::Sun)[0],
        );
        assert!(strong.final_strength > weak.final_strength);
    }

    #[test]
    fn retrograde_bonus_applies() {
        let direct = chart_with(vec![(Graha::Saturn, 10.0), (Graha::Moon, 190.0)]);
        let retro = BirthChart::new(
            Ascendant::from_longitude(0.0),
            vec![
                (Graha::Saturn, 10.0, true, None),
                (Graha::Moon, 190.0, false, None),
            ],
        )
        .unwrap();
        let a_direct = &aspects_on_planet(&direct, Graha::Moon)[0];
        let a_retro = &aspects_on_planet(&retro, Graha::Moon)[0];
        let s_direct = detailed_strength(&direct, a_direct);
        let s_retro = detailed_strength(&retro, a_retro);
        assert!((s_retro.final_strength - s_direct.final_strength - 0.5).abs() < 1e-10);
    }

    #[test]
    fn strength_levels_banded() {
        assert_eq!(StrengthLevel::from_strength(9.0), StrengthLevel::Exceptional);
        assert_eq!(StrengthLevel::from_strength(8.0), StrengthLevel::VeryStrong);
        assert_eq!(StrengthLevel::from_strength(7.0), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_strength(6.0), StrengthLevel::Good);
        assert_eq!(StrengthLevel::from_strength(5.0), StrengthLevel::Moderate);
        assert_eq!(StrengthLevel::from_strength(4.0), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_strength(2.0), StrengthLevel::VeryWeak);
    }
}
