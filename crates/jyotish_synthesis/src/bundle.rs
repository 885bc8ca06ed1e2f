//! Analysis bundle: the synthesis engine's input document.
//!
//! Upstream modules produce the individual analyses; sibling sections the
//! core does not compute (houses, arudha, navamsa, dasha, yogas) arrive as
//! structured input documents with the numeric fields the synthesis rules
//! and coherence checks consume.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use jyotish_base::dignity::DignityInfo;
use jyotish_base::graha::{ALL_GRAHAS, Graha};
use jyotish_base::rashi::Rashi;
use jyotish_engine::drishti::AspectRelation;
use jyotish_engine::lagna::LagnaLordAnalysis;

/// Sections a complete analysis must carry.
pub const REQUIRED_SECTIONS: [&str; 8] = [
    "birth_data", "lagna", "houses", "aspects", "arudha", "navamsa", "dasha", "yogas",
];

/// Birth-data section marker with the fields synthesis narrates from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BirthDataSection {
    pub has_time: bool,
    pub has_location: bool,
}

/// Lagna section: the lagna-lord analysis plus an overall strength.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LagnaSection {
    pub analysis: LagnaLordAnalysis,
    /// Overall lagna strength 0-100.
    pub strength: f64,
}

impl LagnaSection {
    pub fn sign(&self) -> Rashi {
        self.analysis.lagna_sign
    }
}

/// One house's sub-analysis, produced by the sibling house module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseAnalysis {
    pub house: u8,
    /// House strength 0-100.
    pub strength: f64,
    pub lord: Option<Graha>,
    #[serde(default)]
    pub occupants: Vec<Graha>,
}

/// Houses section: per-house analyses keyed 1-12.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HousesSection {
    pub houses: BTreeMap<u8, HouseAnalysis>,
}

impl HousesSection {
    pub fn strength(&self, house: u8) -> Option<f64> {
        self.houses.get(&house).map(|h| h.strength)
    }

    /// Mean strength across a set of houses, when all are present.
    pub fn mean_strength(&self, houses: &[u8]) -> Option<f64> {
        let strengths: Vec<f64> = houses
            .iter()
            .filter_map(|h| self.strength(*h))
            .collect();
        if strengths.len() == houses.len() {
            Some(strengths.iter().sum::<f64>() / strengths.len() as f64)
        } else {
            None
        }
    }
}

/// Aspects section: the chart-wide aspect list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AspectsSection {
    pub aspects: Vec<AspectRelation>,
}

/// Arudha section: public-image analysis from the sibling module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArudhaSection {
    pub sign: Rashi,
    /// Public standing 0-100.
    pub public_standing: f64,
    #[serde(default)]
    pub image_traits: Vec<String>,
}

/// Navamsa section: D9 confirmation strengths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavamsaSection {
    /// Per-planet navamsa strength 0-100.
    pub planet_strengths: BTreeMap<Graha, f64>,
    /// Marriage indication 0-100 from the 7th house of the navamsa.
    pub marriage_indication: f64,
}

/// One mahadasha period of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    pub lord: Graha,
    pub start_age: f64,
    pub years: f64,
}

/// Dasha section: the Vimshottari timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaSection {
    pub current_lord: Graha,
    #[serde(default)]
    pub timeline: Vec<DashaPeriod>,
}

/// Classification of a detected yoga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YogaKind {
    Raja,
    Dhana,
    Spiritual,
    Challenge,
    Special,
}

/// One detected yoga.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YogaFinding {
    pub name: String,
    pub kind: YogaKind,
    /// Strength 0-100.
    pub strength: f64,
}

/// Yogas section: all detected combinations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YogaSection {
    pub yogas: Vec<YogaFinding>,
}

impl YogaSection {
    pub fn count_of(&self, kind: YogaKind) -> usize {
        self.yogas.iter().filter(|y| y.kind == kind).count()
    }
}

/// Per-planet assessment from the dignity/strength engines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetAssessment {
    pub dignity: DignityInfo,
    pub sign: Rashi,
    pub house: u8,
    /// Shad Bala pass flag, when the planet was scored.
    #[serde(default)]
    pub shadbala_strong: Option<bool>,
}

/// Everything the synthesis engine joins over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisBundle {
    pub birth_data: Option<BirthDataSection>,
    pub lagna: Option<LagnaSection>,
    pub houses: Option<HousesSection>,
    pub aspects: Option<AspectsSection>,
    pub arudha: Option<ArudhaSection>,
    pub navamsa: Option<NavamsaSection>,
    pub dasha: Option<DashaSection>,
    pub yogas: Option<YogaSection>,
    /// Per-planet dignities for the 9 bodies.
    pub dignities: BTreeMap<Graha, PlanetAssessment>,
}

impl AnalysisBundle {
    /// True when the named required section is present.
    pub fn has_section(&self, name: &str) -> bool {
        match name {
            "birth_data" => self.birth_data.is_some(),
            "lagna" => self.lagna.is_some(),
            "houses" => self.houses.is_some(),
            "aspects" => self.aspects.is_some(),
            "arudha" => self.arudha.is_some(),
            "navamsa" => self.navamsa.is_some(),
            "dasha" => self.dasha.is_some(),
            "yogas" => self.yogas.is_some(),
            _ => false,
        }
    }

    /// Planets missing from the dignity table.
    pub fn missing_planets(&self) -> Vec<Graha> {
        ALL_GRAHAS
            .into_iter()
            .filter(|g| !self.dignities.contains_key(g))
            .collect()
    }

    /// Houses 1-12 missing from the houses section (all when absent).
    pub fn missing_houses(&self) -> Vec<u8> {
        match &self.houses {
            Some(section) => (1..=12).filter(|h| !section.houses.contains_key(h)).collect(),
            None => (1..=12).collect(),
        }
    }
}
