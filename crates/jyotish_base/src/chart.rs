//! Immutable birth-chart snapshot.
//!
//! Created once per analysis request and read by every module; never
//! mutated. Longitude is the single source of truth: sign and house are
//! re-derived from it at construction, never trusted from the input
//! document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::amsha::{Amsha, amsha_longitude};
use crate::bhava::house_from_longitude;
use crate::error::ChartError;
use crate::graha::Graha;
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::{angular_separation, normalize_360};

/// Ascendant (lagna) of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ascendant {
    pub sign: Rashi,
    pub longitude: f64,
}

impl Ascendant {
    /// Build from a longitude; the sign is derived.
    pub fn from_longitude(longitude: f64) -> Ascendant {
        let lon = normalize_360(longitude);
        Ascendant {
            sign: rashi_from_longitude(lon).rashi,
            longitude: lon,
        }
    }

    /// Build from a sign alone; the longitude is the sign's start degree.
    pub fn from_sign(sign: Rashi) -> Ascendant {
        Ascendant {
            sign,
            longitude: sign.index() as f64 * 30.0,
        }
    }
}

/// A single planet's placement, derived from its longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub graha: Graha,
    /// Sidereal longitude in [0, 360).
    pub longitude: f64,
    /// Occupied sign, derived from longitude.
    pub sign: Rashi,
    /// Degrees within the sign [0, 30).
    pub degrees_in_sign: f64,
    /// Whole-sign house 1-12 relative to the ascendant.
    pub house: u8,
    #[serde(default)]
    pub is_retrograde: bool,
    /// Daily motion in degrees, when the ephemeris supplied it.
    #[serde(default)]
    pub speed: Option<f64>,
}

impl PlanetPosition {
    /// Derive a position from graha + longitude relative to an ascendant.
    pub fn derive(
        graha: Graha,
        longitude: f64,
        ascendant_longitude: f64,
        is_retrograde: bool,
        speed: Option<f64>,
    ) -> PlanetPosition {
        let lon = normalize_360(longitude);
        let info = rashi_from_longitude(lon);
        PlanetPosition {
            graha,
            longitude: lon,
            sign: info.rashi,
            degrees_in_sign: info.degrees_in_rashi,
            house: house_from_longitude(lon, ascendant_longitude),
            is_retrograde,
            speed,
        }
    }
}

/// Birth date/time fields, used only by temporal (Kala) strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInfo {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

/// Positions of one divisional chart, keyed by graha.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DivisionalChart {
    pub positions: Vec<DivisionalPosition>,
}

/// A planet's longitude within a divisional chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DivisionalPosition {
    pub graha: Graha,
    pub longitude: f64,
}

/// Raw chart document as received from the external caller.
///
/// `sign` and `house` fields on positions are accepted but re-derived;
/// the ascendant may arrive as a longitude, a sign name, or both.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartDocument {
    pub ascendant: Option<AscendantDocument>,
    #[serde(default, alias = "planetaryPositions", alias = "planetary_positions")]
    pub positions: Vec<PositionDocument>,
    #[serde(default, alias = "divisionalCharts", alias = "divisional_charts")]
    pub divisional: BTreeMap<String, DivisionalChart>,
    #[serde(default, alias = "birthInfo", alias = "birth_info")]
    pub birth: Option<BirthInfo>,
}

/// Ascendant fields of a chart document.
#[derive(Debug, Clone, Deserialize)]
pub struct AscendantDocument {
    #[serde(default)]
    pub sign: Option<Rashi>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// One planetary position of a chart document.
#[derive(Debug, Clone, Deserialize)]
pub struct PositionDocument {
    #[serde(alias = "planet")]
    pub graha: Graha,
    pub longitude: f64,
    #[serde(default, alias = "isRetrograde", alias = "is_retrograde")]
    pub retrograde: bool,
    #[serde(default)]
    pub speed: Option<f64>,
}

/// Immutable chart snapshot consumed by every analysis module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChartDocument")]
pub struct BirthChart {
    pub ascendant: Ascendant,
    pub positions: Vec<PlanetPosition>,
    /// Divisional charts keyed by division name ("d9", "d3", ...).
    pub divisional: BTreeMap<String, DivisionalChart>,
    pub birth: Option<BirthInfo>,
}

impl BirthChart {
    /// Validate and derive a snapshot from ascendant + positions.
    ///
    /// Missing ascendant data or an empty position list is a structural
    /// error; the analysis for this chart cannot proceed.
    pub fn new(
        ascendant: Ascendant,
        positions: Vec<(Graha, f64, bool, Option<f64>)>,
    ) -> Result<BirthChart, ChartError> {
        if positions.is_empty() {
            return Err(ChartError::MissingPositions);
        }
        let derived = positions
            .into_iter()
            .map(|(graha, lon, retro, speed)| {
                PlanetPosition::derive(graha, lon, ascendant.longitude, retro, speed)
            })
            .collect();
        Ok(BirthChart {
            ascendant,
            positions: derived,
            divisional: BTreeMap::new(),
            birth: None,
        })
    }

    /// Attach a divisional chart under its division key.
    pub fn with_divisional(mut self, key: &str, chart: DivisionalChart) -> BirthChart {
        self.divisional.insert(key.to_ascii_lowercase(), chart);
        self
    }

    /// Attach birth date/time fields.
    pub fn with_birth_info(mut self, birth: BirthInfo) -> BirthChart {
        self.birth = Some(birth);
        self
    }

    /// Position of a graha, if present in the snapshot.
    pub fn position(&self, graha: Graha) -> Option<&PlanetPosition> {
        self.positions.iter().find(|p| p.graha == graha)
    }

    /// Position of a graha, or the per-planet error.
    pub fn require(&self, graha: Graha) -> Result<&PlanetPosition, ChartError> {
        self.position(graha).ok_or(ChartError::MissingGraha(graha))
    }

    /// All positions occupying a house.
    pub fn planets_in_house(&self, house: u8) -> Vec<&PlanetPosition> {
        self.positions.iter().filter(|p| p.house == house).collect()
    }

    /// House of a graha, if present.
    pub fn house_of(&self, graha: Graha) -> Option<u8> {
        self.position(graha).map(|p| p.house)
    }

    /// Longitude of a graha in a divisional chart.
    ///
    /// Uses the snapshot's precomputed divisional chart when the document
    /// carried one; otherwise derives it from the D1 longitude.
    pub fn divisional_longitude(&self, graha: Graha, amsha: Amsha) -> Option<f64> {
        if let Some(chart) = self.divisional.get(amsha.key()) {
            if let Some(pos) = chart.positions.iter().find(|p| p.graha == graha) {
                return Some(normalize_360(pos.longitude));
            }
        }
        self.position(graha)
            .map(|p| amsha_longitude(p.longitude, amsha))
    }

    /// Navamsa sign of a graha.
    pub fn navamsa_sign(&self, graha: Graha) -> Option<Rashi> {
        self.divisional_longitude(graha, Amsha::D9)
            .map(|lon| rashi_from_longitude(lon).rashi)
    }

    /// Moon-Sun elongation in [0, 360), when both are present.
    pub fn moon_sun_elongation(&self) -> Option<f64> {
        let moon = self.position(Graha::Moon)?;
        let sun = self.position(Graha::Sun)?;
        Some(normalize_360(moon.longitude - sun.longitude))
    }

    /// Angular separation between two grahas, when both are present.
    pub fn separation(&self, a: Graha, b: Graha) -> Option<f64> {
        Some(angular_separation(
            self.position(a)?.longitude,
            self.position(b)?.longitude,
        ))
    }
}

impl TryFrom<ChartDocument> for BirthChart {
    type Error = ChartError;

    fn try_from(doc: ChartDocument) -> Result<Self, Self::Error> {
        let asc_doc = doc.ascendant.ok_or(ChartError::MissingAscendant)?;
        let ascendant = match (asc_doc.longitude, asc_doc.sign) {
            (Some(lon), _) => Ascendant::from_longitude(lon),
            (None, Some(sign)) => Ascendant::from_sign(sign),
            (None, None) => return Err(ChartError::MissingAscendant),
        };
        let chart = BirthChart::new(
            ascendant,
            doc.positions
                .into_iter()
                .map(|p| (p.graha, p.longitude, p.retrograde, p.speed))
                .collect(),
        )?;
        let divisional = doc
            .divisional
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        Ok(BirthChart {
            divisional,
            birth: doc.birth,
            ..chart
        })
    }
}
