//! Lagna-lord placement analysis.
//!
//! Resolves the ascendant's ruling planet and analyzes its placement:
//! dignity, house effects, conjunctions, received aspects, Neecha Bhanga
//! cancellation when debilitated, sensitive-degree checks, life-area
//! effects, dasha timing, and remedial measures.

use serde::{Deserialize, Serialize};
use tracing::debug;

use jyotish_base::bhava::{
    BhavaGroup, bhava_group, house_significations, is_dusthana, is_kendra, is_trikona,
};
use jyotish_base::chart::{BirthChart, PlanetPosition};
use jyotish_base::dignity::{
    Dignity, DignityInfo, dignity_from_longitude, exaltation_sign, own_signs,
};
use jyotish_base::error::ChartError;
use jyotish_base::graha::{DASHA_SEQUENCE, Graha, GrahaNature, rashi_lord};
use jyotish_base::rashi::{Rashi, rashi_from_longitude};
use jyotish_base::util::{angular_separation, normalize_360};

use crate::drishti::{AspectNature, AspectRelation, aspects_house, aspects_on_planet};

// ---------------------------------------------------------------------------
// House effects
// ---------------------------------------------------------------------------

/// Effect of the lagna lord's house placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseEffects {
    pub house: u8,
    pub group: BhavaGroup,
    /// Fixed strength band for the group.
    pub strength: f64,
    pub significations: Vec<String>,
    pub description: String,
    /// Placements up to the 4th house tend to manifest early in life.
    pub early_manifestation: bool,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Classify the lagna lord's house into its strength band.
///
/// Kendra placements are checked before Trikona, so house 1 reports the
/// Kendra band.
pub fn analyze_house_effects(house: u8) -> HouseEffects {
    let (strength, description) = if is_kendra(house) {
        (
            80.0,
            format!("Lagna lord in house {house}: strong Kendra placement brings stability and material success"),
        )
    } else if is_trikona(house) {
        (
            85.0,
            format!("Lagna lord in house {house}: excellent Trikona placement brings fortune and growth"),
        )
    } else if is_dusthana(house) {
        (
            40.0,
            format!("Lagna lord in house {house}: challenging Dusthana placement requires effort to overcome obstacles"),
        )
    } else {
        (
            65.0,
            format!("Lagna lord in house {house}: moderate placement with mixed results"),
        )
    };
    HouseEffects {
        house,
        group: bhava_group(house),
        strength,
        significations: owned(house_significations(house)),
        description,
        early_manifestation: house <= 4,
    }
}

// ---------------------------------------------------------------------------
// Conjunctions
// ---------------------------------------------------------------------------

/// Nature of a two-planet conjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConjunctionNature {
    HighlyBenefic,
    Mixed,
    Challenging,
}

/// A conjunction partner of the lagna lord.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conjunction {
    pub graha: Graha,
    pub orb: f64,
    /// Strength inversely proportional to orb: 100 at <=1 deg down to 20
    /// beyond 8 deg.
    pub strength: f64,
    pub nature: ConjunctionNature,
}

/// Conjunction strength band for an orb.
pub fn conjunction_strength(orb: f64) -> f64 {
    if orb <= 1.0 {
        100.0
    } else if orb <= 3.0 {
        80.0
    } else if orb <= 5.0 {
        60.0
    } else if orb <= 8.0 {
        40.0
    } else {
        20.0
    }
}

fn conjunction_nature(a: Graha, b: Graha) -> ConjunctionNature {
    match (a.nature(), b.nature()) {
        (GrahaNature::Benefic, GrahaNature::Benefic) => ConjunctionNature::HighlyBenefic,
        (GrahaNature::Malefic, GrahaNature::Malefic) => ConjunctionNature::Challenging,
        _ => ConjunctionNature::Mixed,
    }
}

/// Find planets conjunct the lord: same house, within a 10-degree orb.
pub fn analyze_conjunctions(chart: &BirthChart, lord: &PlanetPosition) -> Vec<Conjunction> {
    let mut conjunctions: Vec<Conjunction> = chart
        .positions
        .iter()
        .filter(|p| p.graha != lord.graha && p.house == lord.house)
        .filter_map(|p| {
            let orb = angular_separation(p.longitude, lord.longitude);
            (orb <= 10.0).then(|| Conjunction {
                graha: p.graha,
                orb,
                strength: conjunction_strength(orb),
                nature: conjunction_nature(lord.graha, p.graha),
            })
        })
        .collect();
    conjunctions.sort_by(|a, b| a.orb.total_cmp(&b.orb));
    conjunctions
}

// ---------------------------------------------------------------------------
// Neecha Bhanga
// ---------------------------------------------------------------------------

/// One of the seven debilitation-cancellation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeechaBhangaRule {
    /// Dispositor (debilitation-sign lord) in Kendra from ascendant or Moon.
    DispositorInKendra,
    /// Exaltation-sign lord in Kendra from the ascendant.
    ExaltationLordInKendra,
    /// Aspect on the planet from its dispositor or exaltation-sign lord.
    AspectFromDignityLord,
    /// Conjunction with its dispositor or exaltation-sign lord.
    ConjunctDignityLord,
    /// Sign exchange (Parivartana) with the dispositor.
    Parivartana,
    /// Exalted in the Navamsa.
    ExaltedInNavamsa,
    /// In own sign in the Navamsa.
    OwnSignInNavamsa,
}

impl NeechaBhangaRule {
    /// Cancellation strength contributed by this rule.
    pub const fn strength(self) -> f64 {
        match self {
            Self::DispositorInKendra => 85.0,
            Self::ExaltationLordInKendra => 80.0,
            Self::AspectFromDignityLord => 75.0,
            Self::ConjunctDignityLord => 70.0,
            Self::Parivartana => 95.0,
            Self::ExaltedInNavamsa => 90.0,
            Self::OwnSignInNavamsa => 80.0,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::DispositorInKendra => "dispositor in Kendra from ascendant or Moon",
            Self::ExaltationLordInKendra => "exaltation-sign lord in Kendra",
            Self::AspectFromDignityLord => "aspected by its dispositor or exaltation lord",
            Self::ConjunctDignityLord => "conjunct its dispositor or exaltation lord",
            Self::Parivartana => "sign exchange with dispositor",
            Self::ExaltedInNavamsa => "exalted in Navamsa",
            Self::OwnSignInNavamsa => "own sign in Navamsa",
        }
    }
}

/// Neecha Bhanga finding for a debilitated planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeechaBhanga {
    pub present: bool,
    pub rules: Vec<NeechaBhangaRule>,
    /// Maximum strength across satisfied rules; zero when none apply.
    pub strength: f64,
}

fn kendra_from(house: u8, reference_house: u8) -> bool {
    let offset = (house as i16 - reference_house as i16).rem_euclid(12) as u8 + 1;
    matches!(offset, 1 | 4 | 7 | 10)
}

/// Check the seven cancellation rules for a debilitated planet.
///
/// The presence flag is true if any rule is satisfied; the overall
/// strength is the maximum across satisfied rules.
pub fn check_neecha_bhanga(chart: &BirthChart, position: &PlanetPosition) -> NeechaBhanga {
    let mut rules = Vec::new();
    let dispositor = rashi_lord(position.sign);
    let exalt_lord = exaltation_sign(position.graha).map(rashi_lord);

    // Rule 1: dispositor in Kendra from ascendant or from the Moon
    if let Some(disp_pos) = chart.position(dispositor) {
        let from_asc = is_kendra(disp_pos.house);
        let from_moon = chart
            .house_of(Graha::Moon)
            .is_some_and(|moon_house| kendra_from(disp_pos.house, moon_house));
        if from_asc || from_moon {
            rules.push(NeechaBhangaRule::DispositorInKendra);
        }
    }

    // Rule 2: exaltation-sign lord in Kendra from the ascendant
    if let Some(lord) = exalt_lord {
        if chart.house_of(lord).is_some_and(is_kendra) {
            rules.push(NeechaBhangaRule::ExaltationLordInKendra);
        }
    }

    // Rules 3-4: aspect from / conjunction with a dignity lord
    let dignity_lords: Vec<Graha> = [Some(dispositor), exalt_lord]
        .into_iter()
        .flatten()
        .filter(|&g| g != position.graha)
        .collect();
    if dignity_lords
        .iter()
        .any(|&lord| aspects_house(chart, lord, position.house))
    {
        rules.push(NeechaBhangaRule::AspectFromDignityLord);
    }
    if dignity_lords
        .iter()
        .any(|&lord| chart.house_of(lord) == Some(position.house))
    {
        rules.push(NeechaBhangaRule::ConjunctDignityLord);
    }

    // Rule 5: Parivartana - the dispositor stands in a sign the planet owns
    if dispositor != position.graha {
        if let Some(disp_pos) = chart.position(dispositor) {
            if own_signs(position.graha).contains(&disp_pos.sign) {
                rules.push(NeechaBhangaRule::Parivartana);
            }
        }
    }

    // Rules 6-7: Navamsa dignity
    if let Some(d9_sign) = chart.navamsa_sign(position.graha) {
        if exaltation_sign(position.graha) == Some(d9_sign) {
            rules.push(NeechaBhangaRule::ExaltedInNavamsa);
        }
        if own_signs(position.graha).contains(&d9_sign) {
            rules.push(NeechaBhangaRule::OwnSignInNavamsa);
        }
    }

    let strength = rules.iter().map(|r| r.strength()).fold(0.0, f64::max);
    NeechaBhanga {
        present: !rules.is_empty(),
        rules,
        strength,
    }
}

// ---------------------------------------------------------------------------
// Sensitive degrees
// ---------------------------------------------------------------------------

/// Gandanta: the 3-degree bands around the water-fire sign junctions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GandantaCheck {
    pub is_gandanta: bool,
    /// Junction label when inside a band.
    pub junction: Option<String>,
}

/// Check a longitude for Gandanta placement.
///
/// Bands: Pisces/Aries 357-3, Cancer/Leo 117-123, Scorpio/Sagittarius
/// 237-243 (3 degrees either side of each junction).
pub fn check_gandanta(longitude: f64) -> GandantaCheck {
    let lon = normalize_360(longitude);
    let junction = if !(3.0..357.0).contains(&lon) {
        Some("Pisces-Aries".to_owned())
    } else if (117.0..=123.0).contains(&lon) {
        Some("Cancer-Leo".to_owned())
    } else if (237.0..=243.0).contains(&lon) {
        Some("Scorpio-Sagittarius".to_owned())
    } else {
        None
    };
    GandantaCheck {
        is_gandanta: junction.is_some(),
        junction,
    }
}

/// Pushkara Bhaga degree (1-based, within the sign) for each rashi,
/// Aries through Pisces.
pub const PUSHKARA_BHAGA_DEGREES: [u8; 12] = [21, 14, 18, 8, 19, 9, 24, 11, 23, 14, 19, 9];

/// Check a longitude for Pushkara Bhaga placement.
///
/// The bhaga N covers the degree span [N-1, N) within the sign.
pub fn is_pushkara_bhaga(longitude: f64) -> bool {
    let info = rashi_from_longitude(longitude);
    let bhaga = PUSHKARA_BHAGA_DEGREES[info.rashi_index as usize] as f64;
    info.degrees_in_rashi >= bhaga - 1.0 && info.degrees_in_rashi < bhaga
}

// ---------------------------------------------------------------------------
// Life effects
// ---------------------------------------------------------------------------

/// Personality traits associated with a house placement.
pub const fn personality_traits(house: u8) -> &'static [&'static str] {
    match house {
        1 => &["self-focused", "independent", "leadership qualities"],
        2 => &["family-oriented", "practical", "value-conscious"],
        3 => &["communicative", "brave", "initiative-taking"],
        4 => &["emotional", "home-loving", "nurturing"],
        5 => &["creative", "intelligent", "romantic"],
        6 => &["service-minded", "health-conscious", "competitive"],
        7 => &["diplomatic", "partnership-oriented", "social"],
        8 => &["mysterious", "transformative", "research-oriented"],
        9 => &["philosophical", "spiritual", "fortunate"],
        10 => &["ambitious", "career-focused", "authoritative"],
        11 => &["friendly", "goal-oriented", "networking"],
        12 => &["spiritual", "introspective", "sacrificing"],
        _ => &["balanced"],
    }
}

/// Career fields suited to each lagna lord.
pub const fn career_fields(graha: Graha) -> &'static [&'static str] {
    match graha {
        Graha::Sun => &["government", "leadership", "medicine", "politics"],
        Graha::Moon => &["hospitality", "water-related", "public service", "caring professions"],
        Graha::Mars => &["military", "engineering", "sports", "real estate"],
        Graha::Mercury => &["communication", "commerce", "writing", "technology"],
        Graha::Jupiter => &["teaching", "law", "spirituality", "finance"],
        Graha::Venus => &["arts", "beauty", "luxury goods", "entertainment"],
        Graha::Saturn => &["industry", "mining", "construction", "research"],
        Graha::Rahu | Graha::Ketu => &["unconventional fields", "research", "foreign work"],
    }
}

/// Life-area effect tables keyed off house and planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeEffects {
    pub personality: Vec<String>,
    /// Constitution assessment from the house placement.
    pub health_robust: bool,
    pub career_fields: Vec<String>,
    pub leadership_potential: bool,
    pub wealth_potential: bool,
    pub wealth_stable: bool,
    pub partnership_focused: bool,
}

pub fn analyze_life_effects(graha: Graha, house: u8) -> LifeEffects {
    LifeEffects {
        personality: owned(personality_traits(house)),
        health_robust: matches!(house, 1 | 4 | 5 | 9 | 10 | 11),
        career_fields: owned(career_fields(graha)),
        leadership_potential: is_kendra(house),
        wealth_potential: matches!(house, 1 | 2 | 5 | 9 | 11),
        wealth_stable: matches!(house, 1 | 4 | 10),
        partnership_focused: house == 7,
    }
}

// ---------------------------------------------------------------------------
// Dasha effects
// ---------------------------------------------------------------------------

/// Dasha-timing notes for the lagna lord's periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaEffects {
    pub duration_years: u8,
    /// 1-based position in the Vimshottari sequence.
    pub sequence_position: u8,
    pub high_priority: bool,
    pub key_areas: Vec<String>,
    pub challenging_period: bool,
}

pub fn analyze_dasha_effects(graha: Graha, house: u8) -> DashaEffects {
    let duration = graha.dasha_years();
    let sequence_position = DASHA_SEQUENCE
        .iter()
        .position(|&g| g == graha)
        .map(|i| i as u8 + 1)
        .unwrap_or(0);
    DashaEffects {
        duration_years: duration,
        sequence_position,
        high_priority: duration > 15,
        key_areas: owned(house_significations(house)),
        challenging_period: is_dusthana(house),
    }
}

// ---------------------------------------------------------------------------
// Remedial measures
// ---------------------------------------------------------------------------

/// Gemstone prescription for a planet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gemstone {
    pub stone: String,
    pub metal: String,
    pub day: String,
}

/// Mantra prescription for a planet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mantra {
    pub text: String,
    pub repetitions: u32,
    pub day: String,
}

/// Charity prescription for a planet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charity {
    pub items: Vec<String>,
    pub day: String,
}

/// Fasting prescription for a planet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fasting {
    pub day: String,
    pub food: String,
}

/// Urgency of remedial measures, from placement strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemedyPriority {
    High,
    Medium,
    Low,
}

/// Remedial measures for strengthening the lagna lord.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemedialMeasures {
    pub gemstone: Gemstone,
    pub mantra: Mantra,
    pub charity: Charity,
    pub fasting: Fasting,
    pub priority: RemedyPriority,
}

pub fn gemstone_for(graha: Graha) -> Gemstone {
    let (stone, metal, day) = match graha {
        Graha::Sun => ("Ruby", "Gold", "Sunday"),
        Graha::Moon => ("Pearl", "Silver", "Monday"),
        Graha::Mars => ("Red Coral", "Copper", "Tuesday"),
        Graha::Mercury => ("Emerald", "Gold", "Wednesday"),
        Graha::Jupiter => ("Yellow Sapphire", "Gold", "Thursday"),
        Graha::Venus => ("Diamond", "Platinum", "Friday"),
        Graha::Saturn => ("Blue Sapphire", "Silver", "Saturday"),
        Graha::Rahu => ("Hessonite", "Silver", "Saturday"),
        Graha::Ketu => ("Cat's Eye", "Silver", "Tuesday"),
    };
    Gemstone {
        stone: stone.to_owned(),
        metal: metal.to_owned(),
        day: day.to_owned(),
    }
}

pub fn mantra_for(graha: Graha) -> Mantra {
    let (text, repetitions, day) = match graha {
        Graha::Sun => ("Om Hraam Hreem Hraum Sah Suryaya Namaha", 7000, "Sunday"),
        Graha::Moon => ("Om Shraam Shreem Shraum Sah Chandraya Namaha", 11000, "Monday"),
        Graha::Mars => ("Om Kraam Kreem Kraum Sah Bhaumaya Namaha", 10000, "Tuesday"),
        Graha::Mercury => ("Om Braam Breem Braum Sah Budhaya Namaha", 17000, "Wednesday"),
        Graha::Jupiter => ("Om Graam Greem Graum Sah Gurave Namaha", 16000, "Thursday"),
        Graha::Venus => ("Om Draam Dreem Draum Sah Shukraya Namaha", 20000, "Friday"),
        Graha::Saturn => (
            "Om Praam Preem Praum Sah Shanaischaraya Namaha",
            19000,
            "Saturday",
        ),
        Graha::Rahu => ("Om Bhraam Bhreem Bhraum Sah Rahave Namaha", 18000, "Saturday"),
        Graha::Ketu => ("Om Sraam Sreem Sraum Sah Ketave Namaha", 7000, "Tuesday"),
    };
    Mantra {
        text: text.to_owned(),
        repetitions,
        day: day.to_owned(),
    }
}

pub fn charity_for(graha: Graha) -> Charity {
    let (items, day): (&[&str], &str) = match graha {
        Graha::Sun => (&["wheat", "jaggery", "red cloth"], "Sunday"),
        Graha::Moon => (&["rice", "milk", "white cloth"], "Monday"),
        Graha::Mars => (&["red lentils", "sweets"], "Tuesday"),
        Graha::Mercury => (&["green vegetables", "books", "pens"], "Wednesday"),
        Graha::Jupiter => (&["turmeric", "yellow cloth", "books"], "Thursday"),
        Graha::Venus => (&["white cloth", "flowers", "perfume"], "Friday"),
        Graha::Saturn => (&["sesame oil", "black cloth", "iron"], "Saturday"),
        Graha::Rahu => (&["blankets", "mustard oil"], "Saturday"),
        Graha::Ketu => (&["blankets", "multi-colored cloth"], "Tuesday"),
    };
    Charity {
        items: owned(items),
        day: day.to_owned(),
    }
}

pub fn fasting_for(graha: Graha) -> Fasting {
    let (day, food) = match graha {
        Graha::Sun => ("Sunday", "avoid salt"),
        Graha::Moon => ("Monday", "white foods only"),
        Graha::Mars => ("Tuesday", "avoid red foods"),
        Graha::Mercury => ("Wednesday", "green foods only"),
        Graha::Jupiter => ("Thursday", "yellow foods"),
        Graha::Venus => ("Friday", "white foods"),
        Graha::Saturn | Graha::Rahu | Graha::Ketu => ("Saturday", "simple vegetarian"),
    };
    Fasting {
        day: day.to_owned(),
        food: food.to_owned(),
    }
}

pub fn remedial_measures(graha: Graha, dignity_strength: f64) -> RemedialMeasures {
    let priority = if dignity_strength < 50.0 {
        RemedyPriority::High
    } else if dignity_strength < 75.0 {
        RemedyPriority::Medium
    } else {
        RemedyPriority::Low
    };
    RemedialMeasures {
        gemstone: gemstone_for(graha),
        mantra: mantra_for(graha),
        charity: charity_for(graha),
        fasting: fasting_for(graha),
        priority,
    }
}

// ---------------------------------------------------------------------------
// Full analysis
// ---------------------------------------------------------------------------

/// Net influence of the aspects received by the lord's house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Influence {
    Positive,
    Challenging,
    Neutral,
}

/// Aspects received at the lord's placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectAnalysis {
    pub aspects: Vec<AspectRelation>,
    pub average_strength: f64,
    pub net_influence: Influence,
}

fn analyze_aspects(chart: &BirthChart, lord: Graha) -> AspectAnalysis {
    let aspects = aspects_on_planet(chart, lord);
    let average_strength = if aspects.is_empty() {
        0.0
    } else {
        aspects.iter().map(|a| a.strength).sum::<f64>() / aspects.len() as f64
    };
    let benefic = aspects
        .iter()
        .filter(|a| a.nature == AspectNature::Benefic)
        .count();
    let malefic = aspects
        .iter()
        .filter(|a| a.nature == AspectNature::Malefic)
        .count();
    let net_influence = match benefic.cmp(&malefic) {
        std::cmp::Ordering::Greater => Influence::Positive,
        std::cmp::Ordering::Less => Influence::Challenging,
        std::cmp::Ordering::Equal => Influence::Neutral,
    };
    AspectAnalysis {
        aspects,
        average_strength,
        net_influence,
    }
}

/// Complete lagna-lord analysis document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LagnaLordAnalysis {
    pub lagna_sign: Rashi,
    pub lagna_lord: Graha,
    pub lord_position: PlanetPosition,
    pub dignity: DignityInfo,
    pub neecha_bhanga: Option<NeechaBhanga>,
    pub house_effects: HouseEffects,
    pub conjunctions: Vec<Conjunction>,
    pub aspects: AspectAnalysis,
    pub gandanta: GandantaCheck,
    pub pushkara_bhaga: bool,
    pub life_effects: LifeEffects,
    pub dasha_effects: DashaEffects,
    pub remedial_measures: RemedialMeasures,
    pub summary: String,
    pub recommendations: Vec<String>,
}

/// Analyze the lagna lord's placement.
///
/// The ascendant and position array are validated at chart construction;
/// a lord absent from the snapshot is a `MissingGraha` error.
pub fn analyze_lagna_lord(chart: &BirthChart) -> Result<LagnaLordAnalysis, ChartError> {
    let lagna_sign = chart.ascendant.sign;
    let lagna_lord = rashi_lord(lagna_sign);
    let lord_position = *chart.require(lagna_lord)?;
    debug!(%lagna_sign, %lagna_lord, house = lord_position.house, "analyzing lagna lord");

    let mut dignity = dignity_from_longitude(lagna_lord, lord_position.longitude);
    let neecha_bhanga = if dignity.dignity == Dignity::Debilitated {
        let nb = check_neecha_bhanga(chart, &lord_position);
        if nb.present {
            // Cancellation lifts the debilitated placement strength.
            dignity.strength = 75.0;
        }
        Some(nb)
    } else {
        None
    };

    let house_effects = analyze_house_effects(lord_position.house);
    let conjunctions = analyze_conjunctions(chart, &lord_position);
    let aspects = analyze_aspects(chart, lagna_lord);
    let life_effects = analyze_life_effects(lagna_lord, lord_position.house);
    let dasha_effects = analyze_dasha_effects(lagna_lord, lord_position.house);
    let remedial_measures = remedial_measures(lagna_lord, dignity.strength);

    let summary = format!(
        "The lagna lord {lagna_lord} occupies house {} in {}, with {:?} dignity. {}",
        lord_position.house, lord_position.sign, dignity.dignity, house_effects.description
    );

    let mut recommendations = Vec::new();
    if dignity.strength < 60.0 {
        recommendations.push("Strengthen the lagna lord through its remedial measures".to_owned());
    }
    if house_effects.strength > 70.0 {
        recommendations.push("Capitalize on the strong lagna lord placement".to_owned());
    }
    recommendations.push(format!("Focus on {lagna_lord}-related activities"));

    Ok(LagnaLordAnalysis {
        lagna_sign,
        lagna_lord,
        lord_position,
        dignity,
        neecha_bhanga,
        house_effects,
        conjunctions,
        aspects,
        gandanta: check_gandanta(lord_position.longitude),
        pushkara_bhaga: is_pushkara_bhaga(lord_position.longitude),
        life_effects,
        dasha_effects,
        remedial_measures,
        summary,
        recommendations,
    })
}

/// Dignity of any planet within the chart, with Neecha Bhanga applied.
pub fn placement_dignity(chart: &BirthChart, graha: Graha) -> Result<DignityInfo, ChartError> {
    let pos = chart.require(graha)?;
    let mut info = dignity_from_longitude(graha, pos.longitude);
    if info.dignity == Dignity::Debilitated && check_neecha_bhanga(chart, pos).present {
        info.strength = 75.0;
    }
    Ok(info)
}
