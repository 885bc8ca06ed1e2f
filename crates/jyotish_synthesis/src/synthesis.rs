//! Synthesis pipeline: Validate -> Apply Rules -> Check Coherence ->
//! Narrate -> Emit.
//!
//! Validation gates the pipeline on completeness; the weighted synthesis
//! rules and coherence checks then merge the upstream analyses into one
//! internally-consistent report. Coherence failures surface as issues in
//! the report, never as errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use jyotish_base::graha::Graha;

use crate::bundle::{AnalysisBundle, REQUIRED_SECTIONS, YogaKind};
use crate::narrative::{
    Narrative, dasha_theme, element_traits, moon_sign_influence, quality_traits,
    sun_sign_influence,
};

// ---------------------------------------------------------------------------
// Config and errors
// ---------------------------------------------------------------------------

/// Tunable gates of the synthesis pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Completeness below this fails fast.
    pub completeness_gate: f64,
    /// Coherence at or above this marks the report as passed.
    pub coherence_pass: f64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        SynthesisConfig {
            completeness_gate: 0.8,
            coherence_pass: 0.70,
        }
    }
}

/// Synthesis failure: the input bundle is too incomplete to report on.
///
/// Individual sub-analyses already computed remain valid; only the
/// synthesis itself is aborted.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SynthesisError {
    Incomplete { score: f64, missing: Vec<String> },
}

impl Display for SynthesisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Incomplete { score, missing } => write!(
                f,
                "analysis incomplete ({:.0}%), missing: {}",
                score * 100.0,
                missing.join(", ")
            ),
        }
    }
}

impl Error for SynthesisError {}

// ---------------------------------------------------------------------------
// Stage 1: Validate
// ---------------------------------------------------------------------------

/// Completeness assessment of an analysis bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completeness {
    /// 0.1 per required section, 0.01 per house, 0.01 per planet; capped
    /// at 1.0.
    pub score: f64,
    pub missing: Vec<String>,
}

/// Score the bundle's completeness and list every missing item.
pub fn validate_completeness(bundle: &AnalysisBundle) -> Completeness {
    let mut score: f64 = 0.0;
    let mut missing = Vec::new();

    for section in REQUIRED_SECTIONS {
        if bundle.has_section(section) {
            score += 0.1;
        } else {
            missing.push(format!("Missing section: {section}"));
        }
    }
    for house in 1..=12u8 {
        if bundle
            .houses
            .as_ref()
            .is_some_and(|s| s.houses.contains_key(&house))
        {
            score += 0.01;
        } else {
            missing.push(format!("Missing house {house} analysis"));
        }
    }
    for graha in jyotish_base::graha::ALL_GRAHAS {
        if bundle.dignities.contains_key(&graha) {
            score += 0.01;
        } else {
            missing.push(format!(
                "Missing planet {} analysis",
                graha.name().to_ascii_lowercase()
            ));
        }
    }

    Completeness {
        score: score.min(1.0),
        missing,
    }
}

// ---------------------------------------------------------------------------
// Stage 2: Apply rules
// ---------------------------------------------------------------------------

/// The six weighted synthesis rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynthesisRule {
    PersonalityPortrait,
    HouseCrossReference,
    NavamsaRasiCorrelation,
    DashaTimingIntegration,
    YogaPatternSynthesis,
    ArudhaImageIntegration,
}

/// All rules in application order.
pub const ALL_RULES: [SynthesisRule; 6] = [
    SynthesisRule::PersonalityPortrait,
    SynthesisRule::HouseCrossReference,
    SynthesisRule::NavamsaRasiCorrelation,
    SynthesisRule::DashaTimingIntegration,
    SynthesisRule::YogaPatternSynthesis,
    SynthesisRule::ArudhaImageIntegration,
];

impl SynthesisRule {
    pub const fn weight(self) -> f64 {
        match self {
            Self::PersonalityPortrait => 0.25,
            Self::HouseCrossReference => 0.20,
            Self::NavamsaRasiCorrelation => 0.15,
            Self::DashaTimingIntegration => 0.20,
            Self::YogaPatternSynthesis => 0.10,
            Self::ArudhaImageIntegration => 0.10,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::PersonalityPortrait => "combine lagna, Moon, and Sun into a personality portrait",
            Self::HouseCrossReference => "cross-reference house lords, occupants, and aspects",
            Self::NavamsaRasiCorrelation => "correlate navamsa findings with the rasi chart",
            Self::DashaTimingIntegration => "integrate the dasha timeline with predictions",
            Self::YogaPatternSynthesis => "synthesize yoga patterns with life outcomes",
            Self::ArudhaImageIntegration => "integrate arudha image with personality",
        }
    }
}

/// Result of one synthesis rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleResult {
    pub rule: SynthesisRule,
    pub weight: f64,
    pub confidence: f64,
    pub summary: String,
    pub highlights: Vec<String>,
}

/// Confidence assigned to a rule whose inputs are absent.
const DEGRADED_CONFIDENCE: f64 = 0.1;

fn degraded(rule: SynthesisRule) -> RuleResult {
    warn!(?rule, "synthesis rule degraded: missing inputs");
    RuleResult {
        rule,
        weight: rule.weight(),
        confidence: DEGRADED_CONFIDENCE,
        summary: format!("insufficient inputs to {}", rule.description()),
        highlights: Vec::new(),
    }
}

fn personality_portrait(bundle: &AnalysisBundle) -> RuleResult {
    let rule = SynthesisRule::PersonalityPortrait;
    let Some(lagna) = &bundle.lagna else {
        return degraded(rule);
    };
    let moon = bundle.dignities.get(&Graha::Moon);
    let sun = bundle.dignities.get(&Graha::Sun);

    let mut confidence: f64 = 0.5 + 0.15;
    let mut highlights = vec![format!(
        "core identity: {} rising, {}",
        lagna.sign(),
        element_traits(lagna.sign().element()).join(", ")
    )];
    highlights.push(format!(
        "expression style: {}",
        quality_traits(lagna.sign().quality()).join(", ")
    ));
    if let Some(moon) = moon {
        confidence += 0.15;
        highlights.push(format!("emotional nature: {}", moon_sign_influence(moon.sign)));
    }
    if let Some(sun) = sun {
        confidence += 0.15;
        highlights.push(format!("soul expression: {}", sun_sign_influence(sun.sign)));
    }
    if bundle.arudha.is_some() {
        confidence += 0.05;
    }

    RuleResult {
        rule,
        weight: rule.weight(),
        confidence: confidence.min(0.95),
        summary: format!("personality portrait for {} lagna", lagna.sign()),
        highlights,
    }
}

/// Life-area house groups cross-referenced by the house rule.
const LIFE_AREAS: [(&str, &[u8]); 5] = [
    ("wealth", &[2, 5, 9, 11]),
    ("career", &[2, 6, 10, 11]),
    ("relationships", &[4, 7, 11, 12]),
    ("health", &[1, 6, 8, 12]),
    ("spiritual", &[5, 8, 9, 12]),
];

fn house_cross_reference(bundle: &AnalysisBundle) -> RuleResult {
    let rule = SynthesisRule::HouseCrossReference;
    let Some(houses) = &bundle.houses else {
        return degraded(rule);
    };

    let mut highlights = Vec::new();
    let mut best: Option<(&str, f64)> = None;
    for (area, members) in LIFE_AREAS {
        if let Some(mean) = houses.mean_strength(members) {
            highlights.push(format!("{area} houses average {mean:.0}"));
            if best.is_none_or(|(_, s)| mean > s) {
                best = Some((area, mean));
            }
        }
    }
    let summary = match best {
        Some((area, mean)) => format!("strongest life area: {area} ({mean:.0})"),
        None => "house analyses present but sparse".to_owned(),
    };
    RuleResult {
        rule,
        weight: rule.weight(),
        confidence: 0.85,
        summary,
        highlights,
    }
}

fn navamsa_rasi_correlation(bundle: &AnalysisBundle) -> RuleResult {
    let rule = SynthesisRule::NavamsaRasiCorrelation;
    let Some(navamsa) = &bundle.navamsa else {
        return degraded(rule);
    };
    let mut diffs = Vec::new();
    let mut highlights = Vec::new();
    for (graha, assessment) in &bundle.dignities {
        if let Some(d9_strength) = navamsa.planet_strengths.get(graha) {
            let diff = (assessment.dignity.strength - d9_strength).abs();
            diffs.push(diff);
            if *d9_strength >= assessment.dignity.strength + 20.0 {
                highlights.push(format!("{graha} gains strength in navamsa"));
            } else if *d9_strength + 20.0 <= assessment.dignity.strength {
                highlights.push(format!("{graha} weakens in navamsa"));
            }
        }
    }
    if diffs.is_empty() {
        return degraded(rule);
    }
    let correlation = 1.0 - diffs.iter().sum::<f64>() / diffs.len() as f64 / 100.0;
    RuleResult {
        rule,
        weight: rule.weight(),
        confidence: 0.9,
        summary: format!("rasi-navamsa correlation {correlation:.2}"),
        highlights,
    }
}

fn dasha_timing_integration(bundle: &AnalysisBundle) -> RuleResult {
    let rule = SynthesisRule::DashaTimingIntegration;
    let Some(dasha) = &bundle.dasha else {
        return degraded(rule);
    };
    let mut highlights = vec![format!(
        "current period: {} mahadasha emphasizing {}",
        dasha.current_lord,
        dasha_theme(dasha.current_lord)
    )];
    for period in dasha.timeline.iter().take(3) {
        highlights.push(format!(
            "{} period from age {:.0}: {}",
            period.lord,
            period.start_age,
            dasha_theme(period.lord)
        ));
    }
    RuleResult {
        rule,
        weight: rule.weight(),
        confidence: 0.9,
        summary: format!("timeline anchored on {} mahadasha", dasha.current_lord),
        highlights,
    }
}

fn yoga_pattern_synthesis(bundle: &AnalysisBundle) -> RuleResult {
    let rule = SynthesisRule::YogaPatternSynthesis;
    let Some(yogas) = &bundle.yogas else {
        return degraded(rule);
    };
    let kinds = [
        (YogaKind::Raja, "authority and rank"),
        (YogaKind::Dhana, "wealth accumulation"),
        (YogaKind::Spiritual, "inner development"),
        (YogaKind::Challenge, "obstacles to overcome"),
        (YogaKind::Special, "distinctive gifts"),
    ];
    let mut highlights = Vec::new();
    let mut dominant: Option<(&str, usize)> = None;
    for (kind, label) in kinds {
        let count = yogas.count_of(kind);
        if count > 0 {
            highlights.push(format!("{count} yoga(s) indicating {label}"));
            if dominant.is_none_or(|(_, c)| count > c) {
                dominant = Some((label, count));
            }
        }
    }
    let summary = match dominant {
        Some((label, _)) => format!("dominant yoga pattern: {label}"),
        None => "no significant yogas detected".to_owned(),
    };
    RuleResult {
        rule,
        weight: rule.weight(),
        confidence: 0.85,
        summary,
        highlights,
    }
}

fn arudha_image_integration(bundle: &AnalysisBundle) -> RuleResult {
    let rule = SynthesisRule::ArudhaImageIntegration;
    let (Some(arudha), Some(lagna)) = (&bundle.arudha, &bundle.lagna) else {
        return degraded(rule);
    };
    let aligned = arudha.sign == lagna.sign();
    let gap = (arudha.public_standing - lagna.strength).abs() / 100.0;
    let mut highlights = vec![if aligned {
        "public image aligns with the inner self".to_owned()
    } else {
        format!(
            "perceived as {} while the inner self is {}",
            arudha.sign,
            lagna.sign()
        )
    }];
    highlights.push(format!("perception gap {:.0}%", gap * 100.0));
    RuleResult {
        rule,
        weight: rule.weight(),
        confidence: 0.8,
        summary: if aligned {
            "authentic public persona".to_owned()
        } else {
            "public image diverges from the inner self".to_owned()
        },
        highlights,
    }
}

/// Apply all six weighted rules.
pub fn apply_rules(bundle: &AnalysisBundle) -> Vec<RuleResult> {
    ALL_RULES
        .into_iter()
        .map(|rule| match rule {
            SynthesisRule::PersonalityPortrait => personality_portrait(bundle),
            SynthesisRule::HouseCrossReference => house_cross_reference(bundle),
            SynthesisRule::NavamsaRasiCorrelation => navamsa_rasi_correlation(bundle),
            SynthesisRule::DashaTimingIntegration => dasha_timing_integration(bundle),
            SynthesisRule::YogaPatternSynthesis => yoga_pattern_synthesis(bundle),
            SynthesisRule::ArudhaImageIntegration => arudha_image_integration(bundle),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Stage 3: Coherence
// ---------------------------------------------------------------------------

/// The five cross-section consistency checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoherenceCheck {
    MarriageConsistency,
    CareerAlignment,
    HealthCorrelation,
    FinancialConsistency,
    TimingCoherence,
}

pub const ALL_CHECKS: [CoherenceCheck; 5] = [
    CoherenceCheck::MarriageConsistency,
    CoherenceCheck::CareerAlignment,
    CoherenceCheck::HealthCorrelation,
    CoherenceCheck::FinancialConsistency,
    CoherenceCheck::TimingCoherence,
];

impl CoherenceCheck {
    pub const fn description(self) -> &'static str {
        match self {
            Self::MarriageConsistency => "marriage indications align across rasi and navamsa",
            Self::CareerAlignment => "career indications align across the 10th house and arudha",
            Self::HealthCorrelation => "health indications correlate across multiple factors",
            Self::FinancialConsistency => "wealth indications align across houses and yogas",
            Self::TimingCoherence => "dasha timing aligns with the planetary assessments",
        }
    }
}

/// Result of a single coherence check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoherenceCheckResult {
    pub check: CoherenceCheck,
    pub passed: bool,
    pub score: f64,
    pub issues: Vec<String>,
}

/// Aggregated coherence results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoherenceReport {
    pub checks: Vec<CoherenceCheckResult>,
    /// Mean score across all checks.
    pub overall_score: f64,
    pub passed: bool,
}

/// Score with a neutral value when a check's inputs are absent.
const NEUTRAL_SCORE: f64 = 0.5;

fn check_result(check: CoherenceCheck, score: f64, issue: Option<String>) -> CoherenceCheckResult {
    let score = score.clamp(0.0, 1.0);
    let passed = score >= 0.7 && issue.is_none();
    CoherenceCheckResult {
        check,
        passed,
        score,
        issues: issue.into_iter().collect(),
    }
}

fn marriage_consistency(bundle: &AnalysisBundle) -> CoherenceCheckResult {
    let check = CoherenceCheck::MarriageConsistency;
    let seventh = bundle.houses.as_ref().and_then(|h| h.strength(7));
    let navamsa = bundle.navamsa.as_ref().map(|n| n.marriage_indication);
    match (seventh, navamsa) {
        (Some(rasi), Some(d9)) => {
            let diff = (rasi - d9).abs();
            let issue = (diff > 30.0).then(|| {
                format!("7th-house strength {rasi:.0} disagrees with navamsa indication {d9:.0}")
            });
            check_result(check, 1.0 - diff / 100.0, issue)
        }
        _ => check_result(
            check,
            NEUTRAL_SCORE,
            Some("marriage inputs incomplete".to_owned()),
        ),
    }
}

fn career_alignment(bundle: &AnalysisBundle) -> CoherenceCheckResult {
    let check = CoherenceCheck::CareerAlignment;
    let tenth = bundle.houses.as_ref().and_then(|h| h.strength(10));
    let arudha = bundle.arudha.as_ref().map(|a| a.public_standing);
    match (tenth, arudha) {
        (Some(career), Some(image)) => {
            let diff = (career - image).abs();
            let issue = (diff > 35.0).then(|| {
                format!("10th-house strength {career:.0} disagrees with arudha standing {image:.0}")
            });
            check_result(check, 1.0 - diff / 100.0, issue)
        }
        _ => check_result(
            check,
            NEUTRAL_SCORE,
            Some("career inputs incomplete".to_owned()),
        ),
    }
}

fn health_correlation(bundle: &AnalysisBundle) -> CoherenceCheckResult {
    let check = CoherenceCheck::HealthCorrelation;
    let affliction = bundle
        .houses
        .as_ref()
        .and_then(|h| h.mean_strength(&[6, 8, 12]));
    let vitality = bundle.lagna.as_ref().map(|l| l.strength);
    match (affliction, vitality) {
        (Some(affliction), Some(vitality)) => {
            // Strong dusthanas and a strong lagna should not both claim
            // the same chart without a warning.
            let tension = (affliction / 100.0) * (vitality / 100.0);
            let issue = (tension > 0.64).then(|| {
                format!(
                    "dusthana strength {affliction:.0} sits uneasily with lagna vitality {vitality:.0}"
                )
            });
            check_result(check, 1.0 - tension * 0.5, issue)
        }
        _ => check_result(
            check,
            NEUTRAL_SCORE,
            Some("health inputs incomplete".to_owned()),
        ),
    }
}

fn financial_consistency(bundle: &AnalysisBundle) -> CoherenceCheckResult {
    let check = CoherenceCheck::FinancialConsistency;
    let wealth = bundle
        .houses
        .as_ref()
        .and_then(|h| h.mean_strength(&[2, 11]));
    let dhana = bundle
        .yogas
        .as_ref()
        .map(|y| y.count_of(YogaKind::Dhana) > 0);
    match (wealth, dhana) {
        (Some(wealth), Some(true)) if wealth < 40.0 => check_result(
            check,
            0.4,
            Some(format!(
                "dhana yoga present but wealth houses average only {wealth:.0}"
            )),
        ),
        (Some(wealth), Some(true)) => check_result(check, 0.8 + wealth / 500.0, None),
        (Some(wealth), Some(false)) if wealth >= 75.0 => check_result(
            check,
            0.6,
            Some(format!(
                "wealth houses average {wealth:.0} without a supporting dhana yoga"
            )),
        ),
        (Some(_), Some(false)) => check_result(check, 0.9, None),
        _ => check_result(
            check,
            NEUTRAL_SCORE,
            Some("financial inputs incomplete".to_owned()),
        ),
    }
}

fn timing_coherence(bundle: &AnalysisBundle) -> CoherenceCheckResult {
    let check = CoherenceCheck::TimingCoherence;
    match &bundle.dasha {
        Some(dasha) => {
            if bundle.dignities.contains_key(&dasha.current_lord) {
                check_result(check, 0.95, None)
            } else {
                check_result(
                    check,
                    0.3,
                    Some(format!(
                        "current dasha lord {} has no planetary assessment",
                        dasha.current_lord
                    )),
                )
            }
        }
        None => check_result(
            check,
            NEUTRAL_SCORE,
            Some("timing inputs incomplete".to_owned()),
        ),
    }
}

/// Run the five coherence checks.
pub fn check_coherence(bundle: &AnalysisBundle, config: &SynthesisConfig) -> CoherenceReport {
    let checks: Vec<CoherenceCheckResult> = ALL_CHECKS
        .into_iter()
        .map(|check| match check {
            CoherenceCheck::MarriageConsistency => marriage_consistency(bundle),
            CoherenceCheck::CareerAlignment => career_alignment(bundle),
            CoherenceCheck::HealthCorrelation => health_correlation(bundle),
            CoherenceCheck::FinancialConsistency => financial_consistency(bundle),
            CoherenceCheck::TimingCoherence => timing_coherence(bundle),
        })
        .collect();
    let overall_score = checks.iter().map(|c| c.score).sum::<f64>() / checks.len() as f64;
    CoherenceReport {
        passed: overall_score >= config.coherence_pass,
        overall_score,
        checks,
    }
}

// ---------------------------------------------------------------------------
// Stage 4: Narrate
// ---------------------------------------------------------------------------

fn narrate(bundle: &AnalysisBundle, rules: &[RuleResult]) -> Narrative {
    let mut narrative = Narrative::default();

    if let Some(lagna) = &bundle.lagna {
        narrative.life_themes.push(format!(
            "A {} path shaped by {} energy",
            lagna.sign(),
            element_traits(lagna.sign().element())[0]
        ));
    }
    for rule in rules {
        if rule.confidence > DEGRADED_CONFIDENCE {
            narrative.life_themes.extend(
                rule.highlights.iter().take(1).cloned(),
            );
        }
    }

    if let Some(lagna) = &bundle.lagna {
        if lagna.strength < 50.0 {
            narrative.guidance.push(
                "Strengthen the lagna lord through its remedial measures".to_owned(),
            );
        } else {
            narrative.guidance.push(
                "Build on the well-placed lagna lord with consistent effort".to_owned(),
            );
        }
    }
    for rule in rules {
        if rule.confidence <= DEGRADED_CONFIDENCE {
            narrative.guidance.push(format!(
                "Complete the missing inputs to {}",
                rule.rule.description()
            ));
        }
    }

    if let Some(dasha) = &bundle.dasha {
        narrative.timing.push(format!(
            "The running {} mahadasha emphasizes {}",
            dasha.current_lord,
            dasha_theme(dasha.current_lord)
        ));
        for period in dasha.timeline.iter().take(2) {
            narrative.timing.push(format!(
                "From age {:.0}, the {} period turns focus to {}",
                period.start_age,
                period.lord,
                dasha_theme(period.lord)
            ));
        }
    }

    narrative
}

// ---------------------------------------------------------------------------
// Stage 5: Emit
// ---------------------------------------------------------------------------

/// Report metadata scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynthesisMetadata {
    pub completeness_score: f64,
    pub coherence_score: f64,
    /// 0.4 x completeness + 0.6 x coherence.
    pub expert_confidence: f64,
}

/// The terminal artifact returned to the external caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisReport {
    pub metadata: SynthesisMetadata,
    pub sections: Vec<RuleResult>,
    pub coherence: CoherenceReport,
    pub narrative: Narrative,
    /// Issues raised by failed coherence checks.
    pub critical_issues: Vec<String>,
}

/// Expert confidence from completeness and coherence.
pub fn expert_confidence(completeness: f64, coherence: f64) -> f64 {
    0.4 * completeness + 0.6 * coherence
}

/// Run the full pipeline over an analysis bundle.
///
/// Fails fast with [`SynthesisError::Incomplete`] below the completeness
/// gate; every other inconsistency is embedded in the report as a
/// lowered-confidence annotation.
pub fn synthesize(
    bundle: &AnalysisBundle,
    config: &SynthesisConfig,
) -> Result<SynthesisReport, SynthesisError> {
    // Validate
    let completeness = validate_completeness(bundle);
    debug!(score = completeness.score, "validated bundle completeness");
    if completeness.score < config.completeness_gate {
        return Err(SynthesisError::Incomplete {
            score: completeness.score,
            missing: completeness.missing,
        });
    }

    // Apply rules
    let sections = apply_rules(bundle);

    // Check coherence
    let coherence = check_coherence(bundle, config);
    let critical_issues: Vec<String> = coherence
        .checks
        .iter()
        .filter(|c| !c.passed)
        .flat_map(|c| c.issues.iter().cloned())
        .collect();

    // Narrate
    let narrative = narrate(bundle, &sections);

    // Emit
    Ok(SynthesisReport {
        metadata: SynthesisMetadata {
            completeness_score: completeness.score,
            coherence_score: coherence.overall_score,
            expert_confidence: expert_confidence(completeness.score, coherence.overall_score),
        },
        sections,
        coherence,
        narrative,
        critical_issues,
    })
}
