//! Cross-module synthesis and coherence engine.
//!
//! Joins the upstream analyses (lagna, houses, aspects, arudha, navamsa,
//! dasha, yogas, planetary dignities) into one internally-consistent
//! report: completeness validation, weighted synthesis rules, coherence
//! checks, and narrative assembly.

pub mod bundle;
pub mod narrative;
pub mod synthesis;

pub use bundle::{
    AnalysisBundle, ArudhaSection, AspectsSection, BirthDataSection, DashaPeriod, DashaSection,
    HouseAnalysis, HousesSection, LagnaSection, NavamsaSection, PlanetAssessment, YogaFinding,
    YogaKind, YogaSection,
};
pub use narrative::Narrative;
pub use synthesis::{
    CoherenceCheck, CoherenceCheckResult, CoherenceReport, Completeness, RuleResult,
    SynthesisConfig, SynthesisError, SynthesisMetadata, SynthesisReport, SynthesisRule,
    apply_rules, check_coherence, expert_confidence, synthesize, validate_completeness,
};
