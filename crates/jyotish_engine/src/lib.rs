//! Rule engines for Vedic chart analysis.
//!
//! This crate provides:
//! - Drishti (aspect) computation with detailed strength scoring
//! - Combustion detection with severity tiers
//! - Lagna-lord placement analysis, including Neecha Bhanga
//! - Shad Bala, the six-fold planetary strength model
//!
//! Every function is a pure transformation of the immutable chart
//! snapshot; per-planet failures never abort other planets' results.

pub mod combustion;
pub mod drishti;
pub mod kala;
pub mod lagna;
pub mod shadbala;
pub mod virupa;

pub use combustion::{Combustion, CombustionSeverity, check_combustion, combustion_threshold};
pub use drishti::{
    AspectKind, AspectNature, AspectRelation, AspectStrength, StrengthLevel, aspect_kinds,
    aspect_target, aspects_on_house, aspects_on_planet, detailed_strength, has_grand_trine,
    has_stellium, has_t_square, mutual_aspect,
};
pub use lagna::{
    LagnaLordAnalysis, NeechaBhanga, NeechaBhangaRule, analyze_lagna_lord, check_gandanta,
    check_neecha_bhanga, is_pushkara_bhaga, placement_dignity,
};
pub use shadbala::{
    KalaBalaBreakdown, StrengthScore, all_shad_balas, chesta_bala, dig_bala, drik_bala, kala_bala,
    naisargika_bala, shad_bala, sthana_bala,
};
pub use virupa::{base_virupa, special_virupa, total_virupa};
