//! Core types and rule tables for Vedic chart analysis.
//!
//! This crate provides:
//! - Graha and rashi enums with lordship and classification tables
//! - Whole-sign house derivation and classical house groupings
//! - Dignity determination from the exaltation/debilitation tables
//! - Divisional chart (amsha) longitude mappings
//! - The immutable birth-chart snapshot every engine reads
//!
//! All implementations are clean-room, derived from standard Vedic jyotish
//! texts (BPHS).

pub mod amsha;
pub mod bhava;
pub mod chart;
pub mod dignity;
pub mod error;
pub mod graha;
pub mod rashi;
pub mod util;

pub use amsha::{Amsha, amsha_longitude, amsha_rashi, is_vargottama, navamsa_rashi};
pub use bhava::{
    BhavaGroup, bhava_group, house_from_longitude, house_significations, is_dusthana, is_kendra,
    is_trikona, is_upachaya, nth_house_from,
};
pub use chart::{
    Ascendant, BirthChart, BirthInfo, ChartDocument, DivisionalChart, DivisionalPosition,
    PlanetPosition,
};
pub use dignity::{
    Dignity, DignityInfo, debilitation_sign, dignity_from_longitude, dignity_in_sign,
    exaltation_sign, is_debilitated, moolatrikona_range, own_signs,
};
pub use error::ChartError;
pub use graha::{ALL_GRAHAS, Graha, GrahaNature, SAPTA_GRAHAS, rashi_lord, rashi_lord_by_index};
pub use rashi::{ALL_RASHIS, Rashi, RashiElement, RashiInfo, RashiQuality, rashi_from_longitude};
pub use util::{angular_separation, normalize_360};
