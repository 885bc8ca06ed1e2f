//! Narrative tables and text assembly.
//!
//! Narration derives life-theme, guidance, and timing text purely from the
//! already-computed sub-results; no new numeric computation happens here.

use serde::{Deserialize, Serialize};

use jyotish_base::graha::Graha;
use jyotish_base::rashi::{Rashi, RashiElement, RashiQuality};

/// Traits associated with a rashi element.
pub const fn element_traits(element: RashiElement) -> &'static [&'static str] {
    match element {
        RashiElement::Fire => &["energetic", "passionate", "decisive", "pioneering"],
        RashiElement::Earth => &["practical", "reliable", "methodical", "grounded"],
        RashiElement::Air => &["intellectual", "communicative", "adaptable", "social"],
        RashiElement::Water => &["intuitive", "emotional", "nurturing", "receptive"],
    }
}

/// Traits associated with a rashi quality.
pub const fn quality_traits(quality: RashiQuality) -> &'static [&'static str] {
    match quality {
        RashiQuality::Cardinal => &["initiating", "leadership", "dynamic", "ambitious"],
        RashiQuality::Fixed => &["determined", "persistent", "stable", "focused"],
        RashiQuality::Mutable => &["adaptable", "flexible", "versatile", "communicative"],
    }
}

/// Emotional tone of a Moon sign.
pub const fn moon_sign_influence(sign: Rashi) -> &'static str {
    match sign {
        Rashi::Aries => "impulsive and pioneering emotional nature",
        Rashi::Taurus => "stable and comfort-seeking emotional nature",
        Rashi::Gemini => "versatile and communicative emotional nature",
        Rashi::Cancer => "deeply emotional and nurturing nature",
        Rashi::Leo => "dramatic and expressive emotional nature",
        Rashi::Virgo => "analytical and practical emotional approach",
        Rashi::Libra => "harmonious and relationship-focused emotions",
        Rashi::Scorpio => "intense and transformative emotional nature",
        Rashi::Sagittarius => "optimistic and freedom-loving emotions",
        Rashi::Capricorn => "disciplined and pragmatic emotional nature",
        Rashi::Aquarius => "detached and humanitarian emotional approach",
        Rashi::Pisces => "intuitive and compassionate emotional nature",
    }
}

/// Leadership style of a Sun sign.
pub const fn sun_sign_influence(sign: Rashi) -> &'static str {
    match sign {
        Rashi::Aries => "direct and decisive leadership",
        Rashi::Taurus => "steady and reliable authority",
        Rashi::Gemini => "communicative and flexible leadership",
        Rashi::Cancer => "protective and nurturing authority",
        Rashi::Leo => "inspirational and generous leadership",
        Rashi::Virgo => "systematic and service-oriented authority",
        Rashi::Libra => "diplomatic and consensus-building leadership",
        Rashi::Scorpio => "transformational and strategic authority",
        Rashi::Sagittarius => "visionary and philosophical leadership",
        Rashi::Capricorn => "traditional and structured authority",
        Rashi::Aquarius => "innovative and progressive leadership",
        Rashi::Pisces => "empathetic and intuitive authority",
    }
}

/// Theme a mahadasha lord emphasizes.
pub const fn dasha_theme(lord: Graha) -> &'static str {
    match lord {
        Graha::Sun => "authority, recognition, and self-definition",
        Graha::Moon => "emotional life, home, and public connection",
        Graha::Mars => "effort, competition, and decisive action",
        Graha::Mercury => "learning, commerce, and communication",
        Graha::Jupiter => "growth, wisdom, and fortune",
        Graha::Venus => "relationships, comfort, and the arts",
        Graha::Saturn => "discipline, structure, and endurance",
        Graha::Rahu => "ambition, novelty, and worldly expansion",
        Graha::Ketu => "detachment, insight, and completion",
    }
}

/// Narrative text blocks of the final report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    pub life_themes: Vec<String>,
    pub guidance: Vec<String>,
    pub timing: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_base::rashi::ALL_RASHIS;

    #[test]
    fn tables_cover_all_signs() {
        for sign in ALL_RASHIS {
            assert!(!moon_sign_influence(sign).is_empty());
            assert!(!sun_sign_influence(sign).is_empty());
            assert!(!element_traits(sign.element()).is_empty());
            assert!(!quality_traits(sign.quality()).is_empty());
        }
    }

    #[test]
    fn dasha_themes_cover_all_grahas() {
        for g in jyotish_base::graha::ALL_GRAHAS {
            assert!(!dasha_theme(g).is_empty());
        }
    }
}
