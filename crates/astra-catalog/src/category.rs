//! Taxonomic categories for celestial bodies.

use serde::{Deserialize, Serialize};

/// The taxonomic tag the classifier assigns to a body.
///
/// Exactly one category applies to any record, and it is re-derived from
/// the record's fields on every catalog load rather than cached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyCategory {
    /// The central star.
    Star,
    /// Rocky sun-orbiting planet with a thin or absent atmosphere.
    TerrestrialPlanet,
    /// Massive sun-orbiting planet with a substantial atmosphere.
    GasGiant,
    /// Sun-orbiting body large enough for hydrostatic shape but not
    /// planet-sized.
    DwarfPlanet,
    /// Satellite with a mean radius above 1000 km.
    MajorMoon,
    /// Any other satellite.
    Moon,
    /// Small body between the 2.0 and 3.3 AU belt bounds.
    MainBeltAsteroid,
    /// Small body inside the belt on a low-eccentricity orbit.
    NearEarthAsteroid,
    /// Comet with a period under 200 years.
    ShortPeriodComet,
    /// Comet with a longer (or unmeasured) period.
    LongPeriodComet,
    /// Low-eccentricity body in the 30-55 AU belt.
    KuiperBeltObject,
    /// Eccentric, inclined trans-Neptunian body.
    ScatteredDiscObject,
    /// Co-orbital asteroid in a giant planet's Lagrange camps.
    TrojanAsteroid,
    /// Small body wandering between the giant planets.
    Centaur,
    /// Nothing else claimed it.
    Unknown,
}

impl BodyCategory {
    /// Stable snake_case tag, matching the catalog database's vocabulary.
    pub fn tag(&self) -> &'static str {
        match self {
            BodyCategory::Star => "star",
            BodyCategory::TerrestrialPlanet => "terrestrial_planet",
            BodyCategory::GasGiant => "gas_giant",
            BodyCategory::DwarfPlanet => "dwarf_planet",
            BodyCategory::MajorMoon => "major_moon",
            BodyCategory::Moon => "moon",
            BodyCategory::MainBeltAsteroid => "main_belt_asteroid",
            BodyCategory::NearEarthAsteroid => "near_earth_asteroid",
            BodyCategory::ShortPeriodComet => "short_period_comet",
            BodyCategory::LongPeriodComet => "long_period_comet",
            BodyCategory::KuiperBeltObject => "kuiper_belt_object",
            BodyCategory::ScatteredDiscObject => "scattered_disc_object",
            BodyCategory::TrojanAsteroid => "trojan_asteroid",
            BodyCategory::Centaur => "centaur",
            BodyCategory::Unknown => "unknown",
        }
    }

    /// Human-readable label for list and glossary UIs.
    pub fn label(&self) -> &'static str {
        match self {
            BodyCategory::Star => "Star",
            BodyCategory::TerrestrialPlanet => "Terrestrial Planet",
            BodyCategory::GasGiant => "Gas Giant",
            BodyCategory::DwarfPlanet => "Dwarf Planet",
            BodyCategory::MajorMoon => "Major Moon",
            BodyCategory::Moon => "Moon",
            BodyCategory::MainBeltAsteroid => "Main Belt Asteroid",
            BodyCategory::NearEarthAsteroid => "Near-Earth Asteroid",
            BodyCategory::ShortPeriodComet => "Short-Period Comet",
            BodyCategory::LongPeriodComet => "Long-Period Comet",
            BodyCategory::KuiperBeltObject => "Kuiper Belt Object",
            BodyCategory::ScatteredDiscObject => "Scattered Disc Object",
            BodyCategory::TrojanAsteroid => "Trojan Asteroid",
            BodyCategory::Centaur => "Centaur",
            BodyCategory::Unknown => "Unknown Object",
        }
    }

    /// Display color in linear RGB for scene rendering.
    ///
    /// The star is yellow, terrestrial planets royal blue, gas giants
    /// orange; every other category renders gray.
    pub fn color(&self) -> [f32; 3] {
        match self {
            BodyCategory::Star => [1.0, 1.0, 0.0],
            BodyCategory::TerrestrialPlanet => [0.25, 0.41, 0.88],
            BodyCategory::GasGiant => [1.0, 0.65, 0.0],
            _ => [0.5, 0.5, 0.5],
        }
    }
}

impl std::fmt::Display for BodyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trips_through_serde() {
        let json = serde_json::to_string(&BodyCategory::KuiperBeltObject).unwrap();
        assert_eq!(json, "\"kuiper_belt_object\"");
        let parsed: BodyCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, BodyCategory::KuiperBeltObject);
    }

    #[test]
    fn test_display_matches_tag() {
        assert_eq!(BodyCategory::ScatteredDiscObject.to_string(), "scattered_disc_object");
        assert_eq!(BodyCategory::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_distinct_colors_for_highlighted_categories() {
        let star = BodyCategory::Star.color();
        let terrestrial = BodyCategory::TerrestrialPlanet.color();
        let giant = BodyCategory::GasGiant.color();
        let other = BodyCategory::Centaur.color();
        assert_ne!(star, terrestrial);
        assert_ne!(terrestrial, giant);
        assert_ne!(giant, other);
        assert_eq!(BodyCategory::Moon.color(), other, "non-highlighted categories share gray");
    }
}
