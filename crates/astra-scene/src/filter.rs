//! Curated name-based visibility filters.

/// The nine historically named planets, Pluto included.
pub const PLANETS: [&str; 9] = [
    "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
];

/// The four giant planets.
pub const GAS_GIANTS: [&str; 4] = ["Jupiter", "Saturn", "Uranus", "Neptune"];

/// Named dwarf planets and accepted candidates.
pub const DWARF_PLANETS: [&str; 5] = ["Pluto", "Ceres", "Eris", "Haumea", "Makemake"];

/// Which bodies the scene draws.
///
/// Matching is by curated body *name*, not by classifier category: a body
/// the classifier tags `dwarf_planet` but that is missing from
/// [`DWARF_PLANETS`] stays hidden under that filter. The star is always
/// drawn regardless of filter; the session layers that rule on top.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisibilityFilter {
    /// Every body with a position.
    #[default]
    All,
    /// The nine named planets.
    Planets,
    /// The four gas giants.
    GasGiants,
    /// The named dwarf planets.
    DwarfPlanets,
}

impl VisibilityFilter {
    /// Parse a filter name; anything unrecognized degrades to
    /// [`All`](Self::All).
    pub fn from_name(name: &str) -> Self {
        match name {
            "planets" => Self::Planets,
            "gas_giants" => Self::GasGiants,
            "dwarf_planets" => Self::DwarfPlanets,
            _ => Self::All,
        }
    }

    /// Whether a body name passes this filter.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Planets => PLANETS.contains(&name),
            Self::GasGiants => GAS_GIANTS.contains(&name),
            Self::DwarfPlanets => DWARF_PLANETS.contains(&name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_everything() {
        assert!(VisibilityFilter::All.matches("Sun"));
        assert!(VisibilityFilter::All.matches("some unheard-of rock"));
    }

    #[test]
    fn test_planets_list_is_the_historical_nine() {
        let filter = VisibilityFilter::Planets;
        for name in PLANETS {
            assert!(filter.matches(name), "{name} should pass the planets filter");
        }
        assert!(filter.matches("Pluto"));
        assert!(!filter.matches("Ceres"));
        assert!(!filter.matches("Moon"));
    }

    #[test]
    fn test_gas_giants_exact_set() {
        let filter = VisibilityFilter::GasGiants;
        for name in GAS_GIANTS {
            assert!(filter.matches(name));
        }
        assert!(!filter.matches("Earth"));
        assert!(!filter.matches("Pluto"));
    }

    #[test]
    fn test_dwarf_filter_is_name_based_not_category_based() {
        // A perfectly valid dwarf planet that is not in the curated list
        // does not pass; the whitelist is authoritative.
        let filter = VisibilityFilter::DwarfPlanets;
        assert!(filter.matches("Makemake"));
        assert!(!filter.matches("Orcus"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(!VisibilityFilter::Planets.matches("earth"));
        assert!(VisibilityFilter::Planets.matches("Earth"));
    }

    #[test]
    fn test_from_name_degrades_to_all() {
        assert_eq!(VisibilityFilter::from_name("planets"), VisibilityFilter::Planets);
        assert_eq!(VisibilityFilter::from_name("gas_giants"), VisibilityFilter::GasGiants);
        assert_eq!(VisibilityFilter::from_name("dwarf_planets"), VisibilityFilter::DwarfPlanets);
        assert_eq!(VisibilityFilter::from_name("all"), VisibilityFilter::All);
        assert_eq!(VisibilityFilter::from_name("comets"), VisibilityFilter::All);
        assert_eq!(VisibilityFilter::from_name(""), VisibilityFilter::All);
    }
}
