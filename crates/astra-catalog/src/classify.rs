//! Rule-based classification of catalog records.
//!
//! An ordered decision table: each rule inspects a record and either
//! claims it with a category or passes. The first claiming rule wins and
//! a record no rule claims is `Unknown`. Rule order matters: several
//! predicates overlap at their boundaries, and the planet rule
//! deliberately passes on small sun-orbiting bodies instead of claiming
//! them.

use crate::{BodyCategory, BodyRecord};

/// Period split between short- and long-period comets: 200 years in days.
const SHORT_PERIOD_LIMIT_DAYS: f64 = 200.0 * 365.25;

type Rule = fn(&BodyRecord) -> Option<BodyCategory>;

/// Rules evaluated top to bottom; the first `Some` wins.
const RULES: &[Rule] = &[
    rule_star,
    rule_planet,
    rule_moon,
    rule_asteroid,
    rule_comet,
    rule_kuiper_belt,
    rule_scattered_disc,
    rule_trojan,
    rule_centaur,
];

/// Assign a category to a catalog record.
///
/// Total and pure: never fails, never mutates, and depends only on the
/// record's fields. A record missing the numeric fields a rule reads
/// fails that rule's predicate and falls through to the next.
pub fn classify(record: &BodyRecord) -> BodyCategory {
    RULES
        .iter()
        .find_map(|rule| rule(record))
        .unwrap_or(BodyCategory::Unknown)
}

/// The central star is identified by name, case-insensitively.
fn rule_star(record: &BodyRecord) -> Option<BodyCategory> {
    record
        .name
        .eq_ignore_ascii_case("sun")
        .then_some(BodyCategory::Star)
}

/// Sun-orbiting bodies gated by size and mass.
///
/// Bodies that fail every gate pass through unclaimed rather than
/// defaulting to a planet category.
fn rule_planet(record: &BodyRecord) -> Option<BodyCategory> {
    if !record.orbits_star() {
        return None;
    }
    let planet_sized = record.vol_mean_radius_km.is_some_and(|r| r > 2000.0)
        && record.mass_kg.is_some_and(|m| m > 1e23);
    if planet_sized {
        return Some(if record.atmosphere_mass_kg.is_some_and(|a| a > 1e16) {
            BodyCategory::GasGiant
        } else {
            BodyCategory::TerrestrialPlanet
        });
    }
    if record.vol_mean_radius_km.is_some_and(|r| r > 500.0) {
        return Some(BodyCategory::DwarfPlanet);
    }
    None
}

/// Anything orbiting a non-star parent is a moon, split by size.
fn rule_moon(record: &BodyRecord) -> Option<BodyCategory> {
    if !record.orbits_non_star() {
        return None;
    }
    Some(if record.vol_mean_radius_km.is_some_and(|r| r > 1000.0) {
        BodyCategory::MajorMoon
    } else {
        BodyCategory::Moon
    })
}

/// Small heliocentric bodies inside 5.5 AU on near-circular orbits.
fn rule_asteroid(record: &BodyRecord) -> Option<BodyCategory> {
    if !record.is_parentless() {
        return None;
    }
    let sma = record.semi_major_axis_au.filter(|&a| a < 5.5)?;
    record.eccentricity.filter(|&e| e < 0.4)?;
    record.vol_mean_radius_km.filter(|&r| r < 500.0)?;
    Some(if sma > 2.0 && sma < 3.3 {
        BodyCategory::MainBeltAsteroid
    } else {
        BodyCategory::NearEarthAsteroid
    })
}

/// Small, highly eccentric or distant heliocentric bodies.
///
/// A record without a measured period cannot be short-period.
fn rule_comet(record: &BodyRecord) -> Option<BodyCategory> {
    if !record.is_parentless() {
        return None;
    }
    let eccentric_or_distant = record.eccentricity.is_some_and(|e| e > 0.8)
        || record.semi_major_axis_au.is_some_and(|a| a > 5.5);
    if !eccentric_or_distant {
        return None;
    }
    record.vol_mean_radius_km.filter(|&r| r < 100.0)?;
    Some(
        if record
            .orbital_period_days
            .is_some_and(|p| p < SHORT_PERIOD_LIMIT_DAYS)
        {
            BodyCategory::ShortPeriodComet
        } else {
            BodyCategory::LongPeriodComet
        },
    )
}

/// Low-eccentricity bodies in the 30-55 AU belt.
fn rule_kuiper_belt(record: &BodyRecord) -> Option<BodyCategory> {
    if !record.is_parentless() {
        return None;
    }
    record.semi_major_axis_au.filter(|&a| a > 30.0 && a < 55.0)?;
    record.eccentricity.filter(|&e| e < 0.3)?;
    Some(BodyCategory::KuiperBeltObject)
}

/// Eccentric, inclined bodies beyond 30 AU.
fn rule_scattered_disc(record: &BodyRecord) -> Option<BodyCategory> {
    if !record.is_parentless() {
        return None;
    }
    record.semi_major_axis_au.filter(|&a| a > 30.0)?;
    record.eccentricity.filter(|&e| e >= 0.3)?;
    record.inclination_deg.filter(|&i| i > 10.0)?;
    Some(BodyCategory::ScatteredDiscObject)
}

/// Co-orbital camps of Jupiter (5.05-5.35 AU) and Neptune (9.3-10.1 AU).
///
/// Both axis bounds are inclusive; the inclination caps differ per camp.
fn rule_trojan(record: &BodyRecord) -> Option<BodyCategory> {
    if !record.is_parentless() {
        return None;
    }
    let sma = record.semi_major_axis_au?;
    let jupiter_camp =
        (5.05..=5.35).contains(&sma) && record.inclination_deg.is_some_and(|i| i < 40.0);
    let neptune_camp =
        (9.3..=10.1).contains(&sma) && record.inclination_deg.is_some_and(|i| i < 35.0);
    (jupiter_camp || neptune_camp).then_some(BodyCategory::TrojanAsteroid)
}

/// Moderately eccentric bodies between 5.5 and 30 AU, bounds inclusive.
fn rule_centaur(record: &BodyRecord) -> Option<BodyCategory> {
    if !record.is_parentless() {
        return None;
    }
    record
        .semi_major_axis_au
        .filter(|a| (5.5..=30.0).contains(a))?;
    record.eccentricity.filter(|&e| e > 0.1)?;
    Some(BodyCategory::Centaur)
}
