//! Astronomical calculators: ages, weights, light travel time and
//! distance conversion. Pure arithmetic over the catalog tables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CelestialBody, Planet};

pub const SPEED_OF_LIGHT_M_PER_S: f64 = 299_792_458.0;
pub const METERS_PER_KM: f64 = 1_000.0;
pub const METERS_PER_AU: f64 = 1.495_978_707e11;
pub const METERS_PER_LIGHT_YEAR: f64 = 9.461e15;
pub const METERS_PER_PARSEC: f64 = 3.086e16;

const DAYS_PER_YEAR: f64 = 365.25;
const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DistanceUnit {
    Meters,
    Kilometers,
    AstronomicalUnits,
    LightYears,
    Parsecs,
}

impl DistanceUnit {
    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            DistanceUnit::Meters => value,
            DistanceUnit::Kilometers => value * METERS_PER_KM,
            DistanceUnit::AstronomicalUnits => value * METERS_PER_AU,
            DistanceUnit::LightYears => value * METERS_PER_LIGHT_YEAR,
            DistanceUnit::Parsecs => value * METERS_PER_PARSEC,
        }
    }
}

/// Someone's age translated to one planet's years.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanetAge {
    pub planet: String,
    pub years: u32,
}

/// Earth weight translated to one body's surface gravity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BodyWeight {
    pub body: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LightTravelTime {
    pub seconds: f64,
    pub minutes: f64,
    pub hours: f64,
    pub days: f64,
    pub years: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DistanceConversion {
    pub kilometers: f64,
    pub astronomical_units: f64,
    pub light_years: f64,
    pub parsecs: f64,
}

/// Whole years elapsed on each planet for someone `earth_years` old.
pub fn age_on_planets(planets: &[Planet], earth_years: f64) -> Vec<PlanetAge> {
    planets
        .iter()
        .map(|planet| PlanetAge {
            planet: planet.name.clone(),
            years: (earth_years / planet.year_length).floor().max(0.0) as u32,
        })
        .collect()
}

/// Earth years between two dates, using the 365.25-day year the portal
/// always used.
pub fn age_between(birth: NaiveDate, today: NaiveDate) -> f64 {
    (today - birth).num_days() as f64 / DAYS_PER_YEAR
}

/// Weight on each body for someone weighing `earth_weight` on Earth,
/// rounded to two decimals.
pub fn weight_on_bodies(bodies: &[CelestialBody], earth_weight: f64) -> Vec<BodyWeight> {
    bodies
        .iter()
        .map(|body| BodyWeight {
            body: body.name.clone(),
            weight: (earth_weight * body.gravity * 100.0).round() / 100.0,
        })
        .collect()
}

/// How long light takes to cross the given distance.
pub fn light_travel_time(distance: f64, unit: DistanceUnit) -> LightTravelTime {
    let seconds = unit.to_meters(distance) / SPEED_OF_LIGHT_M_PER_S;
    LightTravelTime {
        seconds,
        minutes: seconds / 60.0,
        hours: seconds / 3_600.0,
        days: seconds / SECONDS_PER_DAY,
        years: seconds / (DAYS_PER_YEAR * SECONDS_PER_DAY),
    }
}

/// Express one distance in every unit the portal offers.
pub fn convert_distance(value: f64, unit: DistanceUnit) -> DistanceConversion {
    let meters = unit.to_meters(value);
    DistanceConversion {
        kilometers: meters / METERS_PER_KM,
        astronomical_units: meters / METERS_PER_AU,
        light_years: meters / METERS_PER_LIGHT_YEAR,
        parsecs: meters / METERS_PER_PARSEC,
    }
}
