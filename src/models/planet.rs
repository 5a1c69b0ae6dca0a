use serde::{Deserialize, Serialize};

/// Solar system planet with the ratios the calculators need:
/// `year_length` in Earth years, `gravity` relative to Earth surface gravity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub year_length: f64,
    pub gravity: f64,
    pub distance_from_sun_km: f64,
    pub moons: u32,
    pub facts: Vec<String>,
}

/// Non-planet bodies used by the weight calculator (Moon, Sun, Pluto, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CelestialBody {
    pub name: String,
    pub gravity: f64,
}
