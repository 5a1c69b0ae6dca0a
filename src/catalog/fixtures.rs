//! Embedded fixture tables, parsed from the JSON files under `data/`.
//!
//! The tables are version-controlled content, not user input, but they
//! are still parsed and validated at startup rather than trusted as
//! hand-maintained literals.

use anyhow::{Context, Result};

use super::CatalogTables;

pub fn tables() -> Result<CatalogTables> {
    Ok(CatalogTables {
        events: serde_json::from_str(include_str!("../../data/events.json"))
            .context("failed to parse events fixture")?,
        pictures: serde_json::from_str(include_str!("../../data/pictures.json"))
            .context("failed to parse pictures fixture")?,
        quotes: serde_json::from_str(include_str!("../../data/quotes.json"))
            .context("failed to parse quotes fixture")?,
        planets: serde_json::from_str(include_str!("../../data/planets.json"))
            .context("failed to parse planets fixture")?,
        bodies: serde_json::from_str(include_str!("../../data/bodies.json"))
            .context("failed to parse bodies fixture")?,
        exhibits: serde_json::from_str(include_str!("../../data/exhibits.json"))
            .context("failed to parse exhibits fixture")?,
        timeline: serde_json::from_str(include_str!("../../data/timeline.json"))
            .context("failed to parse timeline fixture")?,
        quiz: serde_json::from_str(include_str!("../../data/quiz.json"))
            .context("failed to parse quiz fixture")?,
    })
}
