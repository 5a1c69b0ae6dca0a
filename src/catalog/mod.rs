//! Immutable catalog of curated portal content.
//!
//! All lookup operations are pure functions over tables that are loaded
//! and validated once at startup. A date lookup that finds nothing is a
//! normal outcome, never an error; the picture and quote rotations are
//! total for any valid date.

mod fixtures;

use std::collections::HashMap;

use anyhow::{bail, Result};
use chrono::{Datelike, NaiveDate};
use rand::Rng;

use crate::models::{
    AstronomicalEvent, CelestialBody, MuseumExhibit, PictureOfTheDay, Planet, QuizQuestion,
    SpaceQuote, TimelineEntry,
};

/// Raw tables a [`Catalog`] is built from. Normally produced by the
/// embedded fixtures; tests assemble their own.
#[derive(Debug, Clone, Default)]
pub struct CatalogTables {
    pub events: Vec<AstronomicalEvent>,
    pub pictures: Vec<PictureOfTheDay>,
    pub quotes: Vec<SpaceQuote>,
    pub planets: Vec<Planet>,
    pub bodies: Vec<CelestialBody>,
    pub exhibits: Vec<MuseumExhibit>,
    pub timeline: Vec<TimelineEntry>,
    pub quiz: Vec<QuizQuestion>,
}

#[derive(Debug)]
pub struct Catalog {
    events: HashMap<(u32, u32), AstronomicalEvent>,
    pictures: Vec<PictureOfTheDay>,
    quotes: Vec<SpaceQuote>,
    planets: Vec<Planet>,
    bodies: Vec<CelestialBody>,
    exhibits: Vec<MuseumExhibit>,
    timeline: Vec<TimelineEntry>,
    quiz: Vec<QuizQuestion>,
}

impl Catalog {
    /// Build the catalog from the embedded fixture tables.
    pub fn seeded() -> Result<Self> {
        Self::new(fixtures::tables()?)
    }

    /// Validate the tables and build the catalog. Fails fast on duplicate
    /// or impossible (month, day) keys and on empty rotation tables.
    pub fn new(tables: CatalogTables) -> Result<Self> {
        let mut events = HashMap::with_capacity(tables.events.len());
        for event in tables.events {
            let key = (event.month, event.day);
            // Year 2000 is a leap year, so Feb 29 entries are accepted.
            if NaiveDate::from_ymd_opt(2000, event.month, event.day).is_none() {
                bail!(
                    "event '{}' has impossible date {:02}-{:02}",
                    event.title,
                    event.month,
                    event.day
                );
            }
            if let Some(existing) = events.insert(key, event) {
                bail!(
                    "duplicate event entry for {:02}-{:02}: '{}'",
                    existing.month,
                    existing.day,
                    existing.title
                );
            }
        }

        if tables.pictures.is_empty() {
            bail!("picture-of-the-day table must not be empty");
        }
        if tables.quotes.is_empty() {
            bail!("quote table must not be empty");
        }

        let mut timeline = tables.timeline;
        timeline.sort_by_key(|entry| entry.year);

        Ok(Self {
            events,
            pictures: tables.pictures,
            quotes: tables.quotes,
            planets: tables.planets,
            bodies: tables.bodies,
            exhibits: tables.exhibits,
            timeline,
            quiz: tables.quiz,
        })
    }

    /// Event registered for the (month, day) of `date`, if any.
    /// The year of `date` is ignored.
    pub fn event_on(&self, date: NaiveDate) -> Option<&AstronomicalEvent> {
        self.events.get(&(date.month(), date.day()))
    }

    /// Picture for `date`, cycling through the table by day of year.
    /// Total: every valid date resolves to exactly one record.
    pub fn picture_of_the_day(&self, date: NaiveDate) -> &PictureOfTheDay {
        &self.pictures[date.ordinal() as usize % self.pictures.len()]
    }

    /// Quote for `date`, same day-of-year rotation as the pictures.
    pub fn quote_of_the_day(&self, date: NaiveDate) -> &SpaceQuote {
        &self.quotes[date.ordinal() as usize % self.quotes.len()]
    }

    /// Uniformly random quote, for the reshuffle control.
    pub fn random_quote<R: Rng + ?Sized>(&self, rng: &mut R) -> &SpaceQuote {
        &self.quotes[rng.gen_range(0..self.quotes.len())]
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn planet(&self, id: &str) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id == id)
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn exhibits(&self) -> &[MuseumExhibit] {
        &self.exhibits
    }

    pub fn exhibit(&self, id: &str) -> Option<&MuseumExhibit> {
        self.exhibits.iter().find(|e| e.id == id)
    }

    /// Timeline entries, ascending by year.
    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    pub fn quiz_questions(&self) -> &[QuizQuestion] {
        &self.quiz
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventCategory;

    fn event(month: u32, day: u32, year: i32, title: &str) -> AstronomicalEvent {
        AstronomicalEvent {
            month,
            day,
            year,
            title: title.to_string(),
            description: "test event".to_string(),
            category: EventCategory::Launch,
            people_involved: vec![],
            location: "test".to_string(),
            achievements: vec![],
            historical_significance: String::new(),
            technical_details: String::new(),
            duration: None,
            cost: None,
            follow_up_missions: None,
        }
    }

    fn picture(title: &str) -> PictureOfTheDay {
        PictureOfTheDay {
            title: title.to_string(),
            description: String::new(),
            image: String::new(),
            category: String::new(),
            kind: String::new(),
            facts: None,
        }
    }

    fn quote(id: &str) -> SpaceQuote {
        SpaceQuote {
            id: id.to_string(),
            quote: "q".to_string(),
            author: "a".to_string(),
            context: String::new(),
            category: String::new(),
        }
    }

    fn small_tables() -> CatalogTables {
        CatalogTables {
            events: vec![event(7, 20, 1969, "Moon landing"), event(10, 4, 1957, "Sputnik")],
            pictures: (0..3).map(|i| picture(&format!("p{i}"))).collect(),
            quotes: (0..2).map(|i| quote(&i.to_string())).collect(),
            ..Default::default()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn event_lookup_ignores_year() {
        let catalog = Catalog::new(small_tables()).unwrap();
        let a = catalog.event_on(date(2024, 7, 20)).unwrap();
        let b = catalog.event_on(date(1999, 7, 20)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.year, 1969);
    }

    #[test]
    fn missing_day_is_none() {
        let catalog = Catalog::new(small_tables()).unwrap();
        assert!(catalog.event_on(date(2024, 3, 3)).is_none());
    }

    #[test]
    fn duplicate_month_day_rejected() {
        let mut tables = small_tables();
        tables.events.push(event(7, 20, 1976, "Viking 1"));
        let err = Catalog::new(tables).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn impossible_date_rejected() {
        let mut tables = small_tables();
        tables.events.push(event(2, 30, 2000, "bad"));
        assert!(Catalog::new(tables).is_err());
    }

    #[test]
    fn empty_picture_table_rejected() {
        let mut tables = small_tables();
        tables.pictures.clear();
        assert!(Catalog::new(tables).is_err());
    }

    #[test]
    fn picture_lookup_is_total_over_leap_year() {
        let catalog = Catalog::new(small_tables()).unwrap();
        let mut day = date(2024, 1, 1);
        for _ in 0..366 {
            // Just has to resolve; panics on out-of-bounds would fail here.
            let _ = catalog.picture_of_the_day(day);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn picture_rotation_is_periodic_in_day_of_year() {
        let catalog = Catalog::new(small_tables()).unwrap();
        // Table length 3: ordinals 10 and 13 map to the same record.
        let a = catalog.picture_of_the_day(date(2023, 1, 10));
        let b = catalog.picture_of_the_day(date(2023, 1, 13));
        assert_eq!(a, b);
        let c = catalog.picture_of_the_day(date(2023, 1, 11));
        assert_ne!(a, c);
    }

    #[test]
    fn quote_rotation_cycles() {
        let catalog = Catalog::new(small_tables()).unwrap();
        let a = catalog.quote_of_the_day(date(2023, 1, 2));
        let b = catalog.quote_of_the_day(date(2023, 1, 4));
        assert_eq!(a, b);
    }

    #[test]
    fn seeded_catalog_has_apollo_11_on_july_20() {
        let catalog = Catalog::seeded().unwrap();
        let apollo = catalog.event_on(date(2024, 7, 20)).unwrap();
        assert_eq!(apollo.year, 1969);
        assert_eq!(apollo.category, EventCategory::Historic);
        assert_eq!(apollo, catalog.event_on(date(1999, 7, 20)).unwrap());
    }

    #[test]
    fn seeded_catalog_tables_are_populated() {
        let catalog = Catalog::seeded().unwrap();
        assert!(catalog.event_count() >= 12);
        assert_eq!(catalog.planets().len(), 8);
        assert!(!catalog.bodies().is_empty());
        assert!(!catalog.exhibits().is_empty());
        assert!(!catalog.quiz_questions().is_empty());
        // Timeline comes back sorted by year.
        let years: Vec<i32> = catalog.timeline().iter().map(|t| t.year).collect();
        let mut sorted = years.clone();
        sorted.sort_unstable();
        assert_eq!(years, sorted);
    }

    #[test]
    fn seeded_planet_lookup_by_id() {
        let catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.planet("mars").unwrap().name, "Mars");
        assert!(catalog.planet("krypton").is_none());
    }
}
