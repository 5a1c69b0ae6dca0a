//! astrodeck: core library for a space facts portal.
//!
//! Curated in-memory tables (events, pictures, quotes, planets, exhibits,
//! timeline, quiz) with deterministic date-keyed lookups, simple
//! astronomical calculators, and a narration coordinator that keeps at
//! most one utterance active no matter how many views ask to speak.

pub mod calc;
pub mod catalog;
pub mod models;
pub mod narration;
pub mod quiz;
pub mod settings;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};

pub use catalog::{Catalog, CatalogTables};
pub use narration::NarrationCoordinator;
pub use settings::{NarrationSettings, SettingsStore};

use models::AstronomicalEvent;

/// Application root: the catalog, the shared narration handle, and the
/// optional settings store, wired together once and passed to views.
pub struct Portal {
    catalog: Catalog,
    narration: NarrationCoordinator,
    settings: Option<SettingsStore>,
}

impl Portal {
    /// Portal over the seeded catalog with the default voice and
    /// default narration preferences.
    pub fn new() -> Result<Self> {
        Self::assemble(None)
    }

    /// Portal whose narration preferences persist to `settings_path`.
    pub fn with_settings(settings_path: PathBuf) -> Result<Self> {
        Self::assemble(Some(SettingsStore::new(settings_path)?))
    }

    /// Portal over explicit collaborators, for tests and embedders that
    /// bring their own catalog or synthesizer.
    pub fn from_parts(catalog: Catalog, narration: NarrationCoordinator) -> Self {
        Self {
            catalog,
            narration,
            settings: None,
        }
    }

    fn assemble(settings: Option<SettingsStore>) -> Result<Self> {
        let prefs = settings
            .as_ref()
            .map(|store| store.narration())
            .unwrap_or_default();

        let narration = NarrationCoordinator::with_chime_voice(prefs.rate, prefs.volume);
        narration.set_enabled(prefs.enabled);

        Ok(Self {
            catalog: Catalog::seeded()?,
            narration,
            settings,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn narration(&self) -> &NarrationCoordinator {
        &self.narration
    }

    /// Toggle narration, persisting the preference when a settings
    /// store is attached.
    pub fn set_narration_enabled(&self, enabled: bool) -> Result<()> {
        self.narration.set_enabled(enabled);
        if let Some(store) = &self.settings {
            let mut prefs = store.narration();
            prefs.enabled = enabled;
            store.update_narration(prefs)?;
        }
        Ok(())
    }

    /// Narrate the event registered for `date`, if any, and return it.
    pub fn narrate_event(&self, date: NaiveDate) -> Option<&AstronomicalEvent> {
        let event = self.catalog.event_on(date)?;
        self.narration.speak(&event_speech(date, event));
        Some(event)
    }

    /// Birthday lookup: narrates the matching event, or the stock
    /// consolation line when the date has no entry.
    pub fn narrate_birthday(&self, date: NaiveDate) -> Option<&AstronomicalEvent> {
        match self.catalog.event_on(date) {
            Some(event) => {
                self.narration.speak(&format!(
                    "On your birthday, {}, in {}, {} occurred. {}",
                    format_month_day(date),
                    event.year,
                    event.title,
                    event.description
                ));
                Some(event)
            }
            None => {
                self.narration.speak(
                    "While we don't have a specific space event recorded for your exact \
                     birthday, every day in space history is special!",
                );
                None
            }
        }
    }

    pub fn narrate_picture(&self, date: NaiveDate) {
        let picture = self.catalog.picture_of_the_day(date);
        self.narration.speak(&format!(
            "Today's astronomy picture: {}. {}",
            picture.title, picture.description
        ));
    }

    pub fn narrate_quote(&self, date: NaiveDate) {
        let quote = self.catalog.quote_of_the_day(date);
        self.narration
            .speak(&format!("Quote of the day: {} by {}", quote.quote, quote.author));
    }

    /// Narrate a planet blurb; false when the id is unknown.
    pub fn narrate_planet(&self, id: &str) -> bool {
        match self.catalog.planet(id) {
            Some(planet) => {
                self.narration
                    .speak(&format!("{}: {}", planet.name, planet.description));
                true
            }
            None => false,
        }
    }

    /// Narrate a museum exhibit introduction; false when unknown.
    pub fn narrate_exhibit(&self, id: &str) -> bool {
        match self.catalog.exhibit(id) {
            Some(exhibit) => {
                self.narration.speak(&format!(
                    "Welcome to the {} exhibit. {}",
                    exhibit.name, exhibit.description
                ));
                true
            }
            None => false,
        }
    }
}

fn event_speech(date: NaiveDate, event: &AstronomicalEvent) -> String {
    format!(
        "On {}, in {}, {}. {}",
        format_month_day(date),
        event.year,
        event.title,
        event.description
    )
}

/// "July 20th" style month-and-day, matching the portal's calendar copy.
fn format_month_day(date: NaiveDate) -> String {
    format!("{} {}", date.format("%B"), ordinal(date.day()))
}

fn ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}
