pub mod event;
pub mod exhibit;
pub mod picture;
pub mod planet;
pub mod quiz;
pub mod quote;
pub mod timeline;

pub use self::event::{AstronomicalEvent, EventCategory};
pub use self::exhibit::MuseumExhibit;
pub use self::picture::PictureOfTheDay;
pub use self::planet::{CelestialBody, Planet};
pub use self::quiz::QuizQuestion;
pub use self::quote::SpaceQuote;
pub use self::timeline::{TimelineCategory, TimelineEntry};
