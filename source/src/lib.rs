#[macro_use]
extern crate lazy_static;

pub mod hangul;
pub mod properties;

mod composition_exclusions;
mod database;
mod error;
mod quick_checks;
mod unicode;

pub use composition_exclusions::parse_composition_exclusions;
pub use database::DatabaseStats;
pub use database::UnicodeCharacterDatabase;
pub use error::PropertiesError;
pub use error::UcdError;
pub use quick_checks::QuickCheck;
pub use quick_checks::QuickChecks;
pub use unicode::parse_unicode_data;

/// версия Unicode встроенных данных
pub const UNICODE_VERSION: &str = "15.1.0";

/// UnicodeData.txt (только строки с CCC или декомпозицией)
pub const UNICODE_DATA: &str = include_str!("./../data/ucd/15.1.0/UnicodeData.txt");

/// CompositionExclusions.txt
pub const COMPOSITION_EXCLUSIONS: &str = include_str!("./../data/ucd/15.1.0/CompositionExclusions.txt");

lazy_static! {
    /// база данных Unicode на основе встроенных данных
    pub static ref UNICODE_DATABASE: UnicodeCharacterDatabase =
        match UnicodeCharacterDatabase::from_sources(UNICODE_DATA, COMPOSITION_EXCLUSIONS) {
            Ok(database) => database,
            Err(e) => panic!("встроенные данные UCD повреждены: {}", e),
        };
}
