// iZurvive location-resolver backend: maps free-text (often misspelled or
// foreign-language) location searches to izurvive.com map deep links.

pub mod api;
pub mod catalog;
pub mod config;
pub mod format;
pub mod levenshtein;
pub mod metrics;
pub mod resolver;
