//! Static localized UI text.
//!
//! The presentation layer owns all user-facing copy; the domain crates never
//! format text for display. Both language tables are compiled-in constants,
//! loaded once and read-only thereafter.

pub mod translations;

pub use translations::Translations;
