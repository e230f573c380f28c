//! # Catalog Module
//!
//! The in-memory list of interview reports and everything derived from it.
//!
//! ## Pieces
//!
//! | Module | Provides |
//! |--------|----------|
//! | [`record`] | [`InterviewRecord`] and [`QuestionEntry`] |
//! | [`loader`] | [`Catalog`], built from the embedded definition or a file |
//! | [`filter`] | [`Query`] and the pure [`filter()`] function |
//! | [`options`] | selector options ([`FilterOptions`]) and counters ([`Stats`]) |
//! | [`enrich`] | best-effort background fetches of supplementary text |
//!
//! The catalog is built once at startup. Filtering only ever derives a view;
//! the one mutation after startup is attaching fetched raw text to a record.

pub mod enrich;
pub mod filter;
pub mod loader;
pub mod options;
pub mod record;

pub use enrich::{spawn_enrichment, EnrichSource, Enrichment, EnrichmentTasks, FetchError};
pub use filter::{filter, filter_positions, Query};
pub use loader::{Catalog, CatalogError};
pub use options::{FilterOptions, Stats, ALL_COMPANIES, ALL_ROLES};
pub use record::{InterviewRecord, QuestionEntry};
