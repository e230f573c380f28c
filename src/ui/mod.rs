//! # UI Module
//!
//! The terminal page: filter controls, counters, and the card list.
//!
//! ## Components
//!
//! - [`App`] - controller owning the catalog, controls, and filtered view
//! - [`mod@keys`] - key bindings
//! - [`mod@render`] - drawing
//! - [`theme`] / [`config`] - colors and persisted settings
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                    Header                       │
//! ├────────────────────────┬────────────┬───────────┤
//! │  Search                │ ◀ Company ▶│ ◀ Role ▶  │
//! ├────────────────────────┴────────────┴───────────┤
//! │ N Interviews   M Companies                      │
//! ├──────────────────────────────┬──────────────────┤
//! │                              │                  │
//! │   Interview cards            │  Source text     │
//! │   (company, badges, notes,   │  (optional, `r`) │
//! │    numbered questions)       │                  │
//! │                              │                  │
//! ├──────────────────────────────┴──────────────────┤
//! │                    Footer                       │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod config;
pub mod keys;
pub mod render;
pub mod theme;

pub use app::App;
pub use keys::{handle_key, KeyOutcome};
pub use render::render;
