//! interview-deck - browse and filter interview-question reports
//!
//! This library provides the catalog of interview reports, the filter
//! engine, HTML rendering, and the terminal page built on top of them.

pub mod catalog;
pub mod html;
pub mod logging;
pub mod ui;
