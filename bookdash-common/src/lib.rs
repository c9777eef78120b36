//! # Books Dashboard Common Library
//!
//! Core of the trending books dashboard:
//! - Catalog and review loading with numeric coercion
//! - Filter and sort engines over the loaded catalog
//! - Summary statistics and chart series
//! - Book detail resolution (catalog record joined with its reviews)
//! - Bootstrap configuration loading
//!
//! Everything here is synchronous and free of side effects on the loaded
//! tables; presentation is left to the caller.

pub mod catalog;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod detail;
pub mod error;
pub mod filter;
pub mod models;
pub mod reviews;
pub mod sort;
pub mod summary;
pub mod view;

mod source;

pub use catalog::{Catalog, CatalogBounds, LoadReport};
pub use dataset::Dataset;
pub use detail::{BookDetail, ReviewEntry, ReviewState};
pub use error::{Error, Result};
pub use filter::FilterSpec;
pub use models::{BookRecord, ReviewRating, ReviewRecord};
pub use reviews::ReviewTable;
pub use sort::SortSpec;
pub use summary::SummaryStats;
pub use view::FilteredView;
