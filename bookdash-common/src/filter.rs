//! Filter engine: price range, year range and genre membership
//!
//! All predicates are conjunctive, so they are evaluated as a single combined
//! predicate per row. Bounds are inclusive on both ends.

use crate::catalog::Catalog;
use crate::models::BookRecord;
use crate::view::FilteredView;
use crate::{Error, Result};
use serde::Serialize;
use std::collections::BTreeSet;

/// Current filter state
///
/// An empty `genres` set means every genre passes, which is also the
/// default selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSpec {
    pub price_min: f64,
    pub price_max: f64,
    pub year_min: i32,
    pub year_max: i32,
    pub genres: BTreeSet<String>,
}

impl FilterSpec {
    /// Spec covering the whole catalog, with every genre selected
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let bounds = catalog.bounds();
        Self {
            price_min: bounds.price_min,
            price_max: bounds.price_max,
            year_min: bounds.year_min,
            year_max: bounds.year_max,
            genres: BTreeSet::new(),
        }
    }

    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    pub fn with_year_range(mut self, min: i32, max: i32) -> Self {
        self.year_min = min;
        self.year_max = max;
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    /// Reject specs that no control could produce
    ///
    /// Inverted or non-finite ranges are caller errors; a well-formed spec
    /// that simply matches nothing is not.
    pub fn validate(&self) -> Result<()> {
        if !self.price_min.is_finite() || !self.price_max.is_finite() {
            return Err(Error::InvalidInput(
                "price bounds must be finite numbers".to_string(),
            ));
        }
        if self.price_min > self.price_max {
            return Err(Error::InvalidInput(format!(
                "price_min {} exceeds price_max {}",
                self.price_min, self.price_max
            )));
        }
        if self.year_min > self.year_max {
            return Err(Error::InvalidInput(format!(
                "year_min {} exceeds year_max {}",
                self.year_min, self.year_max
            )));
        }
        Ok(())
    }

    fn matches(&self, book: &BookRecord, genre_available: bool) -> bool {
        let price_ok = self.price_min <= book.price && book.price <= self.price_max;
        let year_ok =
            self.year_min <= book.publication_year && book.publication_year <= self.year_max;
        let genre_ok = !genre_available
            || self.genres.is_empty()
            || book
                .genre
                .as_ref()
                .is_some_and(|genre| self.genres.contains(genre));

        price_ok && year_ok && genre_ok
    }
}

/// Restrict `view` to rows satisfying `spec`, preserving order
///
/// When the underlying catalog has no genre column the genre predicate is
/// skipped entirely. An empty result is a valid outcome.
pub fn filter<'a>(view: &FilteredView<'a>, spec: &FilterSpec) -> FilteredView<'a> {
    let genre_available = view.genre_available();
    let rows = view
        .iter()
        .filter(|book| spec.matches(book, genre_available))
        .collect();

    FilteredView::new(rows, genre_available)
}
