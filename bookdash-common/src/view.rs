//! Derived, read-only views over the catalog

use crate::models::BookRecord;
use serde::Serialize;

/// Ordered subset of catalog rows
///
/// Views borrow records from the catalog that produced them and are rebuilt
/// rather than mutated whenever filter or sort parameters change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredView<'a> {
    rows: Vec<&'a BookRecord>,
    #[serde(skip)]
    genre_available: bool,
}

impl<'a> FilteredView<'a> {
    pub(crate) fn new(rows: Vec<&'a BookRecord>, genre_available: bool) -> Self {
        Self {
            rows,
            genre_available,
        }
    }

    pub fn rows(&self) -> &[&'a BookRecord] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a BookRecord> + '_ {
        self.rows.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// An empty view is a valid outcome, not an error
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the source catalog carried a genre column
    pub fn genre_available(&self) -> bool {
        self.genre_available
    }

    /// Titles in view order
    pub fn titles(&self) -> Vec<&'a str> {
        self.rows.iter().map(|book| book.title.as_str()).collect()
    }

    pub(crate) fn into_rows(self) -> Vec<&'a BookRecord> {
        self.rows
    }
}
