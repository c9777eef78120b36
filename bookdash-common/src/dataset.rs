//! Loaded dashboard tables and the per-request pipeline entry points
//!
//! A [`Dataset`] is built once at startup and is read-only afterwards, so it
//! can be shared across requests without locking. Every query recomputes its
//! derived view from scratch.

use crate::catalog::{self, Catalog};
use crate::config::DataSources;
use crate::detail::{self, BookDetail};
use crate::filter::FilterSpec;
use crate::reviews::{self, ReviewTable};
use crate::sort::{self, SortSpec};
use crate::view::FilteredView;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// Catalog and review tables loaded from one snapshot
#[derive(Debug, Clone)]
pub struct Dataset {
    catalog: Catalog,
    reviews: ReviewTable,
}

impl Dataset {
    pub fn new(catalog: Catalog, reviews: ReviewTable) -> Self {
        Self { catalog, reviews }
    }

    /// Load both CSV files
    ///
    /// Both paths are checked before either file is parsed, so a missing
    /// source is reported as [`Error::SourceNotFound`] with nothing loaded.
    pub fn open(sources: &DataSources) -> Result<Self> {
        for path in [&sources.catalog, &sources.reviews] {
            if !path.is_file() {
                return Err(Error::SourceNotFound { path: path.clone() });
            }
        }

        info!("Loading book catalog from {}", sources.catalog.display());
        let catalog = catalog::load_catalog(open_source(&sources.catalog)?)?;

        info!("Loading reviews from {}", sources.reviews.display());
        let reviews = reviews::load_reviews(open_source(&sources.reviews)?)?;

        Ok(Self::new(catalog, reviews))
    }

    /// Load both tables from in-memory or streamed CSV
    pub fn from_readers<C: Read, R: Read>(catalog: C, reviews: R) -> Result<Self> {
        Ok(Self::new(
            catalog::load_catalog(catalog)?,
            reviews::load_reviews(reviews)?,
        ))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn reviews(&self) -> &ReviewTable {
        &self.reviews
    }

    /// Filter the catalog, then order the result
    pub fn query(&self, filter: &FilterSpec, order: SortSpec) -> FilteredView<'_> {
        sort::sort(self.catalog.filter(filter), order)
    }

    /// Resolve the detail page for one title
    pub fn detail<'a>(&'a self, title: &'a str) -> Result<BookDetail<'a>> {
        detail::resolve_detail(&self.catalog, &self.reviews, title)
    }
}

fn open_source(path: &Path) -> Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}
