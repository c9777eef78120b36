//! Book catalog loading and catalog-wide facets
//!
//! The loader decodes the raw catalog CSV into [`BookRecord`]s, coercing
//! price and publication year to numbers. Rows whose price (or year) cannot
//! be coerced are dropped from the catalog rather than defaulted.

use crate::filter::{self, FilterSpec};
use crate::models::BookRecord;
use crate::source::{self, HeaderIndex};
use crate::view::FilteredView;
use crate::{Error, Result};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::io::Read;
use tracing::{debug, info, warn};

/// Catalog column names, matched after trimming header whitespace
pub mod columns {
    pub const TITLE: &str = "book title";
    pub const PRICE: &str = "book price";
    pub const YEAR: &str = "year of publication";
    pub const GENRE: &str = "genre";
    pub const RATING: &str = "rating";
    pub const RANK: &str = "Rank";
    pub const AUTHOR: &str = "author";
    pub const URL: &str = "url";
}

const SOURCE_NAME: &str = "book catalog";

/// Catalog-wide extremes used to seed default filter bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogBounds {
    pub price_min: f64,
    pub price_max: f64,
    pub year_min: i32,
    pub year_max: i32,
}

/// Row accounting for one catalog load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub raw_rows: usize,
    pub loaded_rows: usize,
    pub dropped_invalid_price: usize,
    pub dropped_invalid_year: usize,
    pub dropped_missing_title: usize,
}

impl LoadReport {
    pub fn dropped_rows(&self) -> usize {
        self.dropped_invalid_price + self.dropped_invalid_year + self.dropped_missing_title
    }
}

/// Validated, immutable book catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<BookRecord>,
    genre_available: bool,
    bounds: CatalogBounds,
    report: LoadReport,
}

impl Catalog {
    /// Build a catalog from already-typed records
    ///
    /// Fails with [`Error::EmptyCatalog`] when `books` is empty, since the
    /// catalog bounds would be undefined.
    pub fn from_records(books: Vec<BookRecord>, genre_available: bool) -> Result<Self> {
        let report = LoadReport {
            raw_rows: books.len(),
            loaded_rows: books.len(),
            ..LoadReport::default()
        };
        Self::with_report(books, genre_available, report)
    }

    fn with_report(
        books: Vec<BookRecord>,
        genre_available: bool,
        report: LoadReport,
    ) -> Result<Self> {
        let bounds = compute_bounds(&books).ok_or(Error::EmptyCatalog {
            raw_rows: report.raw_rows,
        })?;

        Ok(Self {
            books,
            genre_available,
            bounds,
            report,
        })
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Whether the source carried a genre column at all
    pub fn genre_available(&self) -> bool {
        self.genre_available
    }

    pub fn bounds(&self) -> CatalogBounds {
        self.bounds
    }

    pub fn report(&self) -> LoadReport {
        self.report
    }

    /// Unfiltered view over every record, in table order
    pub fn view(&self) -> FilteredView<'_> {
        FilteredView::new(self.books.iter().collect(), self.genre_available)
    }

    /// Apply `spec` to the whole catalog
    pub fn filter(&self, spec: &FilterSpec) -> FilteredView<'_> {
        filter::filter(&self.view(), spec)
    }

    /// Distinct titles in first-appearance order, for the book selector
    pub fn titles(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.books
            .iter()
            .map(|book| book.title.as_str())
            .filter(|title| seen.insert(*title))
            .collect()
    }

    /// Sorted distinct genres; empty when the catalog has no genre column
    pub fn genres(&self) -> Vec<&str> {
        self.books
            .iter()
            .filter_map(|book| book.genre.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// First record with exactly this title, in table order
    pub fn find_by_title(&self, title: &str) -> Option<&BookRecord> {
        self.books.iter().find(|book| book.title == title)
    }
}

fn compute_bounds(books: &[BookRecord]) -> Option<CatalogBounds> {
    let first = books.first()?;
    let seed = CatalogBounds {
        price_min: first.price,
        price_max: first.price,
        year_min: first.publication_year,
        year_max: first.publication_year,
    };

    Some(books.iter().skip(1).fold(seed, |acc, book| CatalogBounds {
        price_min: acc.price_min.min(book.price),
        price_max: acc.price_max.max(book.price),
        year_min: acc.year_min.min(book.publication_year),
        year_max: acc.year_max.max(book.publication_year),
    }))
}

/// Decode a raw catalog CSV into a validated [`Catalog`]
///
/// # Errors
/// - [`Error::MissingColumn`] when the title, price or year column is absent
/// - [`Error::EmptyCatalog`] when no row survives coercion
/// - [`Error::Csv`] on malformed CSV input
pub fn load_catalog<R: Read>(input: R) -> Result<Catalog> {
    let mut reader = source::csv_reader(input);
    let headers = HeaderIndex::new(SOURCE_NAME, reader.headers()?);

    // Price is checked first so its absence is the reported fault
    let price_idx = headers.required(columns::PRICE)?;
    let title_idx = headers.required(columns::TITLE)?;
    let year_idx = headers.required(columns::YEAR)?;
    let genre_idx = headers.optional(columns::GENRE);
    let rating_idx = headers.optional(columns::RATING);
    let rank_idx = headers.optional(columns::RANK);
    let author_idx = headers.optional(columns::AUTHOR);
    let url_idx = headers.optional(columns::URL);

    if genre_idx.is_none() {
        info!("Catalog has no '{}' column; genre filtering disabled", columns::GENRE);
    }

    let mut report = LoadReport::default();
    let mut books = Vec::new();

    for (row_number, record) in reader.records().enumerate() {
        let record = record?;
        report.raw_rows += 1;

        let Some(price) = source::parse_finite(source::field(&record, price_idx)) else {
            debug!(
                "Dropping catalog row {}: price {:?} is not numeric",
                row_number + 1,
                source::field(&record, price_idx)
            );
            report.dropped_invalid_price += 1;
            continue;
        };

        let Some(publication_year) = source::parse_integral(source::field(&record, year_idx))
            .and_then(|year| i32::try_from(year).ok())
        else {
            debug!(
                "Dropping catalog row {}: year {:?} is not an integer",
                row_number + 1,
                source::field(&record, year_idx)
            );
            report.dropped_invalid_year += 1;
            continue;
        };

        let Some(title) = source::optional_text(&record, Some(title_idx)) else {
            debug!("Dropping catalog row {}: empty title", row_number + 1);
            report.dropped_missing_title += 1;
            continue;
        };

        books.push(BookRecord {
            title,
            genre: source::optional_text(&record, genre_idx),
            price,
            publication_year,
            rating: rating_idx.and_then(|idx| source::parse_finite(source::field(&record, idx))),
            rank: rank_idx
                .and_then(|idx| source::parse_integral(source::field(&record, idx)))
                .and_then(|rank| u32::try_from(rank).ok()),
            author: source::optional_text(&record, author_idx),
            url: source::optional_text(&record, url_idx),
        });
    }

    report.loaded_rows = books.len();

    if report.dropped_rows() > 0 {
        warn!(
            "Dropped {} of {} catalog rows ({} invalid price, {} invalid year, {} missing title)",
            report.dropped_rows(),
            report.raw_rows,
            report.dropped_invalid_price,
            report.dropped_invalid_year,
            report.dropped_missing_title
        );
    }

    let catalog = Catalog::with_report(books, genre_idx.is_some(), report)?;
    info!(
        "Loaded {} catalog rows (price {:.2}..{:.2}, years {}..{})",
        catalog.len(),
        catalog.bounds.price_min,
        catalog.bounds.price_max,
        catalog.bounds.year_min,
        catalog.bounds.year_max
    );

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_CSV: &str = "\
Rank,book title,book price,rating,author,year of publication,genre,url
1,Iron Flame,18.42,4.1,Rebecca Yarros,2023,Fantasy,https://example.com/1
2,Atomic Habits,11.98,4.8,James Clear,2018,Self Help,https://example.com/2
3,Fourth Wing,N/A,4.6,Rebecca Yarros,2023,Fantasy,https://example.com/3
4,The Housemaid,9.99,4.5,Freida McFadden,2022,Thriller,
";

    #[test]
    fn test_load_catalog_coerces_and_drops() {
        let catalog = load_catalog(CATALOG_CSV.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 3);
        assert!(catalog.books().iter().all(|b| b.title != "Fourth Wing"));

        let report = catalog.report();
        assert_eq!(report.raw_rows, 4);
        assert_eq!(report.loaded_rows, 3);
        assert_eq!(report.dropped_invalid_price, 1);
        assert_eq!(report.dropped_rows(), 1);
    }

    #[test]
    fn test_load_catalog_decodes_fields() {
        let catalog = load_catalog(CATALOG_CSV.as_bytes()).unwrap();
        let first = &catalog.books()[0];

        assert_eq!(first.title, "Iron Flame");
        assert_eq!(first.genre.as_deref(), Some("Fantasy"));
        assert_eq!(first.price, 18.42);
        assert_eq!(first.publication_year, 2023);
        assert_eq!(first.rating, Some(4.1));
        assert_eq!(first.rank, Some(1));
        assert_eq!(first.author.as_deref(), Some("Rebecca Yarros"));

        let last = &catalog.books()[2];
        assert_eq!(last.url, None);
    }

    #[test]
    fn test_load_catalog_bounds() {
        let catalog = load_catalog(CATALOG_CSV.as_bytes()).unwrap();
        let bounds = catalog.bounds();

        assert_eq!(bounds.price_min, 9.99);
        assert_eq!(bounds.price_max, 18.42);
        assert_eq!(bounds.year_min, 2018);
        assert_eq!(bounds.year_max, 2023);
    }

    #[test]
    fn test_load_catalog_trims_header_names() {
        let csv = " book title , book price ,year of publication \nDune,9.5,1965\n";
        let catalog = load_catalog(csv.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(!catalog.genre_available());
    }

    #[test]
    fn test_load_catalog_missing_price_column() {
        let csv = "book title,year of publication\nDune,1965\n";
        let err = load_catalog(csv.as_bytes()).unwrap_err();

        match err {
            Error::MissingColumn { column, .. } => assert_eq!(column, "book price"),
            other => panic!("Expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_load_catalog_empty_after_coercion() {
        let csv = "book title,book price,year of publication\nDune,free,1965\nEmma,,1815\n";
        let err = load_catalog(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, Error::EmptyCatalog { raw_rows: 2 }));
    }

    #[test]
    fn test_load_catalog_header_only() {
        let csv = "book title,book price,year of publication\n";
        let err = load_catalog(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, Error::EmptyCatalog { raw_rows: 0 }));
    }

    #[test]
    fn test_load_catalog_integral_float_year() {
        let csv = "book title,book price,year of publication\nDune,9.5,1965.0\nEmma,4.0,unknown\n";
        let catalog = load_catalog(csv.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.books()[0].publication_year, 1965);
        assert_eq!(catalog.report().dropped_invalid_year, 1);
    }

    #[test]
    fn test_titles_deduplicated_in_table_order() {
        let csv = "book title,book price,year of publication\nB,1,2000\nA,2,2001\nB,3,2002\n";
        let catalog = load_catalog(csv.as_bytes()).unwrap();

        assert_eq!(catalog.titles(), vec!["B", "A"]);
        assert_eq!(catalog.find_by_title("B").unwrap().price, 1.0);
    }

    #[test]
    fn test_genres_sorted_distinct() {
        let catalog = load_catalog(CATALOG_CSV.as_bytes()).unwrap();
        assert_eq!(catalog.genres(), vec!["Fantasy", "Self Help", "Thriller"]);
    }

    #[test]
    fn test_from_records_empty() {
        let err = Catalog::from_records(Vec::new(), true).unwrap_err();
        assert!(matches!(err, Error::EmptyCatalog { raw_rows: 0 }));
    }
}
