//! Sort engine for filtered views
//!
//! Sorting is stable: rows with equal keys keep their relative order from
//! the input view, in both directions.

use crate::models::BookRecord;
use crate::view::FilteredView;
use crate::Error;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Column a view can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Price,
    PublicationYear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Requested ordering for the filtered view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortSpec {
    #[default]
    None,
    PriceAsc,
    PriceDesc,
    YearAsc,
    YearDesc,
}

impl SortSpec {
    pub const ALL: [SortSpec; 5] = [
        SortSpec::None,
        SortSpec::PriceAsc,
        SortSpec::PriceDesc,
        SortSpec::YearAsc,
        SortSpec::YearDesc,
    ];

    /// Column and direction, or `None` for table order
    pub fn key(self) -> Option<(SortColumn, SortDirection)> {
        match self {
            SortSpec::None => None,
            SortSpec::PriceAsc => Some((SortColumn::Price, SortDirection::Ascending)),
            SortSpec::PriceDesc => Some((SortColumn::Price, SortDirection::Descending)),
            SortSpec::YearAsc => Some((SortColumn::PublicationYear, SortDirection::Ascending)),
            SortSpec::YearDesc => Some((SortColumn::PublicationYear, SortDirection::Descending)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortSpec::None => "none",
            SortSpec::PriceAsc => "price_asc",
            SortSpec::PriceDesc => "price_desc",
            SortSpec::YearAsc => "year_asc",
            SortSpec::YearDesc => "year_desc",
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted.is_empty() {
            return Ok(SortSpec::None);
        }
        SortSpec::ALL
            .into_iter()
            .find(|spec| spec.as_str() == wanted)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "Unknown sort '{}' (expected one of: {})",
                    s,
                    SortSpec::ALL.map(SortSpec::as_str).join(", ")
                ))
            })
    }
}

fn compare(column: SortColumn, a: &BookRecord, b: &BookRecord) -> Ordering {
    match column {
        // Prices are always finite; 0.0 and -0.0 must tie
        SortColumn::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
        SortColumn::PublicationYear => a.publication_year.cmp(&b.publication_year),
    }
}

/// Order `view` per `spec`
///
/// Never drops or duplicates rows. [`SortSpec::None`] returns the input
/// order unchanged.
pub fn sort<'a>(view: FilteredView<'a>, spec: SortSpec) -> FilteredView<'a> {
    let Some((column, direction)) = spec.key() else {
        return view;
    };

    let genre_available = view.genre_available();
    let mut rows = view.into_rows();

    // slice::sort_by is stable; reversing the comparator keeps ties in input order
    match direction {
        SortDirection::Ascending => rows.sort_by(|a, b| compare(column, a, b)),
        SortDirection::Descending => rows.sort_by(|a, b| compare(column, b, a)),
    }

    FilteredView::new(rows, genre_available)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn book(title: &str, price: f64, year: i32) -> BookRecord {
        BookRecord {
            title: title.to_string(),
            genre: None,
            price,
            publication_year: year,
            rating: None,
            rank: None,
            author: None,
            url: None,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::from_records(
            vec![
                book("A", 12.0, 2021),
                book("B", 9.0, 2019),
                book("C", 12.0, 2019),
                book("D", 30.0, 2021),
                book("E", 9.0, 2020),
            ],
            false,
        )
        .unwrap()
    }

    #[test]
    fn test_sort_none_preserves_order() {
        let catalog = sample_catalog();
        let sorted = sort(catalog.view(), SortSpec::None);
        assert_eq!(sorted.titles(), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_sort_price_asc_stable() {
        let catalog = sample_catalog();
        let sorted = sort(catalog.view(), SortSpec::PriceAsc);
        assert_eq!(sorted.titles(), vec!["B", "E", "A", "C", "D"]);
    }

    #[test]
    fn test_sort_price_desc_stable() {
        let catalog = sample_catalog();
        let sorted = sort(catalog.view(), SortSpec::PriceDesc);
        assert_eq!(sorted.titles(), vec!["D", "A", "C", "B", "E"]);
    }

    #[test]
    fn test_sort_year_asc_stable() {
        let catalog = sample_catalog();
        let sorted = sort(catalog.view(), SortSpec::YearAsc);
        assert_eq!(sorted.titles(), vec!["B", "C", "E", "A", "D"]);
    }

    #[test]
    fn test_sort_year_desc_stable() {
        let catalog = sample_catalog();
        let sorted = sort(catalog.view(), SortSpec::YearDesc);
        assert_eq!(sorted.titles(), vec!["A", "D", "E", "B", "C"]);
    }

    #[test]
    fn test_sort_price_signed_zeros_are_ties() {
        let catalog = Catalog::from_records(
            vec![book("First", 0.0, 2020), book("Second", -0.0, 2020)],
            false,
        )
        .unwrap();

        let asc = sort(catalog.view(), SortSpec::PriceAsc);
        assert_eq!(asc.titles(), vec!["First", "Second"]);

        let desc = sort(catalog.view(), SortSpec::PriceDesc);
        assert_eq!(desc.titles(), vec!["First", "Second"]);
    }

    #[test]
    fn test_sort_spec_from_str() {
        assert_eq!("price_desc".parse::<SortSpec>().unwrap(), SortSpec::PriceDesc);
        assert_eq!(" YEAR_ASC ".parse::<SortSpec>().unwrap(), SortSpec::YearAsc);
        assert_eq!("".parse::<SortSpec>().unwrap(), SortSpec::None);
        assert!("cheapest".parse::<SortSpec>().is_err());
    }

    #[test]
    fn test_sort_spec_key_mapping() {
        assert_eq!(SortSpec::None.key(), None);
        assert_eq!(
            SortSpec::YearDesc.key(),
            Some((SortColumn::PublicationYear, SortDirection::Descending))
        );
    }
}
