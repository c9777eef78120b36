//! Chart series derived from a filtered view
//!
//! Two datasets back the dashboard charts: price by publication year (bar)
//! and the price distribution (histogram). Styling is left to the renderer.

use crate::view::FilteredView;
use crate::{Error, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Bin count used by the price distribution chart
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;

/// One bar of the price-by-year chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearPriceBar {
    pub year: i32,
    /// Sum of prices for the year, i.e. the stacked bar height
    pub total_price: f64,
    pub book_count: usize,
    pub mean_price: f64,
}

/// One bucket of the price histogram
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Aggregate the view per publication year, ascending by year
pub fn price_by_year(view: &FilteredView<'_>) -> Vec<YearPriceBar> {
    let mut per_year: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for book in view.iter() {
        let entry = per_year.entry(book.publication_year).or_insert((0.0, 0));
        entry.0 += book.price;
        entry.1 += 1;
    }

    per_year
        .into_iter()
        .map(|(year, (total_price, book_count))| YearPriceBar {
            year,
            total_price,
            book_count,
            mean_price: total_price / book_count as f64,
        })
        .collect()
}

/// Equal-width price histogram over the view's price span
///
/// Bins are half-open `[lower, upper)` except the last, which also includes
/// the maximum price. An empty view produces no bins; a view whose prices are
/// all equal produces a single zero-width bin.
pub fn price_histogram(view: &FilteredView<'_>, bins: usize) -> Result<Vec<HistogramBin>> {
    if bins == 0 {
        return Err(Error::InvalidInput(
            "histogram bin count must be at least 1".to_string(),
        ));
    }

    let Some((min, max)) = view.iter().fold(None, |span: Option<(f64, f64)>, book| {
        Some(match span {
            Some((lo, hi)) => (lo.min(book.price), hi.max(book.price)),
            None => (book.price, book.price),
        })
    }) else {
        return Ok(Vec::new());
    };

    if min == max {
        return Ok(vec![HistogramBin {
            lower: min,
            upper: max,
            count: view.len(),
        }]);
    }

    let width = (max - min) / bins as f64;
    let mut histogram: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for book in view.iter() {
        let slot = (((book.price - min) / width) as usize).min(bins - 1);
        histogram[slot].count += 1;
    }

    Ok(histogram)
}
