//! Summary statistics over a filtered view

use crate::view::FilteredView;
use serde::Serialize;

/// Indicator shown in place of statistics that are undefined for an empty view
pub const NO_DATA: &str = "No data";

/// Count and price statistics for a view
///
/// The price statistics are `None` exactly when `count == 0`. They are never
/// defaulted to zero, which would read as "every book is free".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub count: usize,
    pub mean_price: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl SummaryStats {
    pub fn has_data(&self) -> bool {
        self.count > 0
    }

    pub fn display_mean(&self) -> String {
        display_price(self.mean_price)
    }

    pub fn display_min(&self) -> String {
        display_price(self.min_price)
    }

    pub fn display_max(&self) -> String {
        display_price(self.max_price)
    }
}

/// Two-decimal rendering of an optional statistic
pub fn display_price(value: Option<f64>) -> String {
    match value {
        Some(price) => format!("{:.2}", price),
        None => NO_DATA.to_string(),
    }
}

/// Compute [`SummaryStats`] for `view`
pub fn summarize(view: &FilteredView<'_>) -> SummaryStats {
    let count = view.len();
    if count == 0 {
        return SummaryStats {
            count,
            mean_price: None,
            min_price: None,
            max_price: None,
        };
    }

    let mut total = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for book in view.iter() {
        total += book.price;
        min = min.min(book.price);
        max = max.max(book.price);
    }

    SummaryStats {
        count,
        mean_price: Some(total / count as f64),
        min_price: Some(min),
        max_price: Some(max),
    }
}
