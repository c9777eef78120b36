//! HTTP API handlers for bookdash-web

pub mod books;
pub mod catalog;
pub mod charts;
pub mod detail;
pub mod error;
pub mod health;
pub mod query;

pub use books::{get_books, get_summary};
pub use catalog::{get_catalog_overview, get_titles};
pub use charts::{get_price_by_year, get_price_histogram};
pub use detail::get_book_detail;
pub use error::ApiError;
pub use health::{health_routes, BuildInfo};
pub use query::{DashboardQuery, QueryParams};
