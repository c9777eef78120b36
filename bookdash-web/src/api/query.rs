//! Query parameters shared by the table, summary and chart endpoints
//!
//! Every omitted bound falls back to the catalog-wide extreme, so an empty
//! query string is the dashboard's initial state.

use axum_extra::extract::{Query, WithRejection};
use bookdash_common::{Catalog, FilterSpec, SortSpec};
use serde::Deserialize;

use super::ApiError;

/// Query-string extractor that reports malformed values as [`ApiError`]
///
/// Repeated keys collect into `Vec` fields (`?genres=a&genres=b`).
pub type QueryParams<T> = WithRejection<Query<T>, ApiError>;

/// Filter and sort controls as query parameters
///
/// `genres` is repeated once per selected genre, since genre names may
/// themselves contain commas. Omitted means all genres.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub sort: Option<String>,
}

impl DashboardQuery {
    /// Build a validated filter spec seeded from the catalog bounds
    pub fn filter_spec(&self, catalog: &Catalog) -> Result<FilterSpec, ApiError> {
        let defaults = FilterSpec::for_catalog(catalog);
        let genres = self
            .genres
            .iter()
            .map(|genre| genre.trim())
            .filter(|genre| !genre.is_empty())
            .map(str::to_string);

        let spec = FilterSpec {
            price_min: self.price_min.unwrap_or(defaults.price_min),
            price_max: self.price_max.unwrap_or(defaults.price_max),
            year_min: self.year_min.unwrap_or(defaults.year_min),
            year_max: self.year_max.unwrap_or(defaults.year_max),
            genres: genres.collect(),
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn sort_spec(&self) -> Result<SortSpec, ApiError> {
        match self.sort.as_deref() {
            Some(raw) => Ok(raw.parse::<SortSpec>()?),
            None => Ok(SortSpec::None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookdash_common::catalog::load_catalog;

    fn catalog() -> Catalog {
        let csv = "\
book title,book price,year of publication,genre
Dune,9.99,1965,SF
Emma,4.5,1815,Romance
";
        load_catalog(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_empty_query_is_full_catalog() {
        let catalog = catalog();
        let spec = DashboardQuery::default().filter_spec(&catalog).unwrap();

        assert_eq!(spec, FilterSpec::for_catalog(&catalog));
        assert_eq!(DashboardQuery::default().sort_spec().unwrap(), SortSpec::None);
    }

    #[test]
    fn test_genre_list_parsing() {
        let query = DashboardQuery {
            genres: vec![" SF".to_string(), " ".to_string(), "Romance ".to_string()],
            ..DashboardQuery::default()
        };
        let spec = query.filter_spec(&catalog()).unwrap();

        assert_eq!(spec.genres.len(), 2);
        assert!(spec.genres.contains("SF"));
        assert!(spec.genres.contains("Romance"));
    }

    #[test]
    fn test_genre_names_keep_commas() {
        let query = DashboardQuery {
            genres: vec!["Mystery, Thriller & Suspense".to_string()],
            ..DashboardQuery::default()
        };
        let spec = query.filter_spec(&catalog()).unwrap();

        assert_eq!(spec.genres.len(), 1);
        assert!(spec.genres.contains("Mystery, Thriller & Suspense"));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let query = DashboardQuery {
            year_min: Some(2000),
            year_max: Some(1900),
            ..DashboardQuery::default()
        };
        assert!(matches!(query.filter_spec(&catalog()), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_unknown_sort_rejected() {
        let query = DashboardQuery {
            sort: Some("alphabetical".to_string()),
            ..DashboardQuery::default()
        };
        assert!(matches!(query.sort_spec(), Err(ApiError::BadRequest(_))));
    }
}
