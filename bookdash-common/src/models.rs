//! Typed catalog and review records
//!
//! Rows are decoded into these structs once at load time and never mutated
//! afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Book title, the join key against [`ReviewRecord::book_name`]
    pub title: String,
    pub genre: Option<String>,
    /// Always finite; rows failing coercion never become records
    pub price: f64,
    pub publication_year: i32,
    pub rating: Option<f64>,
    /// Trending rank, when the source carries one
    pub rank: Option<u32>,
    pub author: Option<String>,
    pub url: Option<String>,
}

/// One customer review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Title of the reviewed book
    pub book_name: String,
    pub reviewer: String,
    /// Review body; `None` means no text was provided
    pub text: Option<String>,
    pub rating: ReviewRating,
    pub review_title: Option<String>,
    pub verified: Option<bool>,
    pub date: Option<String>,
}

/// Reviewer rating, numeric when it parses and categorical otherwise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReviewRating {
    Numeric(f64),
    Label(String),
}

impl ReviewRating {
    /// Interpret a raw field, preferring a finite number
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => ReviewRating::Numeric(value),
            _ => ReviewRating::Label(trimmed.to_string()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ReviewRating::Numeric(value) => Some(*value),
            ReviewRating::Label(_) => None,
        }
    }
}

impl fmt::Display for ReviewRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewRating::Numeric(value) => write!(f, "{}", value),
            ReviewRating::Label(label) => f.write_str(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_rating_numeric() {
        assert_eq!(ReviewRating::parse(" 4.5 "), ReviewRating::Numeric(4.5));
        assert_eq!(ReviewRating::parse("5").as_f64(), Some(5.0));
    }

    #[test]
    fn test_review_rating_categorical() {
        let rating = ReviewRating::parse("five stars");
        assert_eq!(rating, ReviewRating::Label("five stars".to_string()));
        assert_eq!(rating.as_f64(), None);
        assert_eq!(rating.to_string(), "five stars");
    }

    #[test]
    fn test_review_rating_rejects_non_finite() {
        assert_eq!(ReviewRating::parse("NaN"), ReviewRating::Label("NaN".to_string()));
    }

    #[test]
    fn test_review_rating_serializes_untagged() {
        let json = serde_json::to_value(ReviewRating::Numeric(4.0)).unwrap();
        assert_eq!(json, serde_json::json!(4.0));

        let json = serde_json::to_value(ReviewRating::Label("great".to_string())).unwrap();
        assert_eq!(json, serde_json::json!("great"));
    }
}
