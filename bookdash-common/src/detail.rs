//! Detail resolver: one book's catalog metadata joined with its reviews

use crate::catalog::Catalog;
use crate::models::{BookRecord, ReviewRating, ReviewRecord};
use crate::reviews::ReviewTable;
use crate::{Error, Result};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Sentinel shown for reviews that carry no text
pub const NO_REVIEW_TEXT: &str = "No review text provided";

/// A review as presented on the detail page
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ReviewEntry<'a> {
    pub reviewer: &'a str,
    /// Review body, or [`NO_REVIEW_TEXT`]
    pub text: &'a str,
    pub has_text: bool,
    pub rating: &'a ReviewRating,
    pub review_title: Option<&'a str>,
    pub verified: Option<bool>,
    pub date: Option<&'a str>,
}

impl<'a> From<&'a ReviewRecord> for ReviewEntry<'a> {
    fn from(review: &'a ReviewRecord) -> Self {
        Self {
            reviewer: &review.reviewer,
            text: review.text.as_deref().unwrap_or(NO_REVIEW_TEXT),
            has_text: review.text.is_some(),
            rating: &review.rating,
            review_title: review.review_title.as_deref(),
            verified: review.verified,
            date: review.date.as_deref(),
        }
    }
}

/// Review state of a resolved book
///
/// `NoReviews` is an expected outcome that callers render explicitly; it is
/// neither a loading nor an error state.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewState<'a> {
    HasReviews(Vec<ReviewEntry<'a>>),
    NoReviews,
}

impl<'a> ReviewState<'a> {
    pub fn entries(&self) -> &[ReviewEntry<'a>] {
        match self {
            ReviewState::HasReviews(entries) => entries,
            ReviewState::NoReviews => &[],
        }
    }

    /// Stable state name for serialized output
    pub fn state_name(&self) -> &'static str {
        match self {
            ReviewState::HasReviews(_) => "has_reviews",
            ReviewState::NoReviews => "no_reviews",
        }
    }
}

/// Selected book with its reviews
#[derive(Debug, Clone, PartialEq)]
pub struct BookDetail<'a> {
    pub book: &'a BookRecord,
    pub reviews: ReviewState<'a>,
}

impl Serialize for BookDetail<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_struct("BookDetail", 3)?;
        out.serialize_field("book", self.book)?;
        out.serialize_field("state", self.reviews.state_name())?;
        out.serialize_field("reviews", self.reviews.entries())?;
        out.end()
    }
}

impl BookDetail<'_> {
    pub fn review_count(&self) -> usize {
        self.reviews.entries().len()
    }
}

/// Join the first catalog record titled `title` with its reviews
///
/// # Errors
/// [`Error::TitleNotFound`] when no catalog record has this title. Selection
/// lists are built from [`Catalog::titles`], so this signals a caller bug.
pub fn resolve_detail<'a>(
    catalog: &'a Catalog,
    reviews: &'a ReviewTable,
    title: &'a str,
) -> Result<BookDetail<'a>> {
    let book = catalog
        .find_by_title(title)
        .ok_or_else(|| Error::TitleNotFound(title.to_string()))?;

    let entries: Vec<ReviewEntry<'a>> = reviews.for_title(title).map(ReviewEntry::from).collect();
    let reviews = if entries.is_empty() {
        ReviewState::NoReviews
    } else {
        ReviewState::HasReviews(entries)
    };

    Ok(BookDetail { book, reviews })
}
