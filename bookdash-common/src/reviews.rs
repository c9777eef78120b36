//! Customer review table loading

use crate::models::{ReviewRating, ReviewRecord};
use crate::source::{self, HeaderIndex};
use crate::Result;
use std::io::Read;
use tracing::info;

/// Review column names, matched after trimming header whitespace
pub mod columns {
    pub const BOOK_NAME: &str = "book name";
    pub const REVIEWER: &str = "reviewer";
    pub const RATING: &str = "reviewer rating";
    pub const TEXT: &str = "review description";
    pub const TITLE: &str = "review title";
    pub const VERIFIED: &str = "is_verified";
    pub const DATE: &str = "date";
}

const SOURCE_NAME: &str = "review list";

/// Immutable review table in source order
#[derive(Debug, Clone, Default)]
pub struct ReviewTable {
    reviews: Vec<ReviewRecord>,
}

impl ReviewTable {
    pub fn new(reviews: Vec<ReviewRecord>) -> Self {
        Self { reviews }
    }

    pub fn reviews(&self) -> &[ReviewRecord] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Reviews whose book name equals `title`, in table order
    pub fn for_title<'a>(&'a self, title: &'a str) -> impl Iterator<Item = &'a ReviewRecord> + 'a {
        self.reviews
            .iter()
            .filter(move |review| review.book_name == title)
    }
}

/// Decode a raw review CSV into a [`ReviewTable`]
///
/// Review rows are never dropped: an absent review text is a valid state and
/// an unparseable rating is kept as a categorical label.
pub fn load_reviews<R: Read>(input: R) -> Result<ReviewTable> {
    let mut reader = source::csv_reader(input);
    let headers = HeaderIndex::new(SOURCE_NAME, reader.headers()?);

    let book_idx = headers.required(columns::BOOK_NAME)?;
    let reviewer_idx = headers.required(columns::REVIEWER)?;
    let rating_idx = headers.required(columns::RATING)?;
    let text_idx = headers.optional(columns::TEXT);
    let title_idx = headers.optional(columns::TITLE);
    let verified_idx = headers.optional(columns::VERIFIED);
    let date_idx = headers.optional(columns::DATE);

    if text_idx.is_none() {
        info!(
            "Review list has no '{}' column; all reviews shown without text",
            columns::TEXT
        );
    }

    let mut reviews = Vec::new();
    for record in reader.records() {
        let record = record?;
        reviews.push(ReviewRecord {
            book_name: source::field(&record, book_idx).trim().to_string(),
            reviewer: source::field(&record, reviewer_idx).trim().to_string(),
            text: source::optional_text(&record, text_idx),
            rating: ReviewRating::parse(source::field(&record, rating_idx)),
            review_title: source::optional_text(&record, title_idx),
            verified: verified_idx.and_then(|idx| source::parse_flag(source::field(&record, idx))),
            date: source::optional_text(&record, date_idx),
        });
    }

    info!("Loaded {} reviews", reviews.len());
    Ok(ReviewTable::new(reviews))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const REVIEWS_CSV: &str = "\
Sno,book name,review title,reviewer,reviewer rating,review description,is_verified,date
0,Iron Flame,Loved it,Ana,5,Could not put it down,True,01-01-2024
1,Atomic Habits,Useful,Bruno,4,,False,02-01-2024
2,Iron Flame,Meh,Carla,ok,Slower than the first,True,03-01-2024
";

    #[test]
    fn test_load_reviews_decodes_rows() {
        let table = load_reviews(REVIEWS_CSV.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);

        let first = &table.reviews()[0];
        assert_eq!(first.book_name, "Iron Flame");
        assert_eq!(first.reviewer, "Ana");
        assert_eq!(first.rating, ReviewRating::Numeric(5.0));
        assert_eq!(first.text.as_deref(), Some("Could not put it down"));
        assert_eq!(first.review_title.as_deref(), Some("Loved it"));
        assert_eq!(first.verified, Some(true));
    }

    #[test]
    fn test_load_reviews_empty_text_is_absent() {
        let table = load_reviews(REVIEWS_CSV.as_bytes()).unwrap();
        assert_eq!(table.reviews()[1].text, None);
    }

    #[test]
    fn test_load_reviews_categorical_rating() {
        let table = load_reviews(REVIEWS_CSV.as_bytes()).unwrap();
        assert_eq!(table.reviews()[2].rating, ReviewRating::Label("ok".to_string()));
    }

    #[test]
    fn test_for_title_preserves_order() {
        let table = load_reviews(REVIEWS_CSV.as_bytes()).unwrap();
        let reviewers: Vec<&str> = table
            .for_title("Iron Flame")
            .map(|r| r.reviewer.as_str())
            .collect();
        assert_eq!(reviewers, vec!["Ana", "Carla"]);
    }

    #[test]
    fn test_load_reviews_without_text_column() {
        let csv = "book name,reviewer,reviewer rating\nDune,Paul,5\n";
        let table = load_reviews(csv.as_bytes()).unwrap();
        assert_eq!(table.reviews()[0].text, None);
    }

    #[test]
    fn test_load_reviews_missing_join_key() {
        let csv = "title,reviewer,reviewer rating\nDune,Paul,5\n";
        let err = load_reviews(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { .. }));
    }
}
