use crate::omdb::TitleRecord;
use crate::rating::normalize_rating;
use crate::Order;
use getset::Getters;
use serde::{Deserialize, Serialize};

/// One entry of the popular listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[get = "pub"]
pub struct MovieSummary {
    title: String,
    year: String,
    poster: String,
    rating: f64,
}

impl MovieSummary {
    pub fn new<T, Y, P>(title: T, year: Y, poster: P, rating: f64) -> Self
    where
        T: Into<String>,
        Y: Into<String>,
        P: Into<String>,
    {
        Self {
            title: title.into(),
            year: year.into(),
            poster: poster.into(),
            rating,
        }
    }

    /// Build a summary from a title lookup. Lookups OMDb answered with a miss yield `None`.
    pub fn from_record(record: TitleRecord) -> Option<Self> {
        if record.is_failure() {
            return None;
        }

        let rating = normalize_rating(record.imdb_rating());
        let (title, year, poster) = record.into_parts();

        Some(Self {
            title: title.unwrap_or_default(),
            year: year.unwrap_or_default(),
            poster: poster.unwrap_or_default(),
            rating,
        })
    }
}

/// Sort movies by rating in the given direction. Ties keep no particular order.
pub fn sort_by_rating(movies: &mut [MovieSummary], order: Order) {
    match order {
        Order::Ascending => movies.sort_unstable_by(|a, b| a.rating.total_cmp(&b.rating)),
        Order::Descending => movies.sort_unstable_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}
