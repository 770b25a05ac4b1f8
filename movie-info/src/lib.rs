pub mod cache;
mod client;
mod error;
mod movie;
pub mod omdb;
mod order;
mod rating;
mod source;


pub use cache::{CacheConfig, CacheKey, CacheStats, ListingCache, MovieCache, SharedMovieCache};
pub use client::{MovieInfoClient, MovieInfoOptions};
pub use error::{Error, Result};
pub use movie::{sort_by_rating, MovieSummary};
pub use omdb::{ApiKey, OmdbClient, OmdbQuery, DEFAULT_API_KEY, OMDB_URL};
pub use order::Order;
pub use rating::normalize_rating;
pub use source::MovieSource;
