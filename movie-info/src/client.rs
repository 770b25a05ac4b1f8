use crate::cache::{CacheKey, ListingCache, MovieCache};
use crate::error::Result;
use crate::movie::sort_by_rating;
use crate::omdb::{OmdbClient, OmdbQuery, ResponseStatus, TitleRecord};
use crate::source::MovieSource;
use crate::{MovieSummary, Order};
use chrono::Duration;
use dashmap::DashMap;
use getset::Getters;
use log::{debug, info, warn};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Letters used as title seeds for the popular listing
const TITLE_SEEDS: std::ops::RangeInclusive<char> = 'a'..='z';

/// Fixed query parameters and cache lifetime for the client operations.
#[derive(Clone, Debug, Getters)]
pub struct MovieInfoOptions {
    /// Release year the popular listing is sampled from
    #[get = "pub"]
    year: String,
    /// `short` or `full`
    plot: String,
    /// How long a popular listing is served from cache
    #[get = "pub"]
    listing_ttl: Duration,
}

impl Default for MovieInfoOptions {
    fn default() -> Self {
        Self {
            year: "2024".to_string(),
            plot: "full".to_string(),
            listing_ttl: Duration::hours(1),
        }
    }
}

impl MovieInfoOptions {
    pub fn new<Y: Into<String>, P: Into<String>>(year: Y, plot: P, listing_ttl: Duration) -> Self {
        Self {
            year: year.into(),
            plot: plot.into(),
            listing_ttl,
        }
    }
}

#[derive(Clone)]
pub struct MovieInfoClient {
    source: Arc<dyn MovieSource>,
    cache: Arc<dyn ListingCache>,
    options: MovieInfoOptions,
    // One lock per key so concurrent misses share a single upstream batch
    in_flight: Arc<DashMap<CacheKey, Arc<Mutex<()>>>>,
}

impl Default for MovieInfoClient {
    fn default() -> Self {
        Self::new(
            Arc::new(OmdbClient::default()),
            Arc::new(MovieCache::default()),
            MovieInfoOptions::default(),
        )
    }
}

impl MovieInfoClient {
    pub fn new(
        source: Arc<dyn MovieSource>,
        cache: Arc<dyn ListingCache>,
        options: MovieInfoOptions,
    ) -> Self {
        Self {
            source,
            cache,
            options,
            in_flight: Arc::new(DashMap::new()),
        }
    }

    /// Popular listing sorted by rating.
    ///
    /// Served from cache when possible. On a miss one title is looked up per
    /// letter of the alphabet, sequentially; the first failed lookup aborts the
    /// whole batch and nothing is cached.
    pub async fn popular(&self, order: Order) -> Result<Vec<MovieSummary>> {
        let cache_key = CacheKey::Popular(order);

        // Try cache first
        if let Some(cached) = self.cache.get(&cache_key) {
            info!("Returning cached popular movies ({})", order);
            return Ok(Self::sorted(cached, order));
        }

        let lock = self.in_flight.entry(cache_key).or_default().clone();
        let _guard = lock.lock().await;

        // Another request may have filled the entry while we waited
        if let Some(cached) = self.cache.get(&cache_key) {
            debug!("Popular movies ({}) fetched by a concurrent request", order);
            return Ok(Self::sorted(cached, order));
        }

        let movies = self.fetch_popular().await?;
        self.cache
            .put(cache_key, movies.clone(), self.options.listing_ttl);

        Ok(Self::sorted(movies, order))
    }

    /// Raw OMDb payload for a single IMDb id.
    pub async fn detail(&self, id: &str) -> Result<Value> {
        let query = OmdbQuery::Detail {
            id: id.to_string(),
            plot: self.options.plot.clone(),
        };
        self.fetch_checked(&query).await
    }

    /// Raw OMDb search payload for a free-text query.
    pub async fn search(&self, query: &str) -> Result<Value> {
        let query = OmdbQuery::Search {
            query: query.to_string(),
        };
        self.fetch_checked(&query).await
    }

    async fn fetch_popular(&self) -> Result<Vec<MovieSummary>> {
        let mut movies = Vec::new();

        for seed in TITLE_SEEDS {
            let query = OmdbQuery::TitleSeed {
                seed,
                year: self.options.year.clone(),
                plot: self.options.plot.clone(),
            };

            let payload = self.source.fetch(&query).await.map_err(|err| {
                warn!(
                    "Popular movies lookup for '{}' failed: {} {}",
                    seed,
                    err,
                    err.detail().unwrap_or_default()
                );
                err
            })?;

            match MovieSummary::from_record(TitleRecord::from_payload(&payload)?) {
                Some(movie) => movies.push(movie),
                None => debug!("No {} title found for seed '{}'", self.options.year, seed),
            }
        }

        info!("Fetched {} popular movies from OMDb", movies.len());
        Ok(movies)
    }

    async fn fetch_checked(&self, query: &OmdbQuery) -> Result<Value> {
        let payload = self.source.fetch(query).await?;
        ResponseStatus::from_payload(&payload)?.into_result()?;
        Ok(payload)
    }

    fn sorted(mut movies: Vec<MovieSummary>, order: Order) -> Vec<MovieSummary> {
        sort_by_rating(&mut movies, order);
        movies
    }
}
