use getset::Getters;
use log::{info, warn};
use movie_info::{MovieCache, MovieInfoClient, MovieSource, OmdbClient, SharedMovieCache};
use std::sync::Arc;

use super::config::Config;

#[derive(Getters)]
#[get = "pub"]
pub struct Context {
    movie_info_client: MovieInfoClient,
    movie_cache: SharedMovieCache,
    config: Config,
}

impl Context {
    pub fn new(config: Config) -> Self {
        let api_key = config.api_key();
        if !api_key.is_configured() {
            warn!("OMDb API key is empty, movie requests will fail");
        }

        let source = OmdbClient::new(config.omdb_url().clone(), api_key);
        Self::with_source(config, Arc::new(source))
    }

    /// Build the context around any movie source.
    pub fn with_source(config: Config, source: Arc<dyn MovieSource>) -> Self {
        let cache_config = config.cache_config();
        let options = config.movie_info_options();
        info!(
            "Initialized MovieInfoClient with caching (TTL: {}s, Max entries: {}, Enabled: {})",
            options.listing_ttl().num_seconds(),
            cache_config.max_entries,
            cache_config.enabled
        );

        let movie_cache = Arc::new(MovieCache::new(cache_config));
        let movie_info_client = MovieInfoClient::new(source, movie_cache.clone(), options);

        Self {
            movie_info_client,
            movie_cache,
            config,
        }
    }
}

pub type ContextPointer = Arc<Context>;
