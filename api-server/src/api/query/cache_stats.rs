use super::super::get_context;
use async_graphql::{Context, Object, SimpleObject};
use movie_info::CacheStats;
use serde::Serialize;

#[derive(Default)]
pub struct CacheStatsQuery;

#[derive(SimpleObject, Serialize)]
pub struct CacheStatsResponse {
    pub cache_stats: Option<CacheStats>,
    pub cache_enabled: bool,
}

#[Object]
impl CacheStatsQuery {
    /// Current statistics of the popular movies cache
    async fn cache_stats<'ctx>(&self, context: &Context<'ctx>) -> CacheStatsResponse {
        let ctx = get_context(context);
        let cache = ctx.movie_cache();
        let cache_enabled = cache.config.enabled;

        CacheStatsResponse {
            cache_stats: cache_enabled.then(|| cache.stats()),
            cache_enabled,
        }
    }

    /// Drop every cached listing
    async fn clear_cache<'ctx>(&self, context: &Context<'ctx>) -> bool {
        let ctx = get_context(context);
        ctx.movie_cache().clear();
        true
    }
}
