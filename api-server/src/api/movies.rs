use super::error::ApiResult;
use crate::models::context::ContextPointer;
use movie_info::{MovieSummary, Order};
use rocket::serde::json::Json;
use rocket::{get, State};
use serde_json::Value;

/// Popular movies of the configured year, sorted by rating (`desc` unless `sort=asc`).
#[get("/popular?<sort>")]
pub async fn popular(
    sort: Option<&str>,
    context: &State<ContextPointer>,
) -> ApiResult<Vec<MovieSummary>> {
    let order = Order::from_query(sort);
    let movies = context.movie_info_client().popular(order).await?;
    Ok(Json(movies))
}

/// Full OMDb record for an IMDb id
#[get("/detail?<id>")]
pub async fn detail(id: Option<&str>, context: &State<ContextPointer>) -> ApiResult<Value> {
    let payload = context
        .movie_info_client()
        .detail(id.unwrap_or_default())
        .await?;
    Ok(Json(payload))
}

#[get("/search?<query>")]
pub async fn search(query: Option<&str>, context: &State<ContextPointer>) -> ApiResult<Value> {
    let payload = context
        .movie_info_client()
        .search(query.unwrap_or_default())
        .await?;
    Ok(Json(payload))
}
