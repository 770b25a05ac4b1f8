pub mod error;
pub mod movies;
pub mod query;

use crate::models::context::ContextPointer;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};
use async_graphql_rocket::{GraphQLRequest, GraphQLResponse};
use query::cache_stats::CacheStatsQuery;
use rocket::{Route, State};

#[derive(MergedObject, Default)]
pub struct Query(CacheStatsQuery);

pub type ApiSchema = Schema<Query, EmptyMutation, EmptySubscription>;

pub fn build_schema(context: ContextPointer) -> ApiSchema {
    Schema::build(Query::default(), EmptyMutation, EmptySubscription)
        .data(context)
        .finish()
}

pub fn get_context<'ctx>(context: &async_graphql::Context<'ctx>) -> &'ctx ContextPointer {
    context.data_unchecked::<ContextPointer>()
}

#[rocket::post("/graphql", data = "<request>", format = "application/json")]
async fn graphql_request(schema: &State<ApiSchema>, request: GraphQLRequest) -> GraphQLResponse {
    request.execute(schema.inner()).await
}

pub fn routes() -> Vec<Route> {
    rocket::routes![
        movies::popular,
        movies::detail,
        movies::search,
        graphql_request
    ]
}
