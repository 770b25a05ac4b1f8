use log::error;
use rocket::http::Status;
use rocket::response::{self, status, Responder};
use rocket::serde::json::Json;
use rocket::Request;
use serde::{Deserialize, Serialize};

/// Body of every failed request
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// Failure of a movie route. Always answered with status 500.
#[derive(Debug)]
pub struct ApiError(pub movie_info::Error);

impl From<movie_info::Error> for ApiError {
    fn from(err: movie_info::Error) -> Self {
        ApiError(err)
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'o> {
        match self.0.detail() {
            Some(detail) => error!("{} {} failed: {} ({})", req.method(), req.uri(), self.0, detail),
            None => error!("{} {} failed: {}", req.method(), req.uri(), self.0),
        }

        let body = ErrorBody {
            error: self.0.to_string(),
        };
        status::Custom(Status::InternalServerError, Json(body)).respond_to(req)
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;
