use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::DirectoryError;
use crate::models::ActivityDirectory;
use crate::services::activities_service;
use crate::web::SharedStore;

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

/// Every failure leaves the API as `{"detail": ...}`, including malformed requests
/// rejected by the extractors.
#[derive(Debug)]
pub enum ApiError {
    Directory(DirectoryError),
    Rejected { status: StatusCode, detail: String },
}

impl From<DirectoryError> for ApiError {
    fn from(e: DirectoryError) -> Self {
        ApiError::Directory(e)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(r: QueryRejection) -> Self {
        ApiError::Rejected {
            status: r.status(),
            detail: r.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(r: PathRejection) -> Self {
        ApiError::Rejected {
            status: r.status(),
            detail: r.body_text(),
        }
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = match self {
            DirectoryError::ActivityNotFound | DirectoryError::ParticipantNotFound => {
                StatusCode::NOT_FOUND
            }
            DirectoryError::AlreadySignedUp => StatusCode::BAD_REQUEST,
        };
        detail_response(status, self.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Directory(e) => e.into_response(),
            ApiError::Rejected { status, detail } => {
                tracing::debug!(%status, %detail, "request_rejected");
                detail_response(status, detail)
            }
        }
    }
}

fn detail_response(status: StatusCode, detail: String) -> Response {
    (status, Json(json!({ "detail": detail }))).into_response()
}

pub async fn list_activities_handler(State(store): State<SharedStore>) -> Json<ActivityDirectory> {
    Json(activities_service::list_activities(&store))
}

pub async fn signup_handler(
    State(store): State<SharedStore>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(activity_name) = path?;
    let Query(query) = query?;
    let message = activities_service::enroll(&store, &activity_name, &query.email)?;
    Ok(Json(json!({ "message": message })))
}

pub async fn unregister_handler(
    State(store): State<SharedStore>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path((activity_name, email)) = path?;
    let message = activities_service::unregister(&store, &activity_name, &email)?;
    Ok(Json(json!({ "message": message })))
}

pub async fn not_found_handler() -> Response {
    detail_response(StatusCode::NOT_FOUND, "Not Found".to_string())
}
