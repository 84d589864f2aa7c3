use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::{Activity, MessageResponse};
use crate::services::activities_service;
use crate::web::SharedStore;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

pub async fn activities_handler(
    State(store): State<SharedStore>,
) -> Json<BTreeMap<String, Activity>> {
    Json(activities_service::list_activities(&store))
}

// Extractor rejections are taken as values so they answer with the same JSON
// error body as every other failure.
pub async fn activity_handler(
    path: Result<Path<String>, PathRejection>,
    State(store): State<SharedStore>,
) -> Result<Json<Activity>, AppError> {
    let Path(activity_name) = path?;
    activities_service::load_activity(&store, &activity_name).map(Json)
}

pub async fn signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(store): State<SharedStore>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(activity_name) = path?;
    let Query(query) = query?;
    let message = activities_service::signup(&store, &activity_name, query.email.as_deref())?;
    Ok(Json(MessageResponse { message }))
}

pub async fn unregister_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(store): State<SharedStore>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(activity_name) = path?;
    let Query(query) = query?;
    let message =
        activities_service::unregister(&store, &activity_name, query.email.as_deref())?;
    Ok(Json(MessageResponse { message }))
}
