use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;
use common::types::HttpError;
use service::storage::RecordId;
use service::users::User;
use tracing::info;
use utoipa::IntoParams;

use super::ServerState;
use crate::errors::ApiError;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteUserQuery {
    /// Id of the user to delete
    #[param(value_type = i64)]
    pub user_id: RecordId,
}

/// Fetch one user by id.
#[utoipa::path(
    get, path = "/user/{user_id}", tag = "user",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User does not exist", body = HttpError),
        (status = 422, description = "Validation Error", body = HttpError)
    )
)]
pub async fn get_user(
    State(state): State<ServerState>,
    user_id: Result<Path<RecordId>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(user_id) = user_id?;
    let user = state.users.find(user_id).await?;
    Ok(Json(user))
}

/// Store a user; the response body is the assigned id.
#[utoipa::path(
    put, path = "/user", tag = "user",
    request_body = User,
    responses(
        (status = 200, description = "User created, body is the new id", body = i64),
        (status = 422, description = "Validation Error", body = HttpError)
    )
)]
pub async fn create_user(
    State(state): State<ServerState>,
    payload: Result<Json<User>, JsonRejection>,
) -> Result<Json<RecordId>, ApiError> {
    let Json(user) = payload?;
    let id = state.users.create(user).await;
    info!(user_id = id, "create user request served");
    Ok(Json(id))
}

#[utoipa::path(
    delete, path = "/user", tag = "user",
    params(DeleteUserQuery),
    responses(
        (status = 200, description = "User deleted", body = User),
        (status = 404, description = "User does not exist", body = HttpError),
        (status = 422, description = "Validation Error", body = HttpError)
    )
)]
pub async fn delete_user(
    State(state): State<ServerState>,
    query: Result<Query<DeleteUserQuery>, QueryRejection>,
) -> Result<Json<User>, ApiError> {
    let Query(DeleteUserQuery { user_id }) = query?;
    let user = state.users.delete(user_id).await?;
    Ok(Json(user))
}
