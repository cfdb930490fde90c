//! Users API endpoints.

use api_types::user::{UserCreated, UserNew, UserView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::NewUserCmd;

use crate::{ServerError, server::ServerState};

pub async fn user_new(
    State(state): State<ServerState>,
    Json(payload): Json<UserNew>,
) -> Result<(StatusCode, Json<UserCreated>), ServerError> {
    let user = state
        .engine
        .new_user(NewUserCmd {
            name: payload.name,
            gender: payload.gender,
            age: payload.age,
            email: payload.email,
            phone: payload.phone,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserCreated {
            id: user.id,
            vote_budget: user.vote_budget,
        }),
    ))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserView>, ServerError> {
    let user = state.engine.user(user_id).await?;

    Ok(Json(UserView {
        id: user.id,
        name: user.name,
        gender: user.gender,
        age: user.age,
        email: user.email,
        phone: user.phone,
        vote_budget: user.vote_budget,
    }))
}
