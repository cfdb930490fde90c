//! Votes API endpoints.

use api_types::vote::{VoteNew, VoteView};
use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use engine::VoteCmd;

use crate::{ServerError, server::ServerState};

fn vote_view(vote: engine::Vote) -> VoteView {
    VoteView {
        id: vote.id,
        user_id: vote.user_id,
        event_id: vote.event_id,
        amount: vote.amount,
        time: vote.voted_at.fixed_offset(),
    }
}

pub async fn vote_new(
    State(state): State<ServerState>,
    Path(event_id): Path<i32>,
    Json(payload): Json<VoteNew>,
) -> Result<Json<VoteView>, ServerError> {
    let voted_at = payload
        .time
        .map(|time| time.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);

    let vote = state
        .engine
        .cast_vote(VoteCmd::new(
            payload.user_id,
            event_id,
            payload.amount,
            voted_at,
        ))
        .await?;

    Ok(Json(vote_view(vote)))
}

pub async fn list(
    State(state): State<ServerState>,
    Path(event_id): Path<i32>,
) -> Result<Json<Vec<VoteView>>, ServerError> {
    let votes = state.engine.votes_for_event(event_id).await?;
    Ok(Json(votes.into_iter().map(vote_view).collect()))
}
