//! Events API endpoints: submission, plain listing and the merged hot list.

use api_types::event::{EventCreated, EventListQuery, EventNew, EventView, RankedEventView};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use engine::{NewEventCmd, RankedEvent};

use crate::{ServerError, server::ServerState};

fn event_view(event: engine::Event) -> EventView {
    EventView {
        id: event.id,
        name: event.name,
        keyword: event.keyword,
        user_id: event.user_id,
        score: event.score,
        purchased_rank: event.purchased_rank,
    }
}

fn ranked_view(ranked: RankedEvent) -> RankedEventView {
    RankedEventView {
        rank: ranked.rank,
        id: ranked.event.id,
        name: ranked.event.name,
        keyword: ranked.event.keyword,
        user_id: ranked.event.user_id,
        score: ranked.event.score,
    }
}

pub async fn event_new(
    State(state): State<ServerState>,
    Json(payload): Json<EventNew>,
) -> Result<(StatusCode, Json<EventCreated>), ServerError> {
    let event = state
        .engine
        .add_event(NewEventCmd::new(
            payload.name,
            payload.keyword,
            payload.user_id,
        ))
        .await?;

    Ok((StatusCode::CREATED, Json(EventCreated { id: event.id })))
}

/// Events in submission order, optionally sliced by `start`/`end`.
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<EventListQuery>,
) -> Result<Json<Vec<EventView>>, ServerError> {
    let bounds = query.start.zip(query.end);
    let events = state.engine.list_events(bounds).await?;

    Ok(Json(events.into_iter().map(event_view).collect()))
}

pub async fn get_at(
    State(state): State<ServerState>,
    Path(index): Path<i64>,
) -> Result<Json<EventView>, ServerError> {
    let event = state.engine.event_at(index).await?;
    Ok(Json(event_view(event)))
}

pub async fn sorted(
    State(state): State<ServerState>,
) -> Result<Json<Vec<RankedEventView>>, ServerError> {
    let ranking = state.engine.merged_ranking().await?;
    Ok(Json(ranking.into_iter().map(ranked_view).collect()))
}
