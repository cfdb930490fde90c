//! Rank purchase endpoint.

use api_types::purchase::{PurchaseNew, PurchaseView};
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{ServerError, server::ServerState};

pub async fn buy(
    State(state): State<ServerState>,
    Path(event_id): Path<i32>,
    Json(payload): Json<PurchaseNew>,
) -> Result<Json<PurchaseView>, ServerError> {
    let purchase = state
        .engine
        .purchase_rank(event_id, payload.amount, payload.rank)
        .await?;

    Ok(Json(PurchaseView {
        id: purchase.id,
        event_id: purchase.event_id,
        amount: purchase.amount,
        rank: purchase.rank,
    }))
}
