use axum::{
    Router,
    routing::{get, post},
};

use std::sync::Arc;

use crate::{events, purchases, users, votes};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/user", post(users::user_new))
        .route("/user/{id}", get(users::get))
        .route("/rs/event", post(events::event_new))
        .route("/rs/list", get(events::list))
        .route("/rs/sortedevents", get(events::sorted))
        .route("/rs/{index}", get(events::get_at))
        .route("/rs/vote/{id}", post(votes::vote_new).get(votes::list))
        .route("/rs/buy/{id}", post(purchases::buy))
        .with_state(state)
}

/// Build the HTTP application around a shared engine.
pub fn app(engine: Arc<Engine>) -> Router {
    router(ServerState { engine })
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(Arc::new(engine))).await
}
