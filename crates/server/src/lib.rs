use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{app, run_with_listener};

mod events;
mod purchases;
mod server;
mod users;
mod votes;

pub mod types {
    pub mod user {
        pub use api_types::user::{UserCreated, UserNew, UserView};
    }

    pub mod event {
        pub use api_types::event::{
            EventCreated, EventListQuery, EventNew, EventView, RankedEventView,
        };
    }

    pub mod vote {
        pub use api_types::vote::{VoteNew, VoteView};
    }

    pub mod purchase {
        pub use api_types::purchase::{PurchaseNew, PurchaseView};
    }
}

pub enum ServerError {
    Engine(EngineError),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::Outbid(_) => StatusCode::CONFLICT,
        EngineError::IndexOutOfRange(_) => StatusCode::BAD_REQUEST,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        EngineError::InvalidVote(_)
        | EngineError::InvalidPurchase(_)
        | EngineError::InvalidEvent(_)
        | EngineError::InvalidUser(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let ServerError::Engine(err) = self;
        let status = status_for_engine_error(&err);
        let error = message_for_engine_error(err);

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::KeyNotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn engine_outbid_maps_to_409() {
        let res = ServerError::from(EngineError::Outbid("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn engine_index_out_of_range_maps_to_400() {
        let res =
            ServerError::from(EngineError::IndexOutOfRange("invalid index".to_string()))
                .into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn engine_validation_maps_to_422() {
        for err in [
            EngineError::InvalidVote("x".to_string()),
            EngineError::InvalidPurchase("x".to_string()),
            EngineError::InvalidEvent("x".to_string()),
            EngineError::InvalidUser("x".to_string()),
        ] {
            let res = ServerError::from(err).into_response();
            assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    #[test]
    fn engine_database_maps_to_500() {
        let err = EngineError::Database(engine_db_err());
        let res = ServerError::from(err).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    fn engine_db_err() -> sea_orm::DbErr {
        sea_orm::DbErr::Custom("disk full".to_string())
    }
}
