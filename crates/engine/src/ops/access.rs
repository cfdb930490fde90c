//! Point lookups shared by the engine operations.
//!
//! Every helper takes the connection to use, so the same lookup runs inside a
//! write transaction or directly on the pool for plain reads.

use sea_orm::{ConnectionTrait, QueryFilter, QueryOrder, prelude::*};

use crate::{EngineError, ResultEngine, events, purchases, users};

use super::Engine;

impl Engine {
    pub(super) async fn require_user<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: i32,
    ) -> ResultEngine<users::Model> {
        users::Entity::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("user {user_id}")))
    }

    pub(super) async fn require_event<C: ConnectionTrait>(
        &self,
        db: &C,
        event_id: i32,
    ) -> ResultEngine<events::Model> {
        events::Entity::find_by_id(event_id)
            .one(db)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("event {event_id}")))
    }

    pub(super) async fn find_purchase_by_rank<C: ConnectionTrait>(
        &self,
        db: &C,
        rank: i32,
    ) -> ResultEngine<Option<purchases::Model>> {
        purchases::Entity::find()
            .filter(purchases::Column::Rank.eq(rank))
            .one(db)
            .await
            .map_err(Into::into)
    }

    pub(super) async fn find_purchase_by_event<C: ConnectionTrait>(
        &self,
        db: &C,
        event_id: i32,
    ) -> ResultEngine<Option<purchases::Model>> {
        purchases::Entity::find()
            .filter(purchases::Column::EventId.eq(event_id))
            .one(db)
            .await
            .map_err(Into::into)
    }

    /// All events in insertion order.
    pub(super) async fn all_events<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> ResultEngine<Vec<events::Model>> {
        events::Entity::find()
            .order_by_asc(events::Column::Id)
            .all(db)
            .await
            .map_err(Into::into)
    }
}
