//! The module contains `Purchase`: a rank slot bought for an event.
//!
//! A rank is held by at most one purchase and an event owns at most one
//! purchase. Both constraints are unique indexes on the `purchases` table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: i32,
    pub event_id: i32,
    pub amount: i64,
    pub rank: i32,
}

impl From<Model> for Purchase {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            event_id: model.event_id,
            amount: model.amount,
            rank: model.rank,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "purchases")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub event_id: i32,
    pub amount: i64,
    #[sea_orm(unique)]
    pub rank: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::events::Entity",
        from = "Column::EventId",
        to = "super::events::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Events,
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Events.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
