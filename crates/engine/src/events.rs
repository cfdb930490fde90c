//! The module contains `Event`, an item of the hot list.

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

/// Value of `purchased_rank` for an event that holds no purchase.
pub const NO_RANK: i32 = 0;

/// A hot list item.
///
/// `score` is the sum of every vote cast for the event. `purchased_rank` is
/// the rank bought through a purchase, [`NO_RANK`] when the event relies on
/// its score alone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub keyword: String,
    pub user_id: i32,
    pub score: i64,
    pub purchased_rank: i32,
}

impl Event {
    pub fn is_ranked(&self) -> bool {
        self.purchased_rank > NO_RANK
    }
}

impl From<Model> for Event {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            keyword: model.keyword,
            user_id: model.user_id,
            score: model.score,
            purchased_rank: model.purchased_rank,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub keyword: String,
    pub user_id: i32,
    pub score: i64,
    pub purchased_rank: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Users,
    #[sea_orm(has_many = "super::votes::Entity")]
    Votes,
    #[sea_orm(has_one = "super::purchases::Entity")]
    Purchases,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::votes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Votes.def()
    }
}

impl Related<super::purchases::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Purchases.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&crate::NewEventCmd> for ActiveModel {
    fn from(cmd: &crate::NewEventCmd) -> Self {
        Self {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(cmd.name.clone()),
            keyword: ActiveValue::Set(cmd.keyword.clone()),
            user_id: ActiveValue::Set(cmd.user_id),
            score: ActiveValue::Set(0),
            purchased_rank: ActiveValue::Set(NO_RANK),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(purchased_rank: i32) -> Model {
        Model {
            id: 7,
            name: "Pork prices rise".to_string(),
            keyword: "economy".to_string(),
            user_id: 1,
            score: 3,
            purchased_rank,
        }
    }

    #[test]
    fn event_from_model_keeps_fields() {
        let event = Event::from(model(2));

        assert_eq!(event.id, 7);
        assert_eq!(event.name, "Pork prices rise");
        assert_eq!(event.keyword, "economy");
        assert_eq!(event.user_id, 1);
        assert_eq!(event.score, 3);
        assert_eq!(event.purchased_rank, 2);
        assert!(event.is_ranked());
    }

    #[test]
    fn event_without_purchase_is_not_ranked() {
        assert!(!Event::from(model(NO_RANK)).is_ranked());
    }
}
