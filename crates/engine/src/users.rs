//! The module contains the `User` type: a voter and its remaining vote
//! budget.

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

/// Budget assigned to a new user when the engine is not configured otherwise.
pub const DEFAULT_VOTE_BUDGET: i64 = 10;

/// A registered user.
///
/// `vote_budget` is the number of votes the user can still cast. It only
/// decreases, and never below zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub vote_budget: i64,
}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            gender: model.gender,
            age: model.age,
            email: model.email,
            phone: model.phone,
            vote_budget: model.vote_budget,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub vote_budget: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::events::Entity")]
    Events,
    #[sea_orm(has_many = "super::votes::Entity")]
    Votes,
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Events.def()
    }
}

impl Related<super::votes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Votes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&crate::NewUserCmd> for ActiveModel {
    fn from(cmd: &crate::NewUserCmd) -> Self {
        Self {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(cmd.name.clone()),
            gender: ActiveValue::Set(cmd.gender.clone()),
            age: ActiveValue::Set(cmd.age),
            email: ActiveValue::Set(cmd.email.clone()),
            phone: ActiveValue::Set(cmd.phone.clone()),
            vote_budget: ActiveValue::NotSet,
        }
    }
}
