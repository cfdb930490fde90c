use sea_orm::{ActiveValue, TransactionTrait, prelude::*};

use crate::{EngineError, NewUserCmd, ResultEngine, User, users};

use super::{Engine, normalize_optional_text, normalize_required_text, with_tx};

impl Engine {
    /// Register a user with the engine's default vote budget.
    pub async fn new_user(&self, cmd: NewUserCmd) -> ResultEngine<User> {
        let name = normalize_required_text(&cmd.name, "user name", EngineError::InvalidUser)?;
        if let Some(age) = cmd.age
            && age < 0
        {
            return Err(EngineError::InvalidUser(format!(
                "age must be >= 0, got {age}"
            )));
        }

        let mut model: users::ActiveModel = (&cmd).into();
        model.name = ActiveValue::Set(name);
        model.gender = ActiveValue::Set(normalize_optional_text(cmd.gender.as_deref()));
        model.email = ActiveValue::Set(normalize_optional_text(cmd.email.as_deref()));
        model.phone = ActiveValue::Set(normalize_optional_text(cmd.phone.as_deref()));
        model.vote_budget = ActiveValue::Set(self.default_vote_budget);

        with_tx!(self, |db_tx| {
            let user = model.insert(&db_tx).await?;
            tracing::debug!(user_id = user.id, "registered user");
            Ok(User::from(user))
        })
    }

    /// Return a user snapshot from DB.
    pub async fn user(&self, user_id: i32) -> ResultEngine<User> {
        let model = self.require_user(&self.database, user_id).await?;
        Ok(User::from(model))
    }
}
