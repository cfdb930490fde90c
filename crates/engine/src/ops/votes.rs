use sea_orm::{ActiveValue, QueryFilter, QueryOrder, TransactionTrait, prelude::*, sea_query::Expr};

use crate::{EngineError, ResultEngine, Vote, VoteCmd, events, users, votes};

use super::{Engine, with_tx};

impl Engine {
    /// Cast a vote: spend `amount` of the voter's budget on an event.
    ///
    /// The vote record, the budget decrement and the score increment commit
    /// together or not at all. The budget is decremented with a conditional
    /// update (`vote_budget >= amount`), so concurrent votes of the same user
    /// can never overdraw it.
    ///
    /// Errors:
    /// - [`EngineError::InvalidVote`] if `amount < 1` or it exceeds the
    ///   remaining budget;
    /// - [`EngineError::KeyNotFound`] if the user or the event does not exist.
    pub async fn cast_vote(&self, cmd: VoteCmd) -> ResultEngine<Vote> {
        if cmd.amount < 1 {
            return Err(EngineError::InvalidVote(format!(
                "vote amount must be > 0, got {}",
                cmd.amount
            )));
        }

        with_tx!(self, |db_tx| {
            // Write first: the check and the decrement are one statement.
            let spent = users::Entity::update_many()
                .col_expr(
                    users::Column::VoteBudget,
                    Expr::col(users::Column::VoteBudget).sub(cmd.amount),
                )
                .filter(users::Column::Id.eq(cmd.user_id))
                .filter(users::Column::VoteBudget.gte(cmd.amount))
                .exec(&db_tx)
                .await?;
            if spent.rows_affected == 0 {
                let user = self.require_user(&db_tx, cmd.user_id).await?;
                return Err(EngineError::InvalidVote(format!(
                    "vote amount {} exceeds remaining budget {}",
                    cmd.amount, user.vote_budget
                )));
            }

            self.require_event(&db_tx, cmd.event_id).await?;

            let vote = votes::ActiveModel {
                id: ActiveValue::NotSet,
                user_id: ActiveValue::Set(cmd.user_id),
                event_id: ActiveValue::Set(cmd.event_id),
                amount: ActiveValue::Set(cmd.amount),
                voted_at: ActiveValue::Set(cmd.voted_at),
            }
            .insert(&db_tx)
            .await?;

            events::Entity::update_many()
                .col_expr(
                    events::Column::Score,
                    Expr::col(events::Column::Score).add(cmd.amount),
                )
                .filter(events::Column::Id.eq(cmd.event_id))
                .exec(&db_tx)
                .await?;

            tracing::debug!(
                user_id = cmd.user_id,
                event_id = cmd.event_id,
                amount = cmd.amount,
                "vote cast"
            );
            Ok(Vote::from(vote))
        })
    }

    /// Every vote cast for an event, oldest first.
    pub async fn votes_for_event(&self, event_id: i32) -> ResultEngine<Vec<Vote>> {
        self.require_event(&self.database, event_id).await?;

        let models = votes::Entity::find()
            .filter(votes::Column::EventId.eq(event_id))
            .order_by_asc(votes::Column::Id)
            .all(&self.database)
            .await?;

        Ok(models.into_iter().map(Vote::from).collect())
    }
}
