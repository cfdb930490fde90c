use sea_orm::{
    ActiveValue, DatabaseTransaction, QueryFilter, QueryOrder, SqlErr, TransactionTrait,
    prelude::*, sea_query::Expr,
};

use crate::{EngineError, NO_RANK, Purchase, ResultEngine, events, purchases};

use super::{Engine, with_tx};

impl Engine {
    /// Buy `rank` for an event.
    ///
    /// A free rank is always granted. A held rank changes hands only when
    /// `amount` is strictly greater than what the holder paid: the old
    /// purchase is deleted and the previous event loses its rank. A buying
    /// event that already holds another rank gives that one up, so an event
    /// owns at most one purchase.
    ///
    /// Errors:
    /// - [`EngineError::InvalidPurchase`] if `rank < 1` or `amount < 1`;
    /// - [`EngineError::KeyNotFound`] if the event does not exist;
    /// - [`EngineError::Outbid`] if `amount` does not beat the holder, or a
    ///   concurrent purchase took the rank first.
    pub async fn purchase_rank(
        &self,
        event_id: i32,
        amount: i64,
        rank: i32,
    ) -> ResultEngine<Purchase> {
        if rank < 1 {
            return Err(EngineError::InvalidPurchase(format!(
                "rank must be > 0, got {rank}"
            )));
        }
        if amount < 1 {
            return Err(EngineError::InvalidPurchase(format!(
                "amount must be > 0, got {amount}"
            )));
        }

        with_tx!(self, |db_tx| {
            self.require_event(&db_tx, event_id).await?;

            if let Some(holder) = self.find_purchase_by_rank(&db_tx, rank).await? {
                if amount <= holder.amount {
                    return Err(EngineError::Outbid(format!(
                        "rank {rank} is held for {}, offer {amount}",
                        holder.amount
                    )));
                }
                self.release_purchase(&db_tx, &holder).await?;
                tracing::info!(
                    rank,
                    previous_event_id = holder.event_id,
                    event_id,
                    "rank outbid"
                );
            }

            if let Some(previous) = self.find_purchase_by_event(&db_tx, event_id).await? {
                self.release_purchase(&db_tx, &previous).await?;
            }

            let purchase = purchases::ActiveModel {
                id: ActiveValue::NotSet,
                event_id: ActiveValue::Set(event_id),
                amount: ActiveValue::Set(amount),
                rank: ActiveValue::Set(rank),
            }
            .insert(&db_tx)
            .await
            .map_err(|err| outbid_on_conflict(err, rank))?;

            events::Entity::update_many()
                .col_expr(events::Column::PurchasedRank, Expr::value(rank))
                .filter(events::Column::Id.eq(event_id))
                .exec(&db_tx)
                .await?;

            tracing::debug!(event_id, amount, rank, "rank purchased");
            Ok(Purchase::from(purchase))
        })
    }

    /// The purchase currently holding `rank`, if any.
    pub async fn purchase_for_rank(&self, rank: i32) -> ResultEngine<Option<Purchase>> {
        let model = self.find_purchase_by_rank(&self.database, rank).await?;
        Ok(model.map(Purchase::from))
    }

    /// All live purchases, ordered by rank.
    pub async fn purchases(&self) -> ResultEngine<Vec<Purchase>> {
        let models = purchases::Entity::find()
            .order_by_asc(purchases::Column::Rank)
            .all(&self.database)
            .await?;

        Ok(models.into_iter().map(Purchase::from).collect())
    }

    /// Delete `purchase` and clear the rank of the event that held it.
    ///
    /// The delete matches on id and amount: if another writer already
    /// replaced the purchase nothing is deleted and the caller is outbid.
    async fn release_purchase(
        &self,
        db: &DatabaseTransaction,
        purchase: &purchases::Model,
    ) -> ResultEngine<()> {
        let deleted = purchases::Entity::delete_many()
            .filter(purchases::Column::Id.eq(purchase.id))
            .filter(purchases::Column::Amount.eq(purchase.amount))
            .exec(db)
            .await?;
        if deleted.rows_affected == 0 {
            return Err(EngineError::Outbid(format!(
                "rank {} changed hands concurrently",
                purchase.rank
            )));
        }

        events::Entity::update_many()
            .col_expr(events::Column::PurchasedRank, Expr::value(NO_RANK))
            .filter(events::Column::Id.eq(purchase.event_id))
            .filter(events::Column::PurchasedRank.eq(purchase.rank))
            .exec(db)
            .await?;

        Ok(())
    }
}

fn outbid_on_conflict(err: DbErr, rank: i32) -> EngineError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            EngineError::Outbid(format!("rank {rank} was purchased concurrently"))
        }
        _ => EngineError::Database(err),
    }
}
