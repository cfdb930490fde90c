use sea_orm::{ActiveValue, TransactionTrait, prelude::*};

use crate::{EngineError, Event, NewEventCmd, RankedEvent, ResultEngine, events, ranking};

use super::{Engine, normalize_required_text, with_tx};

impl Engine {
    /// Submit a new event. The owner must exist; the event starts with score 0
    /// and no purchased rank.
    pub async fn add_event(&self, cmd: NewEventCmd) -> ResultEngine<Event> {
        let name = normalize_required_text(&cmd.name, "event name", EngineError::InvalidEvent)?;
        let keyword =
            normalize_required_text(&cmd.keyword, "event keyword", EngineError::InvalidEvent)?;

        with_tx!(self, |db_tx| {
            self.require_user(&db_tx, cmd.user_id).await?;

            let mut model: events::ActiveModel = (&cmd).into();
            model.name = ActiveValue::Set(name);
            model.keyword = ActiveValue::Set(keyword);
            let event = model.insert(&db_tx).await?;
            tracing::debug!(event_id = event.id, user_id = cmd.user_id, "event added");
            Ok(Event::from(event))
        })
    }

    /// Events in insertion order.
    ///
    /// `bounds` is a 1-based inclusive `(start, end)` pair. `None` returns the
    /// whole list. Bounds outside `[1, size]` or with `start > end` fail with
    /// [`EngineError::IndexOutOfRange`].
    pub async fn list_events(&self, bounds: Option<(i64, i64)>) -> ResultEngine<Vec<Event>> {
        let list: Vec<Event> = self
            .all_events(&self.database)
            .await?
            .into_iter()
            .map(Event::from)
            .collect();

        let Some((start, end)) = bounds else {
            return Ok(list);
        };
        let size = list.len() as i64;
        if start < 1 || end > size || start > end {
            return Err(EngineError::IndexOutOfRange("invalid range".to_string()));
        }

        // Both bounds were checked against `[1, size]`.
        let (skip, take) = ((start - 1) as usize, (end - start + 1) as usize);
        Ok(list.into_iter().skip(skip).take(take).collect())
    }

    /// The event at 1-based `index` in insertion order.
    pub async fn event_at(&self, index: i64) -> ResultEngine<Event> {
        let mut models = self.all_events(&self.database).await?;
        if index < 1 || index > models.len() as i64 {
            return Err(EngineError::IndexOutOfRange("invalid index".to_string()));
        }

        Ok(Event::from(models.swap_remove((index - 1) as usize)))
    }

    /// Return an event snapshot from DB.
    pub async fn event(&self, event_id: i32) -> ResultEngine<Event> {
        let model = self.require_event(&self.database, event_id).await?;
        Ok(Event::from(model))
    }

    /// The hot list: vote-ordered events merged with purchased ranks.
    ///
    /// Reads one snapshot of the events and never writes. See
    /// [`ranking::merge`] for the ordering rules.
    pub async fn merged_ranking(&self) -> ResultEngine<Vec<RankedEvent>> {
        let snapshot = self
            .all_events(&self.database)
            .await?
            .into_iter()
            .map(Event::from)
            .collect();

        Ok(ranking::merge(snapshot))
    }
}
