use sea_orm::DatabaseConnection;

use crate::{DEFAULT_VOTE_BUDGET, EngineError, ResultEngine};

mod access;
mod events;
mod purchases;
mod users;
mod votes;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

/// The hot list engine.
///
/// Keeps no state besides the connection and its settings: every read goes
/// to the database, so tasks sharing one behind an `Arc` see the same data.
#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
    default_vote_budget: i64,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

fn normalize_required_text(
    value: &str,
    label: &str,
    invalid: fn(String) -> EngineError,
) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid(format!("{label} must not be empty")));
    }
    Ok(trimmed.to_string())
}

fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// The builder for `Engine`
pub struct EngineBuilder {
    database: DatabaseConnection,
    default_vote_budget: i64,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            database: DatabaseConnection::default(),
            default_vote_budget: DEFAULT_VOTE_BUDGET,
        }
    }
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Budget assigned to every new user. Defaults to [`DEFAULT_VOTE_BUDGET`].
    pub fn default_vote_budget(mut self, budget: i64) -> EngineBuilder {
        self.default_vote_budget = budget;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        if self.default_vote_budget < 0 {
            return Err(EngineError::InvalidUser(format!(
                "default vote budget must be >= 0, got {}",
                self.default_vote_budget
            )));
        }
        Ok(Engine {
            database: self.database,
            default_vote_budget: self.default_vote_budget,
        })
    }
}
