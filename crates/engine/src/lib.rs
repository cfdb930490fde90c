//! Hot list engine.
//!
//! Users spend a vote budget on events, and events can buy a fixed rank that
//! overrides the score ordering. [`Engine`] runs every write inside a database
//! transaction and [`ranking::merge`] builds the final ordered list.

pub use commands::{NewEventCmd, NewUserCmd, VoteCmd};
pub use error::EngineError;
pub use events::{Event, NO_RANK};
pub use ops::{Engine, EngineBuilder};
pub use purchases::Purchase;
pub use ranking::RankedEvent;
pub use users::{DEFAULT_VOTE_BUDGET, User};
pub use votes::Vote;

mod commands;
mod error;
mod events;
mod ops;
mod purchases;
pub mod ranking;
mod users;
mod votes;

type ResultEngine<T> = Result<T, EngineError>;
