//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`KeyNotFound`] thrown when a user or an event does not exist.
//! - [`InvalidVote`] thrown when a vote amount is not positive or exceeds the
//!   voter's remaining budget.
//! - [`Outbid`] thrown when a purchase does not strictly beat the current
//!   holder of a rank.
//! - [`IndexOutOfRange`] thrown when a positional lookup falls outside the
//!   list.
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`InvalidVote`]: EngineError::InvalidVote
//!  [`Outbid`]: EngineError::Outbid
//!  [`IndexOutOfRange`]: EngineError::IndexOutOfRange
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Invalid vote: {0}")]
    InvalidVote(String),
    #[error("Invalid purchase: {0}")]
    InvalidPurchase(String),
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
    #[error("Invalid user: {0}")]
    InvalidUser(String),
    #[error("Outbid: {0}")]
    Outbid(String),
    #[error("{0}")]
    IndexOutOfRange(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::InvalidVote(a), Self::InvalidVote(b)) => a == b,
            (Self::InvalidPurchase(a), Self::InvalidPurchase(b)) => a == b,
            (Self::InvalidEvent(a), Self::InvalidEvent(b)) => a == b,
            (Self::InvalidUser(a), Self::InvalidUser(b)) => a == b,
            (Self::Outbid(a), Self::Outbid(b)) => a == b,
            (Self::IndexOutOfRange(a), Self::IndexOutOfRange(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
