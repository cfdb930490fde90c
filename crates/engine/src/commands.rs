//! Command structs for engine operations.
//!
//! These types group parameters for write operations (user registration,
//! event submission, voting), keeping call sites readable.

use chrono::{DateTime, Utc};

/// Register a new user.
#[derive(Clone, Debug, Default)]
pub struct NewUserCmd {
    pub name: String,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl NewUserCmd {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    #[must_use]
    pub fn age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// Submit a new event on behalf of an existing user.
#[derive(Clone, Debug)]
pub struct NewEventCmd {
    pub name: String,
    pub keyword: String,
    pub user_id: i32,
}

impl NewEventCmd {
    #[must_use]
    pub fn new(name: impl Into<String>, keyword: impl Into<String>, user_id: i32) -> Self {
        Self {
            name: name.into(),
            keyword: keyword.into(),
            user_id,
        }
    }
}

/// Spend `amount` votes of `user_id` on `event_id`.
#[derive(Clone, Debug)]
pub struct VoteCmd {
    pub user_id: i32,
    pub event_id: i32,
    pub amount: i64,
    pub voted_at: DateTime<Utc>,
}

impl VoteCmd {
    #[must_use]
    pub fn new(user_id: i32, event_id: i32, amount: i64, voted_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            event_id,
            amount,
            voted_at,
        }
    }
}
