use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub mod user {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserNew {
        pub name: String,
        pub gender: Option<String>,
        pub age: Option<i32>,
        pub email: Option<String>,
        pub phone: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserCreated {
        pub id: i32,
        pub vote_budget: i64,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct UserView {
        pub id: i32,
        pub name: String,
        pub gender: Option<String>,
        pub age: Option<i32>,
        pub email: Option<String>,
        pub phone: Option<String>,
        /// Votes the user can still cast.
        pub vote_budget: i64,
    }
}

pub mod event {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct EventNew {
        pub name: String,
        pub keyword: String,
        pub user_id: i32,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct EventCreated {
        pub id: i32,
    }

    /// Optional 1-based inclusive bounds for `GET /rs/list`.
    ///
    /// Both must be present to slice the list; otherwise the whole list is
    /// returned.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct EventListQuery {
        pub start: Option<i64>,
        pub end: Option<i64>,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct EventView {
        pub id: i32,
        pub name: String,
        pub keyword: String,
        pub user_id: i32,
        pub score: i64,
        /// Purchased rank, `0` when the event holds none.
        pub purchased_rank: i32,
    }

    /// An entry of the merged hot list.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct RankedEventView {
        /// Position in the hot list, starting at 1.
        pub rank: usize,
        pub id: i32,
        pub name: String,
        pub keyword: String,
        pub user_id: i32,
        pub score: i64,
    }
}

pub mod vote {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct VoteNew {
        pub user_id: i32,
        pub amount: i64,
        /// When the vote was cast. The server uses the current time if absent.
        pub time: Option<DateTime<FixedOffset>>,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct VoteView {
        pub id: i32,
        pub user_id: i32,
        pub event_id: i32,
        pub amount: i64,
        pub time: DateTime<FixedOffset>,
    }
}

pub mod purchase {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PurchaseNew {
        pub amount: i64,
        pub rank: i32,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PurchaseView {
        pub id: i32,
        pub event_id: i32,
        pub amount: i64,
        pub rank: i32,
    }
}
