use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::time;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Answer {
    pub id: i64,
    pub answer_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Answer {
    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(time::now())
    }

    pub fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        time::within_last_day(self.pub_date, now)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.answer_text)
    }
}
