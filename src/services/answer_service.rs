use crate::error::Result;
use crate::models::answer::Answer;
use crate::utils::time;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Cap applied to both "latest answers" listings.
pub const LATEST_LIMIT: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOrder {
    Id,
    PubDate,
}

impl AnswerOrder {
    fn order_clause(self, descending: bool) -> &'static str {
        match (self, descending) {
            (AnswerOrder::Id, true) => "id DESC",
            (AnswerOrder::Id, false) => "id ASC",
            (AnswerOrder::PubDate, true) => "pub_date DESC, id DESC",
            (AnswerOrder::PubDate, false) => "pub_date ASC, id ASC",
        }
    }
}

#[derive(Clone)]
pub struct AnswerService {
    pool: SqlitePool,
}

impl AnswerService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        answer_text: &str,
        pub_date: Option<DateTime<Utc>>,
    ) -> Result<Answer> {
        let pub_date = pub_date.unwrap_or_else(time::now);
        let answer = sqlx::query_as::<_, Answer>(
            r#"
            INSERT INTO answers (answer_text, pub_date)
            VALUES (?1, ?2)
            RETURNING id, answer_text, pub_date
            "#,
        )
        .bind(answer_text)
        .bind(pub_date)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(answer_id = answer.id, "answer created");
        Ok(answer)
    }

    pub async fn list_ordered_by(
        &self,
        field: AnswerOrder,
        descending: bool,
        limit: i64,
    ) -> Result<Vec<Answer>> {
        let sql = format!(
            "SELECT id, answer_text, pub_date FROM answers ORDER BY {} LIMIT ?1",
            field.order_clause(descending)
        );
        let answers = sqlx::query_as::<_, Answer>(&sql)
            .bind(limit.max(0))
            .fetch_all(&self.pool)
            .await?;
        Ok(answers)
    }

    pub async fn latest_published(&self, limit: i64) -> Result<Vec<Answer>> {
        self.list_ordered_by(AnswerOrder::PubDate, true, limit).await
    }

    pub async fn latest_created(&self, limit: i64) -> Result<Vec<Answer>> {
        self.list_ordered_by(AnswerOrder::Id, true, limit).await
    }

    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM answers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
