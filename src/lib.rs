pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::error::Result;
use crate::services::{answer_service::AnswerService, template_service::TemplateService};
use chrono::FixedOffset;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub answer_service: AnswerService,
    pub templates: TemplateService,
    pub utc_offset: FixedOffset,
}

impl AppState {
    pub fn new(pool: SqlitePool, utc_offset: FixedOffset) -> Result<Self> {
        let answer_service = AnswerService::new(pool);
        let templates = TemplateService::new()?;

        Ok(Self {
            answer_service,
            templates,
            utc_offset,
        })
    }
}
