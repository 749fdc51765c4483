use std::sync::Arc;

use minijinja::{context, Environment};
use serde::Serialize;

use crate::error::Result;
use crate::models::answer::Answer;

pub const INDEX_TEMPLATE: &str = "polls/index.html";

#[derive(Clone)]
pub struct TemplateService {
    env: Arc<Environment<'static>>,
}

#[derive(Debug, Serialize)]
struct AnswerContext<'a> {
    id: i64,
    answer_text: &'a str,
    was_published_recently: bool,
}

impl TemplateService {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(
            INDEX_TEMPLATE,
            include_str!("../../templates/polls/index.html"),
        )?;
        Ok(Self { env: Arc::new(env) })
    }

    pub fn render_index(&self, answers: &[Answer], request_path: &str) -> Result<String> {
        let latest_answer_list: Vec<AnswerContext<'_>> = answers
            .iter()
            .map(|a| AnswerContext {
                id: a.id,
                answer_text: &a.answer_text,
                was_published_recently: a.was_published_recently(),
            })
            .collect();

        let template = self.env.get_template(INDEX_TEMPLATE)?;
        let html = template.render(context! {
            latest_answer_list => latest_answer_list,
            request_path => request_path,
        })?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn answer(id: i64, text: &str) -> Answer {
        Answer {
            id,
            answer_text: text.to_string(),
            pub_date: Utc::now(),
        }
    }

    #[test]
    fn renders_each_answer() {
        let templates = TemplateService::new().unwrap();
        let html = templates
            .render_index(&[answer(2, "Rojo"), answer(1, "Azul")], "/polls/")
            .unwrap();
        assert!(html.contains("<li data-id=\"2\"><span>Rojo</span> <em>nueva</em></li>"));
        assert!(html.contains("<li data-id=\"1\"><span>Azul</span> <em>nueva</em></li>"));
        assert!(html.find("Rojo").unwrap() < html.find("Azul").unwrap());
        assert!(!html.contains("No hay respuestas"));
    }

    #[test]
    fn renders_empty_state() {
        let templates = TemplateService::new().unwrap();
        let html = templates.render_index(&[], "/polls/").unwrap();
        assert!(html.contains("No hay respuestas disponibles."));
        assert!(!html.contains("<li"));
    }

    #[test]
    fn escapes_markup_in_answers() {
        let templates = TemplateService::new().unwrap();
        let html = templates
            .render_index(&[answer(1, "<script>alert(1)</script>")], "/polls/")
            .unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
