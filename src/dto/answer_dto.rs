use chrono::FixedOffset;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::error::{Error, Result};
use crate::models::answer::Answer;
use crate::utils::time;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateAnswerPayload {
    /// Anything other than a string counts as absent.
    #[serde(default, deserialize_with = "string_or_none")]
    pub answer_text: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match JsonValue::deserialize(deserializer)? {
        JsonValue::String(s) => Some(s),
        _ => None,
    })
}

impl CreateAnswerPayload {
    /// Decodes a raw request body. An empty body reads as `{}`; anything that
    /// is not a JSON object is rejected as malformed.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        if body.is_empty() {
            return Ok(Self::default());
        }
        let value: JsonValue = serde_json::from_slice(body).map_err(|_| Error::InvalidJson)?;
        if !value.is_object() {
            return Err(Error::InvalidJson);
        }
        Self::deserialize(value).map_err(|_| Error::InvalidJson)
    }

    /// Trimmed, non-empty answer text.
    pub fn answer_text(&self) -> Result<&str> {
        let text = self.answer_text.as_deref().unwrap_or_default().trim();
        if text.is_empty() {
            return Err(Error::MissingField("answer_text"));
        }
        Ok(text)
    }
}

/// Listing shape: `pub_date` as `YYYY-MM-DD HH:MM:SS` local time.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnswerListItem {
    pub id: i64,
    pub answer_text: String,
    #[schema(example = "2026-10-14 09:30:00")]
    pub pub_date: String,
}

impl AnswerListItem {
    pub fn from_answer(answer: Answer, offset: FixedOffset) -> Self {
        Self {
            id: answer.id,
            pub_date: time::to_local_display(answer.pub_date, offset),
            answer_text: answer.answer_text,
        }
    }
}

/// Creation shape: `pub_date` as ISO-8601 local time with offset.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedAnswerResponse {
    pub id: i64,
    pub answer_text: String,
    #[schema(example = "2026-10-14T09:30:00.000000-05:00")]
    pub pub_date: String,
}

impl CreatedAnswerResponse {
    pub fn from_answer(answer: Answer, offset: FixedOffset) -> Self {
        Self {
            id: answer.id,
            pub_date: time::to_local_iso8601(answer.pub_date, offset),
            answer_text: answer.answer_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn text_of(body: &str) -> Result<String> {
        CreateAnswerPayload::from_body(body.as_bytes())?
            .answer_text()
            .map(str::to_owned)
    }

    #[test]
    fn trims_answer_text() {
        assert_eq!(text_of(r#"{"answer_text": "  hola  "}"#).unwrap(), "hola");
        assert_eq!(text_of("{\"answer_text\": \"\\tbien\\n\"}").unwrap(), "bien");
    }

    #[test]
    fn keeps_inner_whitespace() {
        assert_eq!(
            text_of(r#"{"answer_text": " muy  bien "}"#).unwrap(),
            "muy  bien"
        );
    }

    #[test]
    fn missing_or_blank_text_is_required() {
        for body in [
            "",
            "{}",
            r#"{"answer_text": ""}"#,
            r#"{"answer_text": "   "}"#,
            r#"{"answer_text": null}"#,
            r#"{"answer_text": 42}"#,
            r#"{"otro": "campo"}"#,
        ] {
            assert!(
                matches!(text_of(body), Err(Error::MissingField("answer_text"))),
                "body {:?} should be rejected as missing",
                body
            );
        }
    }

    #[test]
    fn malformed_bodies_are_invalid_json() {
        for body in ["no soy json", "{", "   ", r#"["hola"]"#, r#""hola""#, "12"] {
            assert!(
                matches!(CreateAnswerPayload::from_body(body.as_bytes()), Err(Error::InvalidJson)),
                "body {:?} should be invalid json",
                body
            );
        }
    }

    #[test]
    fn response_shapes_use_their_own_date_formats() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let answer = Answer {
            id: 7,
            answer_text: "Test".into(),
            pub_date: Utc.with_ymd_and_hms(2026, 10, 14, 14, 30, 0).unwrap(),
        };

        let item = AnswerListItem::from_answer(answer.clone(), offset);
        assert_eq!(item.pub_date, "2026-10-14 09:30:00");

        let created = CreatedAnswerResponse::from_answer(answer, offset);
        assert_eq!(created.pub_date, "2026-10-14T09:30:00.000000-05:00");
        assert_eq!(created.id, 7);
        assert_eq!(created.answer_text, "Test");
    }
}
