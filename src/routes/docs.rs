use axum::Json;
use utoipa::OpenApi;

use crate::dto::answer_dto::{AnswerListItem, CreateAnswerPayload, CreatedAnswerResponse};
use crate::error::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::polls::list_answers, crate::routes::polls::create_answer),
    components(schemas(
        AnswerListItem,
        CreateAnswerPayload,
        CreatedAnswerResponse,
        ErrorResponse
    )),
    tags((name = "polls", description = "Poll answers"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
