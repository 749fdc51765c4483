use axum::{
    body::Bytes,
    extract::{OriginalUri, State},
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Json},
};

use crate::{
    dto::answer_dto::{AnswerListItem, CreateAnswerPayload, CreatedAnswerResponse},
    error::{Error, Result},
    services::answer_service::LATEST_LIMIT,
    AppState,
};

/// Page listing the most recently published answers. Answers every method.
#[axum::debug_handler]
pub async fn index(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<impl IntoResponse> {
    let latest_answer_list = state.answer_service.latest_published(LATEST_LIMIT).await?;
    let html = state
        .templates
        .render_index(&latest_answer_list, uri.path())?;
    Ok(Html(html))
}

#[utoipa::path(
    get,
    path = "/polls/api/answers/",
    responses(
        (status = 200, description = "Latest answers, newest id first", body = [AnswerListItem])
    )
)]
#[axum::debug_handler]
pub async fn list_answers(
    State(state): State<AppState>,
    method: Method,
) -> Result<impl IntoResponse> {
    // `get` routing also accepts HEAD; only GET lists.
    if method != Method::GET {
        return Err(Error::MethodNotAllowed);
    }
    let answers = state.answer_service.latest_created(LATEST_LIMIT).await?;
    let items: Vec<AnswerListItem> = answers
        .into_iter()
        .map(|a| AnswerListItem::from_answer(a, state.utc_offset))
        .collect();
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/polls/api/answers/",
    request_body = CreateAnswerPayload,
    responses(
        (status = 201, description = "Answer created", body = CreatedAnswerResponse),
        (status = 400, description = "Malformed JSON or missing answer_text", body = crate::error::ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn create_answer(State(state): State<AppState>, body: Bytes) -> Result<impl IntoResponse> {
    let payload = CreateAnswerPayload::from_body(&body)
        .inspect_err(|e| tracing::debug!(error = %e, "rejected answer payload"))?;
    let answer_text = payload
        .answer_text()
        .inspect_err(|e| tracing::debug!(error = %e, "rejected answer payload"))?;

    let answer = state.answer_service.create(answer_text, None).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedAnswerResponse::from_answer(answer, state.utc_offset)),
    ))
}

/// Every method on the collection other than GET and POST.
pub async fn method_not_allowed() -> Error {
    Error::MethodNotAllowed
}
