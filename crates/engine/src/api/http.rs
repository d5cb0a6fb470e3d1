//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use rpgpt_domain::GameState;
use rpgpt_shared::{messages, routes, ChoiceRequest, ErrorResponse, LoadRequest, LoadResponse};

use crate::app::App;
use crate::use_cases::story::AdvanceError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route(routes::HEALTH, get(health))
        .route(routes::STATE, get(get_state))
        .route(routes::CHOICE, post(make_choice))
        .route(routes::SAVE, get(save_state))
        .route(routes::LOAD, post(load_state))
}

async fn health() -> &'static str {
    "OK"
}

async fn get_state(State(app): State<Arc<App>>) -> Json<GameState> {
    Json(app.use_cases.story.get_state.execute().await)
}

async fn make_choice(
    State(app): State<Arc<App>>,
    body: Result<Json<ChoiceRequest>, JsonRejection>,
) -> Result<Json<GameState>, ApiError> {
    let choice = match body {
        Ok(Json(ChoiceRequest {
            choice: Some(choice),
        })) => choice,
        Ok(_) => return Err(ApiError::BadRequest(messages::INVALID_CHOICE)),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable choice request");
            return Err(ApiError::BadRequest(messages::INVALID_CHOICE));
        }
    };

    match app.use_cases.story.advance.execute(&choice).await {
        Ok(state) => Ok(Json(state)),
        Err(AdvanceError::InvalidChoice(_)) => Err(ApiError::BadRequest(messages::INVALID_CHOICE)),
        Err(e) => {
            tracing::error!(error = %e, choice = %choice, "Failed to advance story");
            Err(ApiError::Internal(messages::GENERATION_FAILED))
        }
    }
}

async fn save_state(State(app): State<Arc<App>>) -> impl IntoResponse {
    let state = app.use_cases.story.save.execute().await;
    (
        [(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", routes::SAVE_FILE_NAME),
        )],
        Json(state),
    )
}

async fn load_state(
    State(app): State<Arc<App>>,
    body: Result<Json<LoadRequest>, JsonRejection>,
) -> Result<Json<LoadResponse>, ApiError> {
    let value = match body {
        Ok(Json(request)) => request.state,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable load request");
            None
        }
    };

    let state = app
        .use_cases
        .story
        .load
        .execute(value)
        .await
        .map_err(|_| ApiError::BadRequest(messages::INVALID_GAME_STATE))?;
    Ok(Json(LoadResponse::loaded(state)))
}

/// Client-facing failure. Only the fixed message reaches the response body.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(&'static str),
    Internal(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
