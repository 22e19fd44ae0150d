//! Todo handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{Method, StatusCode, Uri},
    Json,
};

use todos_core::Todo;

use crate::{
    extractors::UserId,
    handlers::ApiError,
    models::{CreateTodo, CreatedTodo, MarkDone, TodoList},
    state::AppState,
};

fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(payload)| payload).map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        ApiError::BadRequest("error while parsing JSON body".to_string())
    })
}

/// List the caller's todos (GET /todos).
pub async fn list_todos(
    UserId(user_id): UserId,
    State(state): State<AppState>,
) -> Result<Json<TodoList>, ApiError> {
    let data = state
        .todo_repo
        .list_user_todos(&user_id)
        .await
        .map_err(|e| ApiError::repository("error while listing todos", e))?;

    Ok(Json(TodoList { data }))
}

/// Create a todo for the caller (POST /todos).
pub async fn create_todo(
    UserId(user_id): UserId,
    State(state): State<AppState>,
    body: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<Json<CreatedTodo>, ApiError> {
    let title = parse_body(body)?.validate().map_err(ApiError::Validation)?;

    let todo = Todo::new(
        state.id_generator.generate(),
        user_id,
        title,
        chrono::Utc::now().timestamp_millis(),
    );

    state
        .todo_repo
        .insert_todo(&todo)
        .await
        .map_err(|e| ApiError::repository("error while creating todo", e))?;

    tracing::info!(todo_id = %todo.id, user_id = %todo.user_id, "Created new todo");

    Ok(Json(CreatedTodo { id: todo.id }))
}

/// Acknowledge a done/undone request (PUT /todos/{id}/done).
///
/// Nothing is persisted: todos have no update path.
pub async fn mark_done(
    Path(id): Path<String>,
    body: Result<Json<MarkDone>, JsonRejection>,
) -> Result<(StatusCode, String), ApiError> {
    let done = parse_body(body)?.validate().map_err(ApiError::Validation)?;
    let state = if done { "done" } else { "undone" };

    Ok((
        StatusCode::OK,
        format!("Ho! You want to mark a todo as {state}: {id}"),
    ))
}

/// Fallback for unknown routes and unsupported methods.
pub async fn unknown_route(method: Method, uri: Uri) -> ApiError {
    ApiError::BadRequest(format!("Unknown method or path: {method} {}", uri.path()))
}
