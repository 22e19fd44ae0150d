use std::time::Duration;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    extractors::USER_ID_HEADER,
    handlers::{
        health::livez,
        todos::{create_todo, list_todos, mark_done, unknown_route},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(USER_ID_HEADER)]);

    let todo_routes = Router::new()
        .route(
            "/todos",
            get(list_todos).post(create_todo).fallback(unknown_route),
        )
        .route(
            "/todos/{id}/done",
            put(mark_done).fallback(unknown_route),
        )
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .merge(todo_routes)
        .fallback(unknown_route)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
