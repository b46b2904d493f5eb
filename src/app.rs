use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/tracker", get(handlers::tracker))
        .route("/moods", get(handlers::moods))
        .route("/add-mood", post(handlers::add_mood))
        .route("/delete-mood", post(handlers::delete_mood))
        .route("/api/moods", get(handlers::list_moods))
        .route("/api/insights", get(handlers::get_insights))
        .route("/api/mood", post(handlers::add_mood_json))
        .with_state(state)
}
