use crate::errors::AppError;
use crate::insights::build_insights;
use crate::models::{
    parse_score, AddMoodForm, AddMoodRequest, DeleteMoodForm, InsightsResponse, MoodEntry,
};
use crate::state::AppState;
use crate::ui::{render_history, render_tracker, render_welcome};
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form, Json,
};
use chrono::Local;

pub async fn welcome(State(state): State<AppState>) -> Html<String> {
    Html(render_welcome(&state.user))
}

pub async fn tracker(State(state): State<AppState>) -> Html<String> {
    Html(render_tracker(&state.user))
}

pub async fn moods(State(state): State<AppState>) -> Html<String> {
    let entries = state.store.load_all().await;
    let insights = build_insights(&entries);
    Html(render_history(&state.user, &entries, &insights))
}

pub async fn add_mood(
    State(state): State<AppState>,
    Form(form): Form<AddMoodForm>,
) -> Result<Redirect, AppError> {
    let entry = new_entry(&state, &form.mood, &form.note, parse_score(&form.stress_score))?;
    state.store.append(entry).await?;
    Ok(Redirect::to("/moods"))
}

pub async fn delete_mood(
    State(state): State<AppState>,
    Form(form): Form<DeleteMoodForm>,
) -> Result<Redirect, AppError> {
    // A garbled index behaves like an out-of-range one: nothing is removed.
    if let Ok(index) = form.index.trim().parse::<usize>() {
        state.store.delete_at(index).await?;
    }
    Ok(Redirect::to("/moods"))
}

pub async fn list_moods(State(state): State<AppState>) -> Json<Vec<MoodEntry>> {
    Json(state.store.load_all().await)
}

pub async fn get_insights(State(state): State<AppState>) -> Json<InsightsResponse> {
    let entries = state.store.load_all().await;
    Json(build_insights(&entries))
}

pub async fn add_mood_json(
    State(state): State<AppState>,
    Json(payload): Json<AddMoodRequest>,
) -> Result<Json<MoodEntry>, AppError> {
    let entry = new_entry(&state, &payload.mood, &payload.note, payload.stress_score)?;
    state.store.append(entry.clone()).await?;
    Ok(Json(entry))
}

fn new_entry(state: &AppState, mood: &str, note: &str, score: u8) -> Result<MoodEntry, AppError> {
    let mood = mood.trim();
    if mood.is_empty() {
        return Err(AppError::bad_request("mood is required"));
    }
    Ok(MoodEntry {
        mood: mood.to_string(),
        note: note.trim().to_string(),
        stress_score: score,
        date: creation_date(),
        user_id: Some(state.user.id.clone()),
    })
}

// Display shape matches what earlier revisions stored; the comma before the
// time is what the chart-label split keys on.
fn creation_date() -> String {
    Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
