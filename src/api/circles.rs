//! Circle endpoints
//!
//! Listings render one `"<id> <name> <member count>"` line per circle.
//! Rejected create and join requests answer 409.

use axum::{
    Form,
    extract::{Path, State},
};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::circle::Circle;
use crate::infrastructure::circle::{CircleCreateCommand, CircleGetCommand, CircleJoinCommand};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCircleForm {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JoinCircleForm {
    #[serde(default)]
    pub user_id: String,
}

fn render_line(circle: &Circle) -> String {
    format!(
        "{} {} {}",
        circle.id(),
        circle.name(),
        circle.count_members()
    )
}

fn render_lines(circles: &[Circle]) -> String {
    circles
        .iter()
        .map(|circle| format!("{}\n", render_line(circle)))
        .collect()
}

/// GET /circles
pub async fn list_circles(State(state): State<AppState>) -> Result<String, ApiError> {
    debug!("Listing circles");

    let result = state.circle_service.get_all().await?;
    Ok(render_lines(&result.circles))
}

/// GET /circles/recommend
pub async fn recommend_circles(State(state): State<AppState>) -> Result<String, ApiError> {
    let result = state.circle_service.get_recommend().await?;
    Ok(render_lines(&result.circles))
}

/// GET /circles/{circle_id}
pub async fn get_circle(
    State(state): State<AppState>,
    Path(circle_id): Path<String>,
) -> Result<String, ApiError> {
    let result = state
        .circle_service
        .get(CircleGetCommand { circle_id })
        .await?;

    Ok(render_line(&result.circle))
}

/// POST /circles
pub async fn create_circle(
    State(state): State<AppState>,
    Form(form): Form<CreateCircleForm>,
) -> Result<String, ApiError> {
    let circle_id = state
        .circle_service
        .create_with_id(CircleCreateCommand {
            user_id: form.user_id,
            name: form.name,
        })
        .await?
        .ok_or_else(|| ApiError::conflict("circle could not be created"))?;

    Ok(format!("circleId: {} created!", circle_id))
}

/// POST /circles/{circle_id}/join
pub async fn join_circle(
    State(state): State<AppState>,
    Path(circle_id): Path<String>,
    Form(form): Form<JoinCircleForm>,
) -> Result<String, ApiError> {
    let user_id = form.user_id.clone();
    let joined = state
        .circle_service
        .join(CircleJoinCommand {
            user_id: form.user_id,
            circle_id: circle_id.clone(),
        })
        .await?;

    if !joined {
        return Err(ApiError::conflict("could not join circle"));
    }

    Ok(format!("userId: {} joined circle {}!", user_id, circle_id))
}
