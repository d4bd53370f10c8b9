//! User endpoints
//!
//! Bodies are plain text. Errors come back as JSON through [`ApiError`].

use axum::{
    Form,
    extract::{Path, State},
};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::infrastructure::user::{
    UserDeleteCommand, UserGetCommand, UserRegisterCommand, UserTierCommand, UserUpdateCommand,
};

/// Form body for register and rename
#[derive(Debug, Clone, Deserialize)]
pub struct UserNameForm {
    #[serde(default)]
    pub name: String,
}

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<String, ApiError> {
    debug!("Listing users");

    let result = state.user_service.get_all().await?;

    Ok(result
        .users
        .iter()
        .map(|user| format!("{}\n", user))
        .collect())
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<String, ApiError> {
    let result = state.user_service.get(UserGetCommand { user_id }).await?;

    Ok(format!("{} {}", result.user.id(), result.user.name()))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Form(form): Form<UserNameForm>,
) -> Result<String, ApiError> {
    let result = state
        .user_service
        .register(UserRegisterCommand { name: form.name })
        .await?;

    Ok(format!("userId: {} created!", result.id))
}

/// PUT /users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Form(form): Form<UserNameForm>,
) -> Result<String, ApiError> {
    state
        .user_service
        .update(UserUpdateCommand {
            id: user_id.clone(),
            name: form.name,
        })
        .await?;

    Ok(format!("userId: {} updated!", user_id))
}

/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<String, ApiError> {
    state
        .user_service
        .delete(UserDeleteCommand {
            id: user_id.clone(),
        })
        .await?;

    Ok(format!("userId: {} deleted!", user_id))
}

/// POST /users/{user_id}/upgrade
pub async fn upgrade_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<String, ApiError> {
    state
        .user_service
        .upgrade(UserTierCommand {
            id: user_id.clone(),
        })
        .await?;

    Ok(format!("userId: {} upgraded!", user_id))
}

/// POST /users/{user_id}/downgrade
pub async fn downgrade_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<String, ApiError> {
    state
        .user_service
        .downgrade(UserTierCommand {
            id: user_id.clone(),
        })
        .await?;

    Ok(format!("userId: {} downgraded!", user_id))
}
