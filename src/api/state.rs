//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::circle::CircleApplicationService;
use crate::infrastructure::user::UserApplicationService;

/// Application state shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub user_service: Arc<UserApplicationService>,
    pub circle_service: Arc<CircleApplicationService>,
}

impl AppState {
    pub fn new(
        user_service: Arc<UserApplicationService>,
        circle_service: Arc<CircleApplicationService>,
    ) -> Self {
        Self {
            user_service,
            circle_service,
        }
    }
}
