//! Circle domain module
//!
//! Circles are user-organized groups with an owner and a capped member list.
//! Capacity depends on the owner's tier; see [`CircleFullSpecification`].

mod entity;
mod repository;
mod service;
mod specification;
mod validation;

pub use entity::{Circle, CircleId, CircleName};
pub use repository::{CircleFactory, CircleRepository};
pub use service::CircleService;
pub use specification::{CircleFullSpecification, CircleRecommendSpecification};
pub use validation::{CircleValidationError, validate_circle_id, validate_circle_name};

#[cfg(test)]
pub use repository::MockCircleRepository;
