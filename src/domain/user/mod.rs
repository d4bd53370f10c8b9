//! User domain
//!
//! The user aggregate, its value objects, the repository and factory ports,
//! and the name-uniqueness domain service.

mod entity;
mod repository;
mod service;
mod validation;

pub use entity::{User, UserId, UserName, UserType};
pub use repository::{UserFactory, UserRepository};
pub use service::UserService;
pub use validation::{UserValidationError, validate_user_id, validate_user_name};

#[cfg(test)]
pub use repository::MockUserRepository;
