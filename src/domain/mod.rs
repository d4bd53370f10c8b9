//! Domain layer - Core business logic and entities

pub mod circle;
pub mod error;
pub mod storage;
pub mod user;

pub use circle::{
    Circle, CircleFactory, CircleFullSpecification, CircleId, CircleName,
    CircleRecommendSpecification, CircleRepository, CircleService, CircleValidationError,
};
pub use error::DomainError;
pub use storage::{Storage, StorageEntity, StorageKey};
pub use user::{
    User, UserFactory, UserId, UserName, UserRepository, UserService, UserType,
    UserValidationError,
};
