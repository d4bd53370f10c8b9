//! User infrastructure implementations

mod factory;
mod repository;
mod service;

pub use factory::SequentialUserFactory;
pub use repository::StorageUserRepository;
pub use service::{
    UserApplicationService, UserDeleteCommand, UserGetAllResult, UserGetCommand, UserGetResult,
    UserRegisterCommand, UserRegisterResult, UserTierCommand, UserUpdateCommand,
};
