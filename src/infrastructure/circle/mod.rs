//! Circle adapters and use cases

mod factory;
mod repository;
mod service;

pub use factory::UuidCircleFactory;
pub use repository::StorageCircleRepository;
pub use service::{
    CircleApplicationService, CircleCreateCommand, CircleGetAllResult, CircleGetCommand,
    CircleGetRecommendResult, CircleGetResult, CircleJoinCommand,
};
