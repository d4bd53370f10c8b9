//! Infrastructure layer - adapters, use cases and runtime plumbing

pub mod circle;
pub mod logging;
pub mod observability;
pub mod storage;
pub mod user;
