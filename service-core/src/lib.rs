//! service-core: Shared infrastructure for the exposition service.
pub mod error;
pub mod middleware;
pub mod observability;
