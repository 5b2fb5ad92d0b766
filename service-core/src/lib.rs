//! service-core: Shared infrastructure for the story platform services.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
