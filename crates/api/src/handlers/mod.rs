//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to [`MemoryStore`](crate::store::MemoryStore) and the
//! enhancement gateway, and map errors via [`AppError`](crate::error::AppError).

pub mod catalog;
pub mod favorites;
pub mod generation;
pub mod project;
pub mod scene;
