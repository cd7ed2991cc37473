//! foodgate decides who may do what, and where, on a food-ordering platform.
//!
//! # Features
//!
//! - Role based permission catalog (admin, manager, member)
//! - Country partitioning of restaurants, menus and orders
//!     - admins see every country
//!     - managers and members are confined to their own
//! - Axum middlewares and extractors for the request actor
//! - JWT actor resolution

// Re-export shared types from foodgate-types
pub use foodgate_types::actor;
pub use foodgate_types::error;
pub use foodgate_types::types;

// Core re-exports
pub use foodgate_core::catalog;
pub use foodgate_core::extract;
pub use foodgate_core::filter;
pub use foodgate_core::middleware;
pub use foodgate_core::policy;
pub use foodgate_core::token;

// Local modules
pub mod app;
pub mod handler;
pub mod prelude;
pub mod routes;

pub use crate::app::{App, AppBuilder};

// vim: ts=4
