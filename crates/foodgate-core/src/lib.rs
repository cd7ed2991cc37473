//! Access-control core for foodgate.
//!
//! Two pieces make up the core: the [`catalog::PermissionCatalog`], a fixed
//! role to actions table, and the [`policy::AccessPolicy`], which answers
//! "may this actor do X?" and "which country may this actor's query reach?".
//! The remaining modules are the axum glue that builds the request actor and
//! applies those decisions in front of handlers.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod app;
pub mod catalog;
pub mod extract;
pub mod filter;
pub mod middleware;
pub mod policy;
pub mod prelude;
pub mod token;

// Re-export commonly used types
pub use app::{App, AppBuilderOpts, AppState};
pub use catalog::PermissionCatalog;
pub use extract::{OptionalActor, Scope};
pub use filter::{Collection, ScopeFilter};
pub use middleware::{PermissionCheckOutput, check_perm, check_perm_any};
pub use policy::{AccessPolicy, Decision, DenyReason};

// vim: ts=4
