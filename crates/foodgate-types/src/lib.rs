//! Shared types, the request actor, and error types for foodgate.
//!
//! This crate holds the vocabulary every other foodgate crate speaks: roles,
//! countries, actions, the authenticated [`actor::Actor`], and the common
//! [`error::Error`]. Keeping it dependency-light lets storage and HTTP layers
//! depend on the model without pulling in the policy engine.

#![forbid(unsafe_code)]

pub mod actor;
pub mod error;
pub mod extract;
pub mod prelude;
pub mod types;

// vim: ts=4
