//! Custom extractors for foodgate-specific data

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::filter::ScopeFilter;
use crate::prelude::*;

// Re-export the actor extractors from foodgate-types
pub use foodgate_types::extract::{ActorResolver, OptionalActor};

// Scope //
//*******//
/// Country scope of the request actor, ready to merge into a query
#[derive(Clone, Copy, Debug)]
pub struct Scope(pub ScopeFilter);

impl FromRequestParts<App> for Scope {
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, state: &App) -> Result<Self, Self::Rejection> {
		let actor = parts.extensions.get::<Actor>().ok_or(Error::Unauthorized)?;
		Ok(Scope(state.policy.scope_filter(actor)))
	}
}

// vim: ts=4
