//! Axum extractors for the request actor.
//!
//! The actor is inserted into request extensions by the authentication
//! middleware; these extractors only read it back.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::actor::Actor;
use crate::error::{Error, FgResult};

// Actor //
//*******//
impl<S> FromRequestParts<S> for Actor
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		parts.extensions.get::<Actor>().cloned().ok_or(Error::Unauthorized)
	}
}

// OptionalActor //
//***************//
/// Actor extractor that doesn't fail if authentication is missing
#[derive(Clone, Debug)]
pub struct OptionalActor(pub Option<Actor>);

impl<S> FromRequestParts<S> for OptionalActor
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		Ok(OptionalActor(parts.extensions.get::<Actor>().cloned()))
	}
}

// ActorResolver //
//***************//
/// Turns a bearer token into a verified [`Actor`].
///
/// Implemented by the authentication collaborator. The resolver must only
/// return actors whose role and country are already validated.
#[async_trait]
pub trait ActorResolver: Send + Sync {
	async fn resolve_actor(&self, token: &str) -> FgResult<Actor>;
}

/// Blanket impl so that `Arc<dyn ActorResolver>` and `Arc<T>` can be used
/// wherever a resolver is expected.
#[async_trait]
impl<T: ActorResolver + ?Sized> ActorResolver for Arc<T> {
	async fn resolve_actor(&self, token: &str) -> FgResult<Actor> {
		(**self).resolve_actor(token).await
	}
}


// vim: ts=4
