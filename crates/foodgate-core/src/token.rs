//! JWT-backed actor resolution
//!
//! Access tokens carry the full actor (`sub`, `role`, `country`) so the
//! request actor can be built without a user lookup. Role and country are
//! deserialized strictly: a token naming an unknown role or a malformed
//! country is rejected as unauthenticated rather than evaluated.

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::prelude::*;
use foodgate_types::extract::ActorResolver;

pub const ACCESS_TOKEN_EXPIRY: u64 = 8 * 3600;

/// Access token claims
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ActorClaims {
	pub sub: Box<str>,
	pub role: Role,
	pub country: Country,
	pub exp: u64,
}

impl ActorClaims {
	/// Claims for `actor`, expiring `ttl` seconds from now
	pub fn for_actor(actor: &Actor, ttl: u64) -> FgResult<ActorClaims> {
		let now = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.map_err(|_| Error::Internal("system clock before epoch".to_string()))?
			.as_secs();
		Ok(ActorClaims {
			sub: actor.id.clone(),
			role: actor.role,
			country: actor.country,
			exp: now + ttl,
		})
	}
}

impl From<ActorClaims> for Actor {
	fn from(claims: ActorClaims) -> Self {
		Actor::new(claims.sub, claims.role, claims.country)
	}
}

/// Resolves HS256-signed access tokens into actors
pub struct JwtActorResolver {
	encoding_key: EncodingKey,
	decoding_key: DecodingKey,
	validation: Validation,
}

impl JwtActorResolver {
	pub fn new(secret: &[u8]) -> FgResult<Self> {
		if secret.is_empty() {
			return Err(Error::ConfigError("JWT secret cannot be empty".to_string()));
		}
		Ok(Self {
			encoding_key: EncodingKey::from_secret(secret),
			decoding_key: DecodingKey::from_secret(secret),
			validation: Validation::new(Algorithm::HS256),
		})
	}

	/// Sign claims. Token issuance belongs to the login flow; this exists for
	/// that flow and for tests.
	pub fn sign(&self, claims: &ActorClaims) -> FgResult<Box<str>> {
		jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
			.map(Into::into)
			.map_err(|e| Error::Internal(format!("token signing failed: {}", e)))
	}

	pub fn verify(&self, token: &str) -> FgResult<Actor> {
		let data = jsonwebtoken::decode::<ActorClaims>(token, &self.decoding_key, &self.validation)
			.map_err(|e| {
				debug!("Rejected access token: {}", e);
				Error::Unauthorized
			})?;
		if data.claims.sub.is_empty() {
			return Err(Error::Unauthorized);
		}
		Ok(data.claims.into())
	}
}

#[async_trait]
impl ActorResolver for JwtActorResolver {
	async fn resolve_actor(&self, token: &str) -> FgResult<Actor> {
		self.verify(token)
	}
}


// vim: ts=4
