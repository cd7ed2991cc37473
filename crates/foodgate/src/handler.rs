//! Actor self-inspection handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::prelude::*;
use foodgate_core::filter::ScopeFilter;

#[derive(Debug, Serialize)]
pub struct MeResponse {
	pub id: Box<str>,
	pub role: Role,
	pub country: Country,
	pub permissions: Vec<Action>,
	pub scope: ScopeFilter,
}

/// GET /api/me
pub async fn get_me(State(app): State<App>, actor: Actor) -> FgResult<Json<MeResponse>> {
	let permissions = app.policy.permissions(&actor);
	let scope = app.policy.scope_filter(&actor);
	Ok(Json(MeResponse {
		id: actor.id,
		role: actor.role,
		country: actor.country,
		permissions,
		scope,
	}))
}

/// GET /api/me/permissions
pub async fn get_permissions(State(app): State<App>, actor: Actor) -> Json<Vec<Action>> {
	Json(app.policy.permissions(&actor))
}

// vim: ts=4
