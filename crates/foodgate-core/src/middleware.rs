//! Authentication and permission middlewares
//!
//! `require_actor` / `optional_actor` build the request [`Actor`] from the
//! bearer token. `check_perm` / `check_perm_any` gate a route on the
//! permission catalog and must be layered inside `require_actor`.

use axum::{
	extract::{Request, State},
	http::header,
	middleware::Next,
	response::Response,
};
use std::future::Future;
use std::pin::Pin;

use crate::prelude::*;

/// Return type of the permission middleware factories
pub type PermissionCheckOutput = Pin<Box<dyn Future<Output = Result<Response, Error>> + Send>>;

fn bearer_token(req: &Request) -> Option<String> {
	let auth_header = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
	auth_header
		.strip_prefix("Bearer ")
		.or_else(|| auth_header.strip_prefix("bearer "))
		.map(str::trim)
		.filter(|t| !t.is_empty())
		.map(str::to_owned)
}

pub async fn require_actor(
	State(app): State<App>,
	mut req: Request,
	next: Next,
) -> FgResult<Response> {
	let Some(token) = bearer_token(&req) else {
		debug!("Missing or malformed Authorization header");
		return Err(Error::Unauthorized);
	};

	let actor = app.resolver.resolve_actor(&token).await?;
	debug!(actor = %actor.id, role = %actor.role, country = %actor.country, "Authenticated");
	req.extensions_mut().insert(actor);

	Ok(next.run(req).await)
}

pub async fn optional_actor(
	State(app): State<App>,
	mut req: Request,
	next: Next,
) -> FgResult<Response> {
	let token = bearer_token(&req);
	if let Some(token) = token {
		match app.resolver.resolve_actor(&token).await {
			Ok(actor) => {
				req.extensions_mut().insert(actor);
			}
			Err(err) => debug!("Optional auth failed: {}", err),
		}
	}

	Ok(next.run(req).await)
}

/// Middleware factory gating a route on a single action
///
/// # Example
/// ```ignore
/// Router::new()
///     .route("/api/orders/{id}", delete(cancel_order))
///     .route_layer(middleware::from_fn_with_state(app.clone(), check_perm(Action::CancelOrder)))
/// ```
pub fn check_perm(
	action: Action,
) -> impl Fn(State<App>, Actor, Request, Next) -> PermissionCheckOutput + Clone {
	move |state, actor, req, next| Box::pin(check_permission(state, actor, req, next, action))
}

async fn check_permission(
	State(app): State<App>,
	actor: Actor,
	req: Request,
	next: Next,
	action: Action,
) -> Result<Response, Error> {
	app.policy.require(&actor, action)?;
	Ok(next.run(req).await)
}

/// Middleware factory gating a route on holding at least one of `actions`
pub fn check_perm_any(
	actions: &'static [Action],
) -> impl Fn(State<App>, Actor, Request, Next) -> PermissionCheckOutput + Clone {
	move |state, actor, req, next| Box::pin(check_any_permission(state, actor, req, next, actions))
}

async fn check_any_permission(
	State(app): State<App>,
	actor: Actor,
	req: Request,
	next: Next,
	actions: &'static [Action],
) -> Result<Response, Error> {
	if !app.policy.authorize_any(&actor, actions).is_allowed() {
		warn!(
			actor = %actor.id,
			role = %actor.role,
			actions = ?actions,
			"None of the required actions granted"
		);
		return Err(Error::PermissionDenied);
	}
	Ok(next.run(req).await)
}

// vim: ts=4
