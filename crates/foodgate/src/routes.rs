use axum::{Router, middleware, routing::get};

use crate::handler;
use crate::prelude::*;
use foodgate_core::middleware::require_actor;

pub fn init(app: App) -> Router {
	let protected_router = Router::new()
		.route("/api/me", get(handler::get_me))
		.route("/api/me/permissions", get(handler::get_permissions))
		.layer(middleware::from_fn_with_state(app.clone(), require_actor));

	Router::new()
		.route("/api/health", get(async || "ok\n"))
		.merge(protected_router)
		.with_state(app)
}

// vim: ts=4
