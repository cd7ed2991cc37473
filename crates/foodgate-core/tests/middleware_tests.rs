//! Router-level tests for the authentication and permission middlewares

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
	Json, Router,
	body::Body,
	http::{Request, StatusCode},
	middleware,
	routing::{delete, get},
};
use tower::ServiceExt;

use foodgate_core::extract::Scope;
use foodgate_core::middleware::{optional_actor, require_actor};
use foodgate_core::{AccessPolicy, App, AppBuilderOpts, AppState, check_perm, check_perm_any};
use foodgate_types::actor::Actor;
use foodgate_types::error::{Error, FgResult};
use foodgate_types::extract::{ActorResolver, OptionalActor};
use foodgate_types::types::{Action, Country, Role};

struct StaticResolver(HashMap<&'static str, Actor>);

#[async_trait]
impl ActorResolver for StaticResolver {
	async fn resolve_actor(&self, token: &str) -> FgResult<Actor> {
		self.0.get(token).cloned().ok_or(Error::Unauthorized)
	}
}

fn app() -> App {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();

	let mut actors = HashMap::new();
	actors.insert("admin", Actor::new("fury", Role::Admin, Country::India));
	actors.insert("manager", Actor::new("marvel", Role::Manager, Country::India));
	actors.insert("member", Actor::new("thor", Role::Member, Country::America));

	Arc::new(AppState {
		policy: AccessPolicy::default(),
		resolver: Arc::new(StaticResolver(actors)),
		opts: AppBuilderOpts::default(),
	})
}

static MANAGE_ORDERS: &[Action] = &[Action::PlaceOrder, Action::CancelOrder];

fn router(app: App) -> Router {
	let protected = Router::new()
		.route("/orders/{id}", delete(async || StatusCode::NO_CONTENT))
		.route_layer(middleware::from_fn_with_state(app.clone(), check_perm(Action::CancelOrder)));

	let managed = Router::new()
		.route("/orders/manage", get(async || "ok"))
		.route_layer(middleware::from_fn_with_state(app.clone(), check_perm_any(MANAGE_ORDERS)));

	let scoped = Router::new().route("/scope", get(|Scope(filter): Scope| async move { Json(filter) }));

	let authed = Router::new()
		.merge(protected)
		.merge(managed)
		.merge(scoped)
		.layer(middleware::from_fn_with_state(app.clone(), require_actor));

	let public = Router::new()
		.route(
			"/whoami",
			get(|OptionalActor(actor): OptionalActor| async move {
				actor.map_or_else(|| "anonymous".to_string(), |a| a.id.to_string())
			}),
		)
		.layer(middleware::from_fn_with_state(app.clone(), optional_actor));

	Router::new().merge(authed).merge(public).with_state(app)
}

fn request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
	let mut builder = Request::builder().method(method).uri(uri);
	if let Some(token) = token {
		builder = builder.header("Authorization", format!("Bearer {}", token));
	}
	builder.body(Body::empty()).unwrap()
}

async fn body_string(resp: axum::response::Response) -> String {
	let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
	String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
	let resp = router(app()).oneshot(request("DELETE", "/orders/1", None)).await.unwrap();
	assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_token_is_unauthorized() {
	let resp = router(app()).oneshot(request("DELETE", "/orders/1", Some("nope"))).await.unwrap();
	assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_member_cannot_cancel() {
	let resp = router(app()).oneshot(request("DELETE", "/orders/1", Some("member"))).await.unwrap();
	assert_eq!(resp.status(), StatusCode::FORBIDDEN);
	let body = body_string(resp).await;
	assert!(body.contains("PERMISSION_DENIED"));
	assert!(!body.contains("cancel_order"));
}

#[tokio::test]
async fn test_manager_can_cancel() {
	let resp =
		router(app()).oneshot(request("DELETE", "/orders/1", Some("manager"))).await.unwrap();
	assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_any_permission_gate() {
	let resp =
		router(app()).oneshot(request("GET", "/orders/manage", Some("member"))).await.unwrap();
	assert_eq!(resp.status(), StatusCode::FORBIDDEN);

	let resp =
		router(app()).oneshot(request("GET", "/orders/manage", Some("manager"))).await.unwrap();
	assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_scope_extractor() {
	let resp = router(app()).oneshot(request("GET", "/scope", Some("member"))).await.unwrap();
	assert_eq!(resp.status(), StatusCode::OK);
	assert_eq!(body_string(resp).await, r#"{"country":"america"}"#);

	let resp = router(app()).oneshot(request("GET", "/scope", Some("admin"))).await.unwrap();
	assert_eq!(body_string(resp).await, "{}");
}

#[tokio::test]
async fn test_optional_actor() {
	let resp = router(app()).oneshot(request("GET", "/whoami", None)).await.unwrap();
	assert_eq!(body_string(resp).await, "anonymous");

	let resp = router(app()).oneshot(request("GET", "/whoami", Some("bogus"))).await.unwrap();
	assert_eq!(resp.status(), StatusCode::OK);
	assert_eq!(body_string(resp).await, "anonymous");

	let resp = router(app()).oneshot(request("GET", "/whoami", Some("admin"))).await.unwrap();
	assert_eq!(body_string(resp).await, "fury");
}

// vim: ts=4
