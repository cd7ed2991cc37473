//! Shared fixtures for foodgate integration tests

use foodgate::App;
use foodgate::AppBuilder;
use foodgate::actor::Actor;
use foodgate::token::{ActorClaims, JwtActorResolver};
use foodgate::types::{Country, Role};

pub const SECRET: &str = "integration-test-secret";

/// The platform's seed users. The admin seeded with a combined country
/// expression is pinned to a single country here.
pub fn seed_users() -> Vec<Actor> {
	vec![
		Actor::new("nick.fury", Role::Admin, Country::America),
		Actor::new("captain.marvel", Role::Manager, Country::India),
		Actor::new("captain.america", Role::Manager, Country::America),
		Actor::new("thanos", Role::Member, Country::India),
		Actor::new("thor", Role::Member, Country::India),
		Actor::new("travis", Role::Admin, Country::America),
	]
}

pub fn user(id: &str) -> Actor {
	seed_users().into_iter().find(|a| a.id.as_ref() == id).unwrap()
}

pub fn test_app() -> App {
	let mut builder = AppBuilder::new();
	builder.jwt_secret(SECRET);
	builder.build().unwrap()
}

pub fn token_for(actor: &Actor) -> String {
	let resolver = JwtActorResolver::new(SECRET.as_bytes()).unwrap();
	let claims = ActorClaims::for_actor(actor, 300).unwrap();
	resolver.sign(&claims).unwrap().to_string()
}

// vim: ts=4
