//! The authenticated identity evaluated for a single request.

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Authenticated identity for one request.
///
/// Built once by the authentication layer from a verified token and passed
/// by reference to every policy decision. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
	pub id: Box<str>,
	pub role: Role,
	pub country: Country,
}

impl Actor {
	pub fn new(id: impl Into<Box<str>>, role: Role, country: Country) -> Actor {
		Actor { id: id.into(), role, country }
	}

	/// Build an actor from raw user-record fields, rejecting unknown values.
	pub fn parse(id: &str, role: &str, country: &str) -> FgResult<Actor> {
		if id.is_empty() {
			return Err(Error::ValidationError("actor id cannot be empty".to_string()));
		}
		Ok(Actor::new(id, role.parse()?, country.parse()?))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_valid_actor() {
		let actor = Actor::parse("u1", "manager", "india").unwrap();
		assert_eq!(actor, Actor::new("u1", Role::Manager, Country::India));
	}

	#[test]
	fn test_parse_rejects_bad_fields() {
		assert!(Actor::parse("", "manager", "india").is_err());
		assert!(Actor::parse("u1", "owner", "india").is_err());
		assert!(Actor::parse("u1", "member", "europe").is_err());
	}
}

// vim: ts=4
