//! Common types used throughout foodgate.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::prelude::*;

// Role //
//******//
/// Role assigned to a user record. Fixed for the lifetime of the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	/// Unrestricted administrator, exempt from country partitioning
	Admin,
	/// Regional manager, bound to one country
	Manager,
	/// Team member, bound to one country
	Member,
}

impl Role {
	pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Member];

	pub fn as_str(&self) -> &'static str {
		match self {
			Role::Admin => "admin",
			Role::Manager => "manager",
			Role::Member => "member",
		}
	}

	/// True for the only role that bypasses country partitioning.
	pub fn is_unrestricted(&self) -> bool {
		matches!(self, Role::Admin)
	}
}

impl std::fmt::Display for Role {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Role {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"admin" => Ok(Role::Admin),
			"manager" => Ok(Role::Manager),
			"member" => Ok(Role::Member),
			_ => Err(Error::ValidationError(format!("unknown role '{}'", s))),
		}
	}
}

// Country //
//*********//
/// Data region a partitioned record belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
	India,
	America,
}

impl Country {
	pub const ALL: [Country; 2] = [Country::India, Country::America];

	pub fn as_str(&self) -> &'static str {
		match self {
			Country::India => "india",
			Country::America => "america",
		}
	}
}

impl std::fmt::Display for Country {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Country {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"india" => Ok(Country::India),
			"america" => Ok(Country::America),
			_ => Err(Error::ValidationError(format!("unknown country '{}'", s))),
		}
	}
}

// Action //
//********//
/// Capability checked against the permission catalog.
///
/// Variant order is the order actions are listed in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
	ViewRestaurants,
	CreateOrder,
	PlaceOrder,
	CancelOrder,
	UpdatePaymentMethod,
}

impl Action {
	pub const ALL: [Action; 5] = [
		Action::ViewRestaurants,
		Action::CreateOrder,
		Action::PlaceOrder,
		Action::CancelOrder,
		Action::UpdatePaymentMethod,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Action::ViewRestaurants => "view_restaurants",
			Action::CreateOrder => "create_order",
			Action::PlaceOrder => "place_order",
			Action::CancelOrder => "cancel_order",
			Action::UpdatePaymentMethod => "update_payment_method",
		}
	}
}

impl std::fmt::Display for Action {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Action {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Action::ALL
			.into_iter()
			.find(|a| a.as_str() == s)
			.ok_or_else(|| Error::ValidationError(format!("unknown action '{}'", s)))
	}
}

// Partitioned //
//*************//
/// Implemented by every record that lives in exactly one country.
///
/// Restaurants, menu items, orders and payment records derived from orders
/// implement this so a fetched record can be re-checked against the actor.
pub trait Partitioned {
	fn country(&self) -> Country;
}

impl Partitioned for Country {
	fn country(&self) -> Country {
		*self
	}
}

impl<T: Partitioned> Partitioned for &T {
	fn country(&self) -> Country {
		(**self).country()
	}
}


// vim: ts=4
