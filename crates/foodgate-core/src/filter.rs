//! Country scope filters for storage queries

use serde::Serialize;
use serde_json::{Map, Value};

use crate::prelude::*;

/// Field name partitioned collections store their country under
pub const COUNTRY_FIELD: &str = "country";

/// Per-actor predicate merged into queries on partitioned collections.
///
/// An unrestricted filter adds nothing to the query; a country filter pins
/// the query to exactly one country.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ScopeFilter {
	#[serde(skip_serializing_if = "Option::is_none")]
	country: Option<Country>,
}

impl ScopeFilter {
	pub fn unrestricted() -> ScopeFilter {
		ScopeFilter { country: None }
	}

	pub fn country(country: Country) -> ScopeFilter {
		ScopeFilter { country: Some(country) }
	}

	/// The country this filter pins queries to, if any
	pub fn restricted_to(&self) -> Option<Country> {
		self.country
	}

	pub fn is_unrestricted(&self) -> bool {
		self.country.is_none()
	}

	/// In-memory variant of the filter
	pub fn matches(&self, record: &impl Partitioned) -> bool {
		self.country.is_none_or(|c| c == record.country())
	}

	/// Merge the filter into a document-style base query.
	///
	/// A caller-supplied `country` key is overwritten so a client cannot widen
	/// its own scope by asking for another country.
	pub fn apply(&self, mut base: Map<String, Value>) -> Map<String, Value> {
		if let Some(country) = self.country {
			if let Some(requested) = base.get(COUNTRY_FIELD)
				&& requested.as_str() != Some(country.as_str())
			{
				debug!(requested = %requested, scope = %country, "Overriding country in query");
			}
			base.insert(COUNTRY_FIELD.to_string(), Value::String(country.as_str().to_string()));
		}
		base
	}
}

/// Collections of the food-ordering platform
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
	Users,
	Restaurants,
	MenuItems,
	Orders,
	PaymentMethods,
}

impl Collection {
	pub fn as_str(&self) -> &'static str {
		match self {
			Collection::Users => "users",
			Collection::Restaurants => "restaurants",
			Collection::MenuItems => "menu_items",
			Collection::Orders => "orders",
			Collection::PaymentMethods => "payment_methods",
		}
	}

	/// Whether records in this collection carry a country.
	///
	/// Menu items inherit their restaurant's country. Payment methods belong
	/// to a user and are not partitioned; payment history is read through
	/// orders and is therefore covered by `Orders`.
	pub fn is_partitioned(&self) -> bool {
		matches!(self, Collection::Restaurants | Collection::MenuItems | Collection::Orders)
	}
}

impl std::fmt::Display for Collection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}


// vim: ts=4
