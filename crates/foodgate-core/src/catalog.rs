//! Permission catalog: the role to actions table
//!
//! The catalog is the single source of truth for which actions a role may
//! perform. It is built once at startup (from the built-in table or an
//! operator-supplied JSON file) and shared read-only afterwards.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::prelude::*;

/// Set of actions granted to a role
pub type ActionSet = BTreeSet<Action>;

static NO_ACTIONS: ActionSet = BTreeSet::new();

/// Built-in permission table
const DEFAULT_GRANTS: &[(Role, &[Action])] = &[
	(
		Role::Admin,
		&[
			Action::ViewRestaurants,
			Action::CreateOrder,
			Action::PlaceOrder,
			Action::CancelOrder,
			Action::UpdatePaymentMethod,
		],
	),
	(
		Role::Manager,
		&[Action::ViewRestaurants, Action::CreateOrder, Action::PlaceOrder, Action::CancelOrder],
	),
	(Role::Member, &[Action::ViewRestaurants, Action::CreateOrder]),
];

/// Immutable role to actions mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCatalog {
	grants: BTreeMap<Role, ActionSet>,
}

impl PermissionCatalog {
	pub fn builder() -> CatalogBuilder {
		CatalogBuilder { grants: BTreeMap::new() }
	}

	/// Actions granted to `role`. A role without an entry gets the empty set.
	pub fn permissions_for(&self, role: Role) -> &ActionSet {
		self.grants.get(&role).unwrap_or(&NO_ACTIONS)
	}

	pub fn has_permission(&self, role: Role, action: Action) -> bool {
		self.permissions_for(role).contains(&action)
	}

	/// Whether `role` has an entry at all. A missing entry is a configuration
	/// defect, not a runtime condition.
	pub fn contains_role(&self, role: Role) -> bool {
		self.grants.contains_key(&role)
	}

	/// Roles with an entry, in declaration order
	pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
		self.grants.keys().copied()
	}

	/// Roles declared in [`Role::ALL`] that have no entry
	pub fn missing_roles(&self) -> Vec<Role> {
		Role::ALL.into_iter().filter(|r| !self.contains_role(*r)).collect()
	}

	/// Whether `role`'s set covers the set of every other role in the catalog
	pub fn covers_all(&self, role: Role) -> bool {
		let own = self.permissions_for(role);
		self.grants.values().all(|other| other.is_subset(own))
	}

	/// Parse a catalog from a JSON object of `{"<role>": ["<action>", ...]}`
	pub fn from_json(json: &str) -> FgResult<PermissionCatalog> {
		let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)
			.map_err(|e| Error::ConfigError(format!("invalid permission catalog: {}", e)))?;

		let mut builder = PermissionCatalog::builder();
		for (role, actions) in raw {
			let role: Role = role.parse().map_err(|e| Error::ConfigError(format!("{}", e)))?;
			let actions = actions
				.iter()
				.map(|a| a.parse::<Action>())
				.collect::<FgResult<Vec<_>>>()
				.map_err(|e| Error::ConfigError(format!("{}", e)))?;
			builder = builder.grant(role, actions);
		}
		builder.build()
	}

	/// Read and parse a catalog file
	pub fn load(path: &Path) -> FgResult<PermissionCatalog> {
		let json = std::fs::read_to_string(path)?;
		let catalog = PermissionCatalog::from_json(&json)?;
		info!(path = %path.display(), roles = catalog.grants.len(), "Loaded permission catalog");
		Ok(catalog)
	}
}

impl Default for PermissionCatalog {
	fn default() -> Self {
		let grants = DEFAULT_GRANTS
			.iter()
			.map(|(role, actions)| (*role, actions.iter().copied().collect()))
			.collect();
		PermissionCatalog { grants }
	}
}

/// Builder for hand-assembled catalogs (tests, operator overrides)
#[derive(Debug, Default)]
pub struct CatalogBuilder {
	grants: BTreeMap<Role, Vec<Action>>,
}

impl CatalogBuilder {
	/// Grant `actions` to `role`. Repeated grants for the same role accumulate.
	pub fn grant(mut self, role: Role, actions: impl IntoIterator<Item = Action>) -> Self {
		self.grants.entry(role).or_default().extend(actions);
		self
	}

	/// Finish the catalog. Every listed role must end up with at least one
	/// action; duplicates collapse.
	pub fn build(self) -> FgResult<PermissionCatalog> {
		let mut grants = BTreeMap::new();
		for (role, actions) in self.grants {
			let set: ActionSet = actions.into_iter().collect();
			if set.is_empty() {
				return Err(Error::ConfigError(format!(
					"role '{}' has an empty permission set",
					role
				)));
			}
			grants.insert(role, set);
		}
		Ok(PermissionCatalog { grants })
	}
}


// vim: ts=4
