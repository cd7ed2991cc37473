//! Access policy evaluator
//!
//! Makes the two per-request decisions of the access-control layer:
//! - permission gating: does the actor's role grant the action at all
//! - country partitioning: which records the actor may reach
//!
//! Both checks must pass. Permission is evaluated first since it needs no
//! data; the country check needs the target record (or shapes the query).
//! Every decision is a pure function of its inputs and the injected catalog.

use std::sync::Arc;

use crate::catalog::PermissionCatalog;
use crate::filter::{Collection, ScopeFilter};
use crate::prelude::*;

/// Outcome of a permission gate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
	Allow,
	Deny(DenyReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenyReason {
	/// The role's catalog entry lacks the action
	InsufficientPermission,
	/// The role has no catalog entry (treated as having no permissions)
	UnknownRole,
}

impl Decision {
	pub fn is_allowed(&self) -> bool {
		matches!(self, Decision::Allow)
	}

	/// Convert into a result suitable for `?` in handlers
	pub fn into_result(self) -> FgResult<()> {
		match self {
			Decision::Allow => Ok(()),
			Decision::Deny(_) => Err(Error::PermissionDenied),
		}
	}
}

/// Stateless policy evaluator over an injected permission catalog
#[derive(Debug, Clone)]
pub struct AccessPolicy {
	catalog: Arc<PermissionCatalog>,
}

impl AccessPolicy {
	pub fn new(catalog: Arc<PermissionCatalog>) -> Self {
		Self { catalog }
	}

	pub fn catalog(&self) -> &PermissionCatalog {
		&self.catalog
	}

	/// Permission gate: may `actor` perform `action`?
	pub fn authorize(&self, actor: &Actor, action: Action) -> Decision {
		if !self.catalog.contains_role(actor.role) {
			error!(
				actor = %actor.id,
				role = %actor.role,
				action = %action,
				"Role missing from permission catalog, denying"
			);
			return Decision::Deny(DenyReason::UnknownRole);
		}

		if self.catalog.has_permission(actor.role, action) {
			debug!(actor = %actor.id, role = %actor.role, action = %action, "Permission granted");
			Decision::Allow
		} else {
			debug!(actor = %actor.id, role = %actor.role, action = %action, "Permission denied");
			Decision::Deny(DenyReason::InsufficientPermission)
		}
	}

	/// Permission gate that passes if the role holds at least one of
	/// `actions`. An empty list never passes.
	pub fn authorize_any(&self, actor: &Actor, actions: &[Action]) -> Decision {
		let mut reason = DenyReason::InsufficientPermission;
		for action in actions {
			match self.authorize(actor, *action) {
				Decision::Allow => return Decision::Allow,
				Decision::Deny(r) => reason = r,
			}
		}
		Decision::Deny(reason)
	}

	/// [`authorize`](Self::authorize) as a result: denial becomes
	/// `Error::PermissionDenied`.
	pub fn require(&self, actor: &Actor, action: Action) -> FgResult<()> {
		let decision = self.authorize(actor, action);
		if !decision.is_allowed() {
			warn!(actor = %actor.id, role = %actor.role, action = %action, "Action denied");
		}
		decision.into_result()
	}

	/// Actions granted to the actor, in catalog order
	pub fn permissions(&self, actor: &Actor) -> Vec<Action> {
		self.catalog.permissions_for(actor.role).iter().copied().collect()
	}

	/// Partition filter for queries issued on behalf of `actor`
	pub fn scope_filter(&self, actor: &Actor) -> ScopeFilter {
		if actor.role.is_unrestricted() {
			ScopeFilter::unrestricted()
		} else {
			ScopeFilter::country(actor.country)
		}
	}

	/// Partition filter for a specific collection. Collections that carry no
	/// country get an unrestricted filter.
	pub fn filter_for(&self, actor: &Actor, collection: Collection) -> ScopeFilter {
		if collection.is_partitioned() {
			self.scope_filter(actor)
		} else {
			ScopeFilter::unrestricted()
		}
	}

	/// Partition membership check for a record already fetched by id
	pub fn can_access_partition(&self, actor: &Actor, record_country: Country) -> bool {
		actor.role.is_unrestricted() || actor.country == record_country
	}

	/// [`can_access_partition`](Self::can_access_partition) as a result.
	///
	/// Out-of-country records are reported as `NotFound`, never as a
	/// permission error, so their existence is not disclosed.
	pub fn ensure_partition(&self, actor: &Actor, record_country: Country) -> FgResult<()> {
		if self.can_access_partition(actor, record_country) {
			Ok(())
		} else {
			debug!(
				actor = %actor.id,
				country = %actor.country,
				record_country = %record_country,
				"Record outside actor's country"
			);
			Err(Error::NotFound)
		}
	}

	/// Re-check a record fetched by id.
	///
	/// Missing and out-of-country records are indistinguishable to the
	/// caller: both are `NotFound`.
	pub fn guard_record<R: Partitioned>(&self, actor: &Actor, record: Option<R>) -> FgResult<R> {
		let record = record.ok_or(Error::NotFound)?;
		self.ensure_partition(actor, record.country())?;
		Ok(record)
	}

	/// Full check for acting on one fetched record: permission first, then
	/// country.
	pub fn check(&self, actor: &Actor, action: Action, record: &impl Partitioned) -> FgResult<()> {
		self.require(actor, action)?;
		self.ensure_partition(actor, record.country())
	}
}

impl Default for AccessPolicy {
	fn default() -> Self {
		Self::new(Arc::new(PermissionCatalog::default()))
	}
}


// vim: ts=4
