//! App state type

use std::{path::Path, sync::Arc};

use crate::catalog::PermissionCatalog;
use crate::policy::AccessPolicy;
use crate::prelude::*;
use foodgate_types::extract::ActorResolver;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub policy: AccessPolicy,
	pub resolver: Arc<dyn ActorResolver>,
	pub opts: AppBuilderOpts,
}

pub type App = Arc<AppState>;

#[derive(Clone)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
	pub jwt_secret: Option<Box<str>>,
	/// Optional JSON permission catalog replacing the built-in table
	pub catalog_file: Option<Box<Path>>,
}

impl AppBuilderOpts {
	/// Read options from `FOODGATE_*` environment variables, falling back to
	/// defaults for anything unset.
	pub fn from_env() -> Self {
		let mut opts = Self::default();
		if let Ok(listen) = std::env::var("FOODGATE_LISTEN") {
			opts.listen = listen.into();
		}
		if let Ok(secret) = std::env::var("FOODGATE_JWT_SECRET") {
			opts.jwt_secret = Some(secret.into());
		}
		if let Ok(path) = std::env::var("FOODGATE_CATALOG") {
			opts.catalog_file = Some(Path::new(&path).into());
		}
		opts
	}

	/// Load the configured catalog and verify it covers every role.
	pub fn load_catalog(&self) -> FgResult<PermissionCatalog> {
		let catalog = match &self.catalog_file {
			Some(path) => PermissionCatalog::load(path)?,
			None => PermissionCatalog::default(),
		};

		let missing = catalog.missing_roles();
		if !missing.is_empty() {
			error!(missing = ?missing, "Permission catalog does not cover every role");
			return Err(Error::ConfigError(format!(
				"permission catalog has no entry for: {:?}",
				missing
			)));
		}
		if !catalog.covers_all(Role::Admin) {
			warn!("Admin permissions are not a superset of every other role");
		}
		Ok(catalog)
	}
}

impl Default for AppBuilderOpts {
	fn default() -> Self {
		Self { listen: "127.0.0.1:8080".into(), jwt_secret: None, catalog_file: None }
	}
}

impl std::fmt::Debug for AppBuilderOpts {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AppBuilderOpts")
			.field("listen", &self.listen)
			.field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
			.field("catalog_file", &self.catalog_file)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_catalog_loads() {
		let catalog = AppBuilderOpts::default().load_catalog().unwrap();
		assert_eq!(catalog, PermissionCatalog::default());
	}

	#[test]
	fn test_incomplete_catalog_file_rejected() {
		let path = std::env::temp_dir().join(format!("foodgate-catalog-{}.json", std::process::id()));
		std::fs::write(&path, r#"{"admin": ["view_restaurants"]}"#).unwrap();

		let opts = AppBuilderOpts { catalog_file: Some(path.clone().into()), ..Default::default() };
		let res = opts.load_catalog();
		let _ = std::fs::remove_file(&path);
		assert!(matches!(res, Err(Error::ConfigError(_))));
	}

	#[test]
	fn test_missing_catalog_file_is_io_error() {
		let opts = AppBuilderOpts {
			catalog_file: Some(Path::new("/nonexistent/foodgate/catalog.json").into()),
			..Default::default()
		};
		assert!(matches!(opts.load_catalog(), Err(Error::Io(_))));
	}

	#[test]
	fn test_debug_redacts_secret() {
		let opts = AppBuilderOpts { jwt_secret: Some("hunter2".into()), ..Default::default() };
		let dbg = format!("{:?}", opts);
		assert!(!dbg.contains("hunter2"));
	}
}

// vim: ts=4
