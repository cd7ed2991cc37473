//! App builder - constructs and runs the foodgate application

use std::{path::Path, sync::Arc};

use crate::prelude::*;
use crate::routes;
use foodgate_core::catalog::PermissionCatalog;
use foodgate_core::policy::AccessPolicy;
use foodgate_core::token::JwtActorResolver;
use foodgate_types::extract::ActorResolver;

pub use foodgate_core::app::{App, AppBuilderOpts, AppState, VERSION};

pub struct AppBuilder {
	opts: AppBuilderOpts,
	catalog: Option<PermissionCatalog>,
	resolver: Option<Arc<dyn ActorResolver>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		Self::with_opts(AppBuilderOpts::default())
	}

	/// Builder seeded from `FOODGATE_*` environment variables
	pub fn from_env() -> Self {
		Self::with_opts(AppBuilderOpts::from_env())
	}

	fn with_opts(opts: AppBuilderOpts) -> Self {
		let _ = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.try_init();
		AppBuilder { opts, catalog: None, resolver: None }
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}
	pub fn jwt_secret(&mut self, jwt_secret: impl Into<Box<str>>) -> &mut Self {
		self.opts.jwt_secret = Some(jwt_secret.into());
		self
	}
	pub fn catalog_file(&mut self, catalog_file: impl Into<Box<Path>>) -> &mut Self {
		self.opts.catalog_file = Some(catalog_file.into());
		self
	}

	// Collaborators
	/// Use `catalog` instead of the configured or built-in one
	pub fn catalog(&mut self, catalog: PermissionCatalog) -> &mut Self {
		self.catalog = Some(catalog);
		self
	}
	/// Use `resolver` instead of a JWT resolver built from the secret
	pub fn resolver(&mut self, resolver: Arc<dyn ActorResolver>) -> &mut Self {
		self.resolver = Some(resolver);
		self
	}

	/// Assemble the shared application state
	pub fn build(self) -> FgResult<App> {
		let catalog = match self.catalog {
			Some(catalog) => {
				let missing = catalog.missing_roles();
				if !missing.is_empty() {
					warn!(missing = ?missing, "Injected catalog lacks roles, they will be denied");
				}
				catalog
			}
			None => self.opts.load_catalog()?,
		};

		let resolver: Arc<dyn ActorResolver> = match self.resolver {
			Some(resolver) => resolver,
			None => {
				let Some(secret) = &self.opts.jwt_secret else {
					error!("FATAL: No JWT secret configured");
					return Err(Error::ConfigError("No JWT secret configured".to_string()));
				};
				Arc::new(JwtActorResolver::new(secret.as_bytes())?)
			}
		};

		for role in catalog.roles() {
			debug!(role = %role, actions = ?catalog.permissions_for(role), "Catalog entry");
		}

		Ok(Arc::new(AppState {
			policy: AccessPolicy::new(Arc::new(catalog)),
			resolver,
			opts: self.opts,
		}))
	}

	pub async fn run(self) -> FgResult<()> {
		info!("foodgate V{}", VERSION);

		let app = self.build()?;
		let listen = app.opts.listen.clone();
		let router = routes::init(app);

		let listener = tokio::net::TcpListener::bind(&*listen).await?;
		info!("Listening on {}", listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
