//! Minimal foodgate server configured from the environment
//!
//! - `FOODGATE_LISTEN` - listen address (default `127.0.0.1:8080`)
//! - `FOODGATE_JWT_SECRET` - HS256 secret for access tokens (required)
//! - `FOODGATE_CATALOG` - optional JSON permission catalog
//! - `RUST_LOG` - tracing filter

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	match foodgate::AppBuilder::from_env().run().await {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			tracing::error!("foodgate exited: {}", err);
			ExitCode::FAILURE
		}
	}
}

// vim: ts=4
