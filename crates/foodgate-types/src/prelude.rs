pub use crate::actor::Actor;
pub use crate::error::{Error, FgResult};
pub use crate::types::{Action, Country, Partitioned, Role};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
