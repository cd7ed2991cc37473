pub use foodgate_core::app::App;
pub use foodgate_types::actor::Actor;
pub use foodgate_types::error::{Error, FgResult};
pub use foodgate_types::types::{Action, Country, Role};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
