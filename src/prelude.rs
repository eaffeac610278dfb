// Diagnostics.
pub use miette::{Context, IntoDiagnostic, miette};

// Records cross the catalog file and the --json output, so most types want these.
pub use serde::{Deserialize, Serialize};

// Logging.
pub use tracing::{debug, info, warn};

/// The standard result for everything outside the pricing core.
/// The core itself never fails, it degrades to zero cost instead.
pub type AppResult<T = ()> = miette::Result<T>;
