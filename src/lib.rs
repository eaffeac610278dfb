//! Compare what speech-to-text, LLM and object storage providers would charge,
//! and total a cart of chosen options.
//!
//! The pricing core is in [`calculation`] and [`cart`]. Everything in there is pure
//! and infallible. Odd input degrades to a zero cost or a no-op. The rest of the
//! crate is the command-line front end that feeds it.

pub mod app;
pub mod calculation;
pub mod cart;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod prelude;
pub mod router;
pub mod types;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize tracing/logging.
///
/// Logs go to stderr so stdout stays clean for piping the CSV or JSON output.
/// `RUST_LOG` overrides the default `warn` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
