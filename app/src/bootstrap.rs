//! Process bootstrap: environment loading and tracing setup.

use tracing_subscriber::EnvFilter;

/// Load a `.env` file if one exists. A missing file is not an error.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Initialize the global tracing subscriber. `RUST_LOG` controls the
/// filter; defaults to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
