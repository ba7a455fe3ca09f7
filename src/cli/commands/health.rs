//! Health command handler

use super::backend;
use study_cost::config::Config;
use study_cost::{error, verbose};

/// Run the health command.
pub fn run(config: &Config) -> Result<(), String> {
    let client = backend(config)?;
    let body = client.health().map_err(|e| {
        error!("Health check failed: {e}");
        format!("✗ Backend unreachable at {}: {e}", config.api.base_url)
    })?;
    verbose!("{body}");
    println!("✓ Backend is up at {}", config.api.base_url);
    Ok(())
}
