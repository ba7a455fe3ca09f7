//! CLI command handlers for `StudyCost`.
//!
//! Each command is implemented in its own submodule. Handlers return
//! `Err` with a user-facing `✗ ...` message; `main` prints it and exits
//! non-zero.

pub mod config;
pub mod estimate;
pub mod grade;
pub mod health;
pub mod lead;
pub mod package;
pub mod questionnaire;
pub mod report;

use crate::args::ContactArgs;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use study_cost::api::BackendClient;
use study_cost::config::Config;
use study_cost::data::CostTable;
use study_cost::error::EstimateError;
use study_cost::session::SessionStore;
use study_cost::validation::LeadForm;
use study_cost::{error, info};

/// Load the cost table from `paths.data_file`, or the bundled copy when unset
pub fn cost_table(config: &Config) -> Result<CostTable, EstimateError> {
    let path = (!config.paths.data_file.is_empty()).then(|| Path::new(&config.paths.data_file));
    CostTable::load_or_bundled(path)
}

/// Session store at `paths.session_file`
pub fn session_store(config: &Config) -> SessionStore {
    SessionStore::new(&config.paths.session_file)
}

/// Backend client for `api.base_url`
pub fn backend(config: &Config) -> Result<BackendClient, String> {
    BackendClient::new(&config.api.base_url).map_err(|e| {
        error!("Invalid backend URL '{}': {e}", config.api.base_url);
        format!("✗ {e}")
    })
}

/// Read one trimmed line from stdin after printing `label`
pub fn prompt(label: &str) -> Result<String, String> {
    print!("{label}: ");
    io::stdout().flush().ok();
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| format!("✗ Failed to read input: {e}"))?;
    Ok(line.trim().to_string())
}

/// Gather contact details from flags, prompting for missing ones, and validate
/// every field. Prints each failing field.
pub fn collect_contact(args: &ContactArgs) -> Result<LeadForm, String> {
    let field = |value: &Option<String>, label: &str| match value {
        Some(v) => Ok(v.clone()),
        None => prompt(label),
    };
    let form = LeadForm {
        name: field(&args.name, "Full name")?,
        email: field(&args.email, "Email")?,
        phone: field(&args.phone, "Phone (+91)")?,
    };
    form.validate().map_err(|errors| {
        for (name, err) in errors.iter() {
            eprintln!("  {name}: {err}");
        }
        "✗ Please correct the contact details above".to_string()
    })
}

/// Write downloaded bytes into `dir`, creating it if needed
pub fn save_download(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, String> {
    fs::create_dir_all(dir)
        .map_err(|e| format!("✗ Failed to create directory {}: {e}", dir.display()))?;
    let path = dir.join(file_name);
    fs::write(&path, bytes).map_err(|e| format!("✗ Failed to write {}: {e}", path.display()))?;
    info!("Saved {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}
