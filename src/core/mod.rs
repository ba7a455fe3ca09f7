//! Core module for the estimation engine and its collaborators

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod estimator;
pub mod models;
pub mod packages;
pub mod report;
pub mod session;
pub mod validation;

/// Returns the current version of the `study_cost` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #[test]
    fn version_is_not_empty() {
        assert!(!super::get_version().trim().is_empty());
    }
}
