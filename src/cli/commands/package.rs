//! Package command handler

use super::{backend, collect_contact, save_download, session_store};
use crate::args::{ContactArgs, PackageSubcommand};
use std::path::Path;
use study_cost::api::{pdf_file_name, CustomPackageReportRequest, LeadIntent, UserDetails};
use study_cost::config::Config;
use study_cost::error;
use study_cost::packages::{PackageSelection, PACKAGES};

/// Dispatch package subcommands
pub fn run(subcommand: PackageSubcommand, config: &Config) -> Result<(), String> {
    match subcommand {
        PackageSubcommand::List => {
            list();
            Ok(())
        }
        PackageSubcommand::Quote { ids } => quote(&ids, config),
        PackageSubcommand::Download { ids, contact } => download(&ids, &contact, config),
    }
}

fn list() {
    println!("\n=== Service Packages ===\n");
    for pkg in &PACKAGES {
        let tag = if pkg.popular { "  [popular]" } else { "" };
        println!("  {:<24} {}{tag}", pkg.id, pkg.name);
        println!("  {:<24} {}", "", pkg.description);
    }
}

fn quote(ids: &[String], config: &Config) -> Result<(), String> {
    let selection = PackageSelection::from_ids(ids).map_err(|e| format!("✗ {e}"))?;
    let client = backend(config)?;
    let quote = client.quote_packages(&selection).map_err(|e| {
        error!("Package quote failed: {e}");
        format!("✗ Failed to calculate cost: {e}")
    })?;

    let store = session_store(config);
    let mut session = store
        .load()
        .map_err(|e| format!("✗ Failed to read session {}: {e}", store.path().display()))?;
    session.selected_packages = selection.ids().into_iter().map(String::from).collect();
    store
        .save(&session)
        .map_err(|e| format!("✗ Failed to save session {}: {e}", store.path().display()))?;

    for pkg in selection.packages() {
        println!("  • {}", pkg.name);
    }
    println!("✓ Total cost: {:.0}", quote.total_cost);
    Ok(())
}

fn download(ids: &[String], contact: &ContactArgs, config: &Config) -> Result<(), String> {
    let selection = if ids.is_empty() {
        let session = session_store(config)
            .load()
            .map_err(|e| format!("✗ Failed to read session: {e}"))?;
        PackageSelection::from_ids(session.selected_packages.as_slice())
    } else {
        PackageSelection::from_ids(ids)
    }
    .map_err(|e| format!("✗ {e}"))?;

    let form = collect_contact(contact)?;
    let client = backend(config)?;
    let details = UserDetails {
        name: form.name,
        email: form.email,
        phone: form.phone,
        intent: Some(LeadIntent::ViewedPackageDetails),
    };

    client.save_user_details(&details).map_err(|e| {
        error!("Saving package contact failed: {e}");
        format!("✗ Error downloading report: {e}")
    })?;
    let bytes = client
        .download_custom_package_report(&CustomPackageReportRequest::new(&details, &selection))
        .map_err(|e| {
            error!("Custom package download failed: {e}");
            format!("✗ Error downloading report: {e}")
        })?;

    let path = save_download(
        Path::new(&config.paths.reports_dir),
        &pdf_file_name("Custom_Package", &details.name),
        &bytes,
    )?;
    println!("✓ Package details downloaded: {}", path.display());
    Ok(())
}
