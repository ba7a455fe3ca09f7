//! Lead capture handlers: estimate PDF download and callback requests

use super::estimate::compute;
use super::{backend, collect_contact, save_download};
use crate::args::ContactArgs;
use std::path::Path;
use study_cost::api::{pdf_file_name, CostReportRequest, LeadIntent, UserDetails};
use study_cost::config::Config;
use study_cost::validation::LeadForm;
use study_cost::{error, info, warn};

fn user_details(form: LeadForm, intent: LeadIntent) -> UserDetails {
    UserDetails {
        name: form.name,
        email: form.email,
        phone: form.phone,
        intent: Some(intent),
    }
}

/// Run the lead command.
///
/// Saving the contact is best-effort; the PDF download still runs if it fails.
pub fn run(
    contact: &ContactArgs,
    country: Option<&str>,
    check_only: bool,
    config: &Config,
) -> Result<(), String> {
    let form = collect_contact(contact)?;
    if check_only {
        println!("✓ Contact details are valid");
        return Ok(());
    }

    let client = backend(config)?;
    let details = user_details(form, LeadIntent::CostCalculatorReport);
    match client.save_user_details(&details) {
        Ok(()) => info!("User details saved for {}", details.email),
        Err(e) => warn!("Could not save user details, continuing: {e}"),
    }

    let view = compute(country, config);
    let request = CostReportRequest {
        name: details.name.clone(),
        email: details.email.clone(),
        phone: details.phone.clone(),
        expenses: view.quick,
        selected_country: view.country,
        answers: view.answers,
    };
    let bytes = client.download_cost_report(&request).map_err(|e| {
        error!("Cost report download failed: {e}");
        format!("✗ Error downloading report: {e}")
    })?;

    let path = save_download(
        Path::new(&config.paths.reports_dir),
        &pdf_file_name("Cost_Report", &details.name),
        &bytes,
    )?;
    println!("✓ Report downloaded: {}", path.display());
    Ok(())
}

/// Run the callback command. Stops at the first failed request.
pub fn callback(contact: &ContactArgs, config: &Config) -> Result<(), String> {
    let form = collect_contact(contact)?;
    let client = backend(config)?;
    let details = user_details(form, LeadIntent::RequestedCallback);

    client.save_user_details(&details).map_err(|e| {
        error!("Saving callback contact failed: {e}");
        format!("✗ Failed to submit request: {e}")
    })?;
    client
        .request_callback(&details.name, &details.phone)
        .map_err(|e| {
            error!("Callback request failed: {e}");
            format!("✗ Failed to submit request: {e}")
        })?;

    println!("✓ Thank you! Our team will call you back shortly.");
    Ok(())
}
