//! Grade command handler
//!
//! Converts a grade to the German scale and optionally downloads a certificate.

use super::{backend, collect_contact, save_download};
use crate::args::ContactArgs;
use std::path::Path;
use study_cost::api::{
    pdf_file_name, GradeCertificateRequest, GradeConversion, GradeRequest, UserDetails,
};
use study_cost::config::Config;
use study_cost::validation::GradeInputs;
use study_cost::{error, info, verbose, warn};

/// Arguments of the grade command
pub struct GradeArgs<'a> {
    /// Best achievable grade, as typed
    pub best: &'a str,
    /// Minimum passing grade, as typed
    pub min_passing: &'a str,
    /// The student's grade, as typed
    pub yours: &'a str,
    /// Download a certificate after converting
    pub certificate: bool,
    /// Contact details for the certificate
    pub contact: &'a ContactArgs,
}

/// Run the grade command.
pub fn run(args: &GradeArgs, config: &Config) -> Result<(), String> {
    let inputs = GradeInputs::parse(args.best, args.min_passing, args.yours)
        .map_err(|e| format!("✗ {e}"))?;
    let scale = inputs.scale().map_err(|e| format!("✗ {e}"))?;
    verbose!("Grades read on the {scale:?} scale");

    let client = backend(config)?;
    let request = GradeRequest {
        best_grade: inputs.best_grade,
        min_passing_grade: inputs.min_passing_grade,
        your_grade: inputs.your_grade,
    };
    let german_grade = match client.convert_grade(&request) {
        Ok(GradeConversion::Grade(grade)) => grade,
        Ok(GradeConversion::Rejected(reason)) => return Err(format!("✗ {reason}")),
        Err(e) => {
            error!("Grade conversion failed: {e}");
            return Err("✗ Error calculating grade. Please try again.".to_string());
        }
    };
    println!("✓ German grade: {german_grade}");

    if !args.certificate {
        return Ok(());
    }

    let form = collect_contact(args.contact)?;
    let details = UserDetails {
        name: form.name,
        email: form.email,
        phone: form.phone,
        intent: None,
    };
    match client.save_grade_user_details(&details) {
        Ok(()) => info!("Grade lead saved for {}", details.email),
        Err(e) => warn!("Could not save user details, continuing: {e}"),
    }

    let bytes = client
        .download_grade_certificate(&GradeCertificateRequest {
            name: &details.name,
            email: &details.email,
            phone: &details.phone,
            best_grade: inputs.best_grade,
            min_passing_grade: inputs.min_passing_grade,
            your_grade: inputs.your_grade,
            german_grade: &german_grade,
        })
        .map_err(|e| {
            error!("Grade certificate download failed: {e}");
            format!("✗ Error generating certificate: {e}")
        })?;

    let path = save_download(
        Path::new(&config.paths.reports_dir),
        &pdf_file_name("Grade_Certificate", &details.name),
        &bytes,
    )?;
    println!("✓ Certificate downloaded: {}", path.display());
    Ok(())
}
