//! Estimate command handler

use super::{cost_table, session_store};
use serde::Serialize;
use study_cost::config::Config;
use study_cost::estimator::{estimate_or_fallback, quick_estimate_or_fallback};
use study_cost::models::{AdjustedCosts, CostRange, ExpenseBreakdown, QuestionnaireAnswers};
use study_cost::session::Session;
use study_cost::{debug, warn};

/// Everything the estimate and report commands show for one country
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateView {
    /// Country display name
    pub country: String,
    /// Answers used
    pub answers: QuestionnaireAnswers,
    /// Personalised ranges
    pub adjusted: AdjustedCosts,
    /// Quick estimate
    pub quick: ExpenseBreakdown,
}

/// Compute both estimates for `country` (or the stored one) with the stored answers
pub fn compute(country: Option<&str>, config: &Config) -> EstimateView {
    let store = session_store(config);
    let session = store.load().unwrap_or_else(|e| {
        warn!("Ignoring unreadable session {}: {e}", store.path().display());
        Session::default()
    });
    let country = country.unwrap_or_else(|| session.country()).to_string();
    let answers = session.answers();

    let table = cost_table(config);
    if let Err(e) = &table {
        debug!("Cost table failed to load: {e}");
    }
    let source = table.as_ref();

    EstimateView {
        adjusted: estimate_or_fallback(source, &country, &answers),
        quick: quick_estimate_or_fallback(source, &country),
        country,
        answers,
    }
}

/// Run the estimate command.
pub fn run(country: Option<&str>, quick: bool, json: bool, config: &Config) -> Result<(), String> {
    let view = compute(country, config);

    if json {
        let out = if quick {
            serde_json::to_string_pretty(&view.quick)
        } else {
            serde_json::to_string_pretty(&view)
        };
        println!("{}", out.map_err(|e| format!("✗ Failed to encode estimate: {e}"))?);
        return Ok(());
    }

    println!("\n=== Monthly Cost Estimate: {} ===\n", view.country);
    if !quick {
        print_ranges(&view.adjusted);
        println!();
    }
    print_quick(&view.quick);
    Ok(())
}

fn print_ranges(adjusted: &AdjustedCosts) {
    let row = |label: &str, range: CostRange| {
        println!("  {label:<15} {:>7.0} - {:<7.0}", range.low(), range.high());
    };
    println!("Based on your answers:");
    row("Rent", adjusted.rent);
    row("Food", adjusted.food);
    row("Transport", adjusted.transport);
    row("Miscellaneous", adjusted.misc);
    row("Total", adjusted.average_total);
}

fn print_quick(quick: &ExpenseBreakdown) {
    let row = |label: &str, amount: f64| println!("  {label:<15} {amount:>7.0}");
    println!("Quick estimate (lowest typical costs):");
    row("Accommodation", quick.accommodation);
    row("Food", quick.food);
    row("Transport", quick.transport);
    row("Leisure", quick.leisure);
    row("Mobile", quick.mobile);
    row("Miscellaneous", quick.miscellaneous);
    row("Total", quick.total);
}
