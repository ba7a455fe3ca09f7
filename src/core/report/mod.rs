//! Report generation for cost estimates
//!
//! Renders an adjusted estimate and its quick estimate to Markdown or HTML.
//! Both formats share one [`ReportContext`] so they always show the same figures.

pub mod formats;

use crate::core::models::{
    AdjustedCosts, CostRange, ExpenseBreakdown, QuestionnaireAnswers, QUESTIONS,
};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// One answered question, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRow {
    /// Question prompt
    pub question: &'static str,
    /// Chosen option label
    pub answer: &'static str,
}

/// One cost category row, formatted to whole currency units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRow {
    /// Category name
    pub label: &'static str,
    /// Lower bound
    pub low: String,
    /// Upper bound
    pub high: String,
}

impl RangeRow {
    fn new(label: &'static str, range: CostRange) -> Self {
        Self {
            label,
            low: format!("{:.0}", range.low()),
            high: format!("{:.0}", range.high()),
        }
    }
}

/// One quick-estimate line, formatted to whole currency units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountRow {
    /// Expense name
    pub label: &'static str,
    /// Monthly amount
    pub amount: String,
}

/// Data context for report generation
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Country display name
    pub country: &'a str,
    /// Answers the estimate was computed from
    pub answers: &'a QuestionnaireAnswers,
    /// Adjusted monthly ranges
    pub adjusted: &'a AdjustedCosts,
    /// Quick estimate for the same country
    pub quick: &'a ExpenseBreakdown,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        country: &'a str,
        answers: &'a QuestionnaireAnswers,
        adjusted: &'a AdjustedCosts,
        quick: &'a ExpenseBreakdown,
    ) -> Self {
        Self {
            country,
            answers,
            adjusted,
            quick,
        }
    }

    /// Answered questions in questionnaire order
    #[must_use]
    pub fn answer_rows(&self) -> Vec<AnswerRow> {
        QUESTIONS
            .iter()
            .filter_map(|q| {
                self.answers.label(q.id).map(|answer| AnswerRow {
                    question: q.title,
                    answer,
                })
            })
            .collect()
    }

    /// Per-category adjusted ranges, without the total
    #[must_use]
    pub fn range_rows(&self) -> Vec<RangeRow> {
        vec![
            RangeRow::new("Rent", self.adjusted.rent),
            RangeRow::new("Food", self.adjusted.food),
            RangeRow::new("Transport", self.adjusted.transport),
            RangeRow::new("Miscellaneous", self.adjusted.misc),
        ]
    }

    /// The adjusted total range
    #[must_use]
    pub fn total_row(&self) -> RangeRow {
        RangeRow::new("Total", self.adjusted.average_total)
    }

    /// Quick-estimate lines, without the total
    #[must_use]
    pub fn quick_rows(&self) -> Vec<AmountRow> {
        let q = self.quick;
        [
            ("Accommodation", q.accommodation),
            ("Food", q.food),
            ("Transport", q.transport),
            ("Leisure", q.leisure),
            ("Mobile", q.mobile),
            ("Miscellaneous", q.miscellaneous),
        ]
        .into_iter()
        .map(|(label, amount)| AmountRow {
            label,
            amount: format!("{amount:.0}"),
        })
        .collect()
    }

    /// The quick-estimate total
    #[must_use]
    pub fn quick_total(&self) -> String {
        format!("{:.0}", self.quick.total)
    }

    /// File stem for a report about this country, e.g. `estimate_united_kingdom`
    #[must_use]
    pub fn file_stem(&self) -> String {
        let mut stem = String::from("estimate");
        for word in self.country.split_whitespace() {
            let _ = write!(stem, "_{}", word.to_lowercase());
        }
        stem
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Render `ctx` in `format` into `dir`, returning the written path.
///
/// # Errors
/// Returns an error if the directory cannot be created or the report cannot be
/// rendered or written.
pub fn write_report(
    ctx: &ReportContext,
    format: ReportFormat,
    dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.{}", ctx.file_stem(), format.extension()));
    match format {
        ReportFormat::Markdown => MarkdownReporter::new().generate(ctx, &path)?,
        ReportFormat::Html => HtmlReporter::new().generate(ctx, &path)?,
    }
    Ok(path)
}
