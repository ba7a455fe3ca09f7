//! Markdown report generator
//!
//! Plain tables that read well in a terminal pager and render on GitHub.

use crate::core::get_version;
use crate::core::report::{AmountRow, AnswerRow, RangeRow, ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "estimate.md")]
struct MarkdownTemplate<'a> {
    country: &'a str,
    version: &'a str,
    answers: Vec<AnswerRow>,
    ranges: Vec<RangeRow>,
    total: RangeRow,
    quick: Vec<AmountRow>,
    quick_total: String,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let template = MarkdownTemplate {
            country: ctx.country,
            version: get_version(),
            answers: ctx.answer_rows(),
            ranges: ctx.range_rows(),
            total: ctx.total_row(),
            quick: ctx.quick_rows(),
            quick_total: ctx.quick_total(),
        };
        Ok(template.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::QuestionnaireAnswers;
    use crate::core::report::tests::fixture;

    #[test]
    fn test_markdown_contains_ranges() {
        let f = fixture();
        let ctx = ReportContext::new("Germany", &f.answers, &f.adjusted, &f.quick);
        let out = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(out.starts_with("# Monthly Cost Estimate: Germany"));
        assert!(out.contains("| Rent | 420 | 840 |"));
        assert!(out.contains("| Food | 90 | 180 |"));
        assert!(out.contains("| **Total** | **631** | **1300** |"));
        assert!(out.contains("| Leisure | 30 |"));
        assert!(out.contains("| Bicycle |"));
    }

    #[test]
    fn test_markdown_without_answers() {
        let f = fixture();
        let empty = QuestionnaireAnswers::default();
        let ctx = ReportContext::new("Germany", &empty, &f.adjusted, &f.quick);
        let out = MarkdownReporter::new().render(&ctx).unwrap();
        assert!(out.contains("No questions answered"));
    }
}
