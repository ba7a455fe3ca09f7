//! HTML report generator
//!
//! A single self-contained page with inline styles. Country names and labels
//! are HTML-escaped by the template engine.

use crate::core::get_version;
use crate::core::report::{AmountRow, AnswerRow, RangeRow, ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "estimate.html")]
struct HtmlTemplate<'a> {
    country: &'a str,
    version: &'a str,
    answers: Vec<AnswerRow>,
    ranges: Vec<RangeRow>,
    total: RangeRow,
    quick: Vec<AmountRow>,
    quick_total: String,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let template = HtmlTemplate {
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
    use crate::core::report::tests::fixture;

    #[test]
    fn test_html_contains_ranges() {
        let f = fixture();
        let ctx = ReportContext::new("Germany", &f.answers, &f.adjusted, &f.quick);
        let out = HtmlReporter::new().render(&ctx).unwrap();

        assert!(out.contains("<title>Monthly Cost Estimate: Germany</title>"));
        assert!(out.contains("<tr><td>Rent</td><td>420</td><td>840</td></tr>"));
        assert!(out.contains("<td>Total</td><td>631</td><td>1300</td>"));
        assert!(out.contains("<td>970</td>"));
    }

    #[test]
    fn test_html_escapes_country() {
        let f = fixture();
        let ctx = ReportContext::new("<script>", &f.answers, &f.adjusted, &f.quick);
        let out = HtmlReporter::new().render(&ctx).unwrap();
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }
}
