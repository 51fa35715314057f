//! Rendering of syntax errors against the offending line.

use std::ops::Range;

use ariadne::{Config, Label, Report, ReportKind, Source};
use lispy_syntax::{ParseError, Span};

/// Render `err` as a labelled snippet of `source`.
///
/// Delimiter errors get a second label pointing at the opening delimiter.
pub fn render_parse_error(source: &str, err: &ParseError, color: bool) -> String {
    let primary = visible(err.span(), source);

    let mut report = Report::<Range<usize>>::build(ReportKind::Error, (), primary.start)
        .with_config(Config::default().with_color(color))
        .with_message(err.to_string())
        .with_label(Label::new(primary).with_message(err.label()));
    if let Some(open) = err.opened_at() {
        report = report.with_label(Label::new(open.range()).with_message("opened here"));
    }

    let mut out = Vec::new();
    match report.finish().write(Source::from(source), &mut out) {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        Err(io_err) => {
            tracing::warn!(error = %io_err, "failed to render diagnostic");
            format!("Error: {err}")
        }
    }
}

/// Widen an empty span (end of input) to cover the last character, so
/// the label has something to point at.
fn visible(span: Span, source: &str) -> Range<usize> {
    if !span.is_empty() {
        return span.range();
    }
    match source
        .get(..span.start)
        .and_then(|before| before.char_indices().next_back())
    {
        Some((start, _)) => start..span.start,
        None => span.range(),
    }
}
