//! Diagnostic printing for hmsubst errors.

use std::io;
use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::error::ParseError;

type ReportSpan<'a> = (&'a str, Range<usize>);

fn build_report<'a>(name: &'a str, error: &ParseError, color: bool) -> Report<'a, ReportSpan<'a>> {
    let span = error.span();
    let message = error.to_string();

    let mut label = Label::new((name, span.start..span.end)).with_message(&message);
    if color {
        label = label.with_color(Color::Red);
    }

    let mut report = Report::build(ReportKind::Error, (name, span.start..span.end))
        .with_config(
            Config::default()
                .with_color(color)
                .with_index_type(IndexType::Byte),
        )
        .with_message(&message)
        .with_label(label);

    if let Some(help) = error.help() {
        report.add_help(help);
    }

    report.finish()
}

/// Print a parse error against its source text, with colors, to stderr.
pub fn print_error(name: &str, source: &str, error: &ParseError) -> io::Result<()> {
    build_report(name, error, true).eprint((name, Source::from(source)))
}

/// Render a parse error against its source text without colors.
pub fn render_error(name: &str, source: &str, error: &ParseError) -> String {
    let mut out = Vec::new();
    match build_report(name, error, false).write((name, Source::from(source)), &mut out) {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        Err(_) => error.to_string(),
    }
}
