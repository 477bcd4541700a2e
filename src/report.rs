use std::{
    fmt::Write as _,
    io::{self, Write as _},
};

use crate::{
    domain::{BatchReport, Progress},
    pipeline::ProgressObserver,
};

const ELLIPSIS: &str = "...";

/// Rewrites a single progress line on stderr.
pub struct ConsoleProgress;

impl ProgressObserver for ConsoleProgress {
    fn on_progress(&self, progress: Progress) {
        if let Err(err) = write_progress(progress) {
            tracing::debug!(target: "pipeline", error = %err, "failed to draw progress line");
        }
    }
}

fn write_progress(progress: Progress) -> io::Result<()> {
    let mut stderr = io::stderr().lock();
    write!(stderr, "\r{}", progress_line(progress))?;
    if progress.completed == progress.total {
        writeln!(stderr)?;
    }
    stderr.flush()
}

pub fn progress_line(progress: Progress) -> String {
    format!(
        "Processing: {}% ({}/{})",
        progress.rounded_percent(),
        progress.completed,
        progress.total
    )
}

pub fn render_report(report: &BatchReport, preview_chars: usize) -> String {
    let mut out = String::new();
    out.push_str(&render_summary(report));
    out.push('\n');
    out.push_str(&render_table(report, preview_chars));
    out
}

pub fn render_summary(report: &BatchReport) -> String {
    let summary = &report.summary;
    let mut out = String::from("Analysis Complete\n");
    let _ = writeln!(out, "  Total Messages: {}", summary.total);
    let _ = writeln!(
        out,
        "  Spam Detected:  {} ({:.1}%)",
        summary.spam_count,
        summary.spam_percent()
    );
    let _ = writeln!(
        out,
        "  Safe Messages:  {} ({:.1}%)",
        summary.safe_count,
        summary.safe_percent()
    );
    if summary.error_count > 0 {
        let _ = writeln!(
            out,
            "  Errors:         {} (counted as safe)",
            summary.error_count
        );
    }
    out
}

pub fn render_table(report: &BatchReport, preview_chars: usize) -> String {
    let rows: Vec<(String, String, String)> = report
        .results
        .iter()
        .enumerate()
        .map(|(index, result)| {
            let marker = if result.is_spam { "[x]" } else { "[ok]" };
            (
                (index + 1).to_string(),
                preview(&result.message, preview_chars),
                format!("{marker} {}", result.prediction),
            )
        })
        .collect();

    let index_width = column_width("#", rows.iter().map(|r| &r.0));
    let message_width = column_width("Message", rows.iter().map(|r| &r.1));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<index_width$}  {:<message_width$}  Prediction",
        "#", "Message"
    );
    for (index, message, prediction) in &rows {
        let padding = message_width.saturating_sub(message.chars().count());
        let _ = writeln!(
            out,
            "{index:<index_width$}  {message}{:padding$}  {prediction}",
            ""
        );
    }
    out
}

/// Cuts on characters, not bytes, and marks the cut with an ellipsis.
pub fn preview(message: &str, max_chars: usize) -> String {
    let single_line = message.replace(['\r', '\n'], " ");
    if single_line.chars().count() <= max_chars {
        return single_line;
    }
    let mut cut: String = single_line.chars().take(max_chars).collect();
    cut.push_str(ELLIPSIS);
    cut
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a String>) -> usize {
    cells
        .map(|cell| cell.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}
