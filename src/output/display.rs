//! Console rendering of grouped results.

use std::fmt::Write;
use std::time::Duration;

use colored::{Color, Colorize};

use crate::aggregate::ResultGroup;
use crate::probe::ProbeOutcome;

/// Color for URLs of a given outcome, if any.
fn outcome_color(outcome: ProbeOutcome) -> Option<Color> {
    match outcome.status()? {
        200 => Some(Color::Green),
        300..=399 => Some(Color::Yellow),
        400..=499 => Some(Color::Red),
        500..=599 => Some(Color::Magenta),
        _ => None,
    }
}

/// Renders the grouped results followed by the scan duration.
///
/// Each group is a `[ HTTP-CODE = <outcome> ]` header, one line per URL and a
/// blank line. Groups appear in first-seen order.
pub fn render_results(groups: &ResultGroup, elapsed: Duration) -> String {
    let mut out = String::new();
    for (outcome, urls) in groups.iter() {
        let _ = writeln!(out, "[ HTTP-CODE = {outcome} ]");
        for url in urls {
            match outcome_color(outcome) {
                Some(color) => {
                    let _ = writeln!(out, "{}", url.color(color));
                }
                None => {
                    let _ = writeln!(out, "{url}");
                }
            }
        }
        out.push('\n');
    }
    let _ = write!(
        out,
        "[{}] Scan duration: {:.2} seconds",
        "INF".yellow(),
        elapsed.as_secs_f64()
    );
    out
}

/// Prints [`render_results`] to stdout.
pub fn print_results(groups: &ResultGroup, elapsed: Duration) {
    println!("{}", render_results(groups, elapsed));
}
