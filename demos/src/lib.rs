//! Grover Demo Suite
//!
//! Console-facing helpers for the `demo-grover` binary: styled section
//! printing and a text histogram renderer standing in for an external
//! plotting collaborator.

pub mod cases;

use console::style;
use grover_hal::Counts;

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
}

/// Print a section divider.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("── {title} ──")).blue().bold());
}

/// Print a labeled result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {}: {}", style(label).dim(), style(value).bold());
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), style(message).green());
}

/// Print an informational message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue().bold(), message);
}

/// Render a measurement histogram as text bars, most frequent first.
///
/// `highlight` marks the expected bitstrings so they stand out in the
/// listing.
pub fn render_histogram(counts: &Counts, highlight: &[String]) -> String {
    const BAR_WIDTH: f64 = 40.0;

    let entries = counts.sorted_by_count();
    let max = entries.first().map_or(1, |(_, c)| (*c).max(1));
    let total = counts.total().max(1);

    let mut out = String::new();
    for (bits, count) in entries {
        let bar_len = ((count as f64 / max as f64) * BAR_WIDTH).ceil() as usize;
        let bar = "█".repeat(bar_len);
        let marker = if highlight.iter().any(|h| h == bits) {
            "*"
        } else {
            " "
        };
        out.push_str(&format!(
            "  {marker}{bits}  {bar} {count} ({:.1}%)\n",
            count as f64 / total as f64 * 100.0
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_orders_and_marks() {
        let mut counts = Counts::new();
        counts.insert("01", 900);
        counts.insert("10", 60);
        counts.insert("00", 40);

        let text = render_histogram(&counts, &["01".to_string()]);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("*01"));
        assert!(lines[0].contains("900"));
        assert!(lines[2].contains("00"));
    }
}
