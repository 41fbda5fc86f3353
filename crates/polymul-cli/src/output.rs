//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

/// Format the product coefficient line: space-separated, index 0 first.
///
/// The trailing space before the newline is part of the batch output
/// format and is preserved.
#[must_use]
pub fn format_coefficient_line(coeffs: &[i64]) -> String {
    let mut line = String::new();
    for c in coeffs {
        line.push_str(&c.to_string());
        line.push(' ');
    }
    line
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Write the degree line and coefficient line to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, degree: usize, coeffs: &[i64]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{degree}")?;
    writeln!(file, "{}", format_coefficient_line(coeffs))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficient_line_trailing_space() {
        assert_eq!(format_coefficient_line(&[4, 13, 22, 15]), "4 13 22 15 ");
    }

    #[test]
    fn coefficient_line_negative_values() {
        assert_eq!(format_coefficient_line(&[-1, 0, 1]), "-1 0 1 ");
    }

    #[test]
    fn coefficient_line_single_value() {
        assert_eq!(format_coefficient_line(&[42]), "42 ");
    }

    #[test]
    fn format_duration_micro() {
        let s = format_duration(Duration::from_nanos(500));
        assert!(s.contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        let s = format_duration(Duration::from_millis(42));
        assert!(s.contains("ms"));
    }

    #[test]
    fn format_duration_seconds() {
        let s = format_duration(Duration::from_secs_f64(3.14));
        assert!(s.contains("s"));
    }

    #[test]
    fn format_duration_minutes() {
        let s = format_duration(Duration::from_secs(90));
        assert!(s.contains("m"));
    }
}
