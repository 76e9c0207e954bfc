// crates/cli/src/presentation.rs
use line_count_core::options::OutputStyle;
use line_count_core::stats::FileReport;

/// Width of the numeric columns in the aligned layout.
const ALIGNED_WIDTH: usize = 15;
/// Minimum digits in the zero-padded layout, grouped in threes.
const ZEROS_DIGITS: usize = 12;

/// Print one result line for `report` on standard output.
pub fn print_report(report: &FileReport, style: OutputStyle) {
    println!("{}", render(report, style));
}

/// Render one result line for `report` in the selected layout.
#[must_use]
pub fn render(report: &FileReport, style: OutputStyle) -> String {
    let lines = report.counts.lines;
    let chars = report.counts.chars;
    match style {
        OutputStyle::Sentence => format!(
            "{} has {} characters in {} lines.",
            report.name,
            group_digits(chars),
            group_digits(lines)
        ),
        OutputStyle::Plain => format!("{lines}  {chars}  {}", report.name),
        OutputStyle::Aligned => format!(
            "{:>width$}  {:>width$}  {}",
            group_digits(lines),
            group_digits(chars),
            report.name,
            width = ALIGNED_WIDTH
        ),
        OutputStyle::Zeros => format!(
            "{}  {}  {}",
            zero_padded(lines),
            zero_padded(chars),
            report.path.display()
        ),
    }
}

/// Insert thousands separators: `1234567` -> `"1,234,567"`.
fn group_digits(value: u64) -> String {
    group(&value.to_string())
}

/// Zero-pad to at least [`ZEROS_DIGITS`] digits, then group:
/// `13` -> `"000,000,000,013"`.
fn zero_padded(value: u64) -> String {
    group(&format!("{value:0width$}", width = ZEROS_DIGITS))
}

fn group(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{group_digits, render, zero_padded};
    use line_count_core::options::OutputStyle;
    use line_count_core::stats::{Counts, FileReport};
    use std::path::PathBuf;

    fn report() -> FileReport {
        FileReport {
            name: "x.txt".into(),
            path: PathBuf::from("/tmp/x.txt"),
            counts: Counts {
                chars: 1234567,
                lines: 13,
            },
        }
    }

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(1234567), "1,234,567");
    }

    #[test]
    fn zero_pads_to_twelve_digits_with_grouping() {
        assert_eq!(zero_padded(13), "000,000,000,013");
        assert_eq!(zero_padded(0), "000,000,000,000");
        // Values wider than twelve digits are grouped, not truncated.
        assert_eq!(zero_padded(1_234_567_890_123), "1,234,567,890,123");
    }

    #[test]
    fn sentence_layout() {
        assert_eq!(
            render(&report(), OutputStyle::Sentence),
            "x.txt has 1,234,567 characters in 13 lines."
        );
    }

    #[test]
    fn plain_layout() {
        assert_eq!(render(&report(), OutputStyle::Plain), "13  1234567  x.txt");
    }

    #[test]
    fn aligned_layout() {
        assert_eq!(
            render(&report(), OutputStyle::Aligned),
            "             13        1,234,567  x.txt"
        );
    }

    #[test]
    fn zeros_layout_shows_the_path() {
        assert_eq!(
            render(&report(), OutputStyle::Zeros),
            "000,000,000,013  000,001,234,567  /tmp/x.txt"
        );
    }
}
