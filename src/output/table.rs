use crate::report::SyncReport;

/// Cell shown when a target file has nothing missing
pub const NONE_MISSING: &str = "-";

/// Formatter for the domain × language summary matrix
pub struct SummaryFormatter;

impl SummaryFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Render the matrix: a header row of uppercased language codes, then one
    /// row per domain with its missing counts
    pub fn format(&self, report: &SyncReport) -> String {
        let header: Vec<String> = report
            .languages
            .iter()
            .map(|lang| lang.to_uppercase())
            .collect();

        let rows: Vec<(&str, Vec<String>)> = report
            .domains
            .iter()
            .map(|domain| {
                let cells = report
                    .languages
                    .iter()
                    .map(|lang| Self::cell(report.missing_for(domain, lang)))
                    .collect();
                (domain.as_str(), cells)
            })
            .collect();

        let first_width = rows
            .iter()
            .map(|(domain, _)| domain.len())
            .chain(std::iter::once("DOMAIN".len()))
            .max()
            .unwrap_or(0);

        let widths: Vec<usize> = header
            .iter()
            .enumerate()
            .map(|(i, name)| {
                rows.iter()
                    .map(|(_, cells)| cells[i].len())
                    .chain(std::iter::once(name.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut output = String::new();
        Self::push_row(&mut output, "DOMAIN", &header, first_width, &widths);
        for (domain, cells) in &rows {
            Self::push_row(&mut output, domain, cells, first_width, &widths);
        }
        output
    }

    /// One `domain/lang: key` line per missing key
    pub fn format_missing(&self, report: &SyncReport) -> String {
        let mut output = String::new();
        for file in &report.files {
            for key in &file.missing_keys {
                output.push_str(&format!("{}/{}: {}\n", file.domain, file.language, key));
            }
        }
        output
    }

    fn cell(missing: Option<usize>) -> String {
        match missing {
            Some(0) | None => NONE_MISSING.to_string(),
            Some(n) => n.to_string(),
        }
    }

    fn push_row(
        output: &mut String,
        first: &str,
        cells: &[String],
        first_width: usize,
        widths: &[usize],
    ) {
        let mut line = format!("{:<width$}", first, width = first_width);
        for (cell, width) in cells.iter().zip(widths) {
            line.push_str(&format!("  {:>width$}", cell, width = width));
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }
}

impl Default for SummaryFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::FileReport;
    use std::path::PathBuf;

    fn file(domain: &str, language: &str, missing_keys: &[&str]) -> FileReport {
        FileReport {
            domain: domain.to_string(),
            language: language.to_string(),
            path: PathBuf::from(format!("{}/{}_{}.properties", domain, domain, language)),
            missing_keys: missing_keys.iter().map(|k| k.to_string()).collect(),
            written: false,
        }
    }

    fn sample_report() -> SyncReport {
        SyncReport {
            root: PathBuf::from("strings"),
            domains: vec!["gui".to_string(), "circuit".to_string()],
            languages: vec!["de".to_string(), "pt_BR".to_string()],
            write: false,
            files: vec![
                file("gui", "de", &[]),
                file("gui", "pt_BR", &["a", "b", "c"]),
                file("circuit", "de", &["x"]),
                file("circuit", "pt_BR", &[]),
            ],
        }
    }

    #[test]
    fn test_format_matrix() {
        let output = SummaryFormatter::new().format(&sample_report());
        let expected = "\
DOMAIN   DE  PT_BR
gui       -      3
circuit   1      -
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_format_missing_list() {
        let output = SummaryFormatter::new().format_missing(&sample_report());
        assert_eq!(output, "gui/pt_BR: a\ngui/pt_BR: b\ngui/pt_BR: c\ncircuit/de: x\n");
    }

    #[test]
    fn test_empty_language_list() {
        let mut report = sample_report();
        report.languages.clear();
        report.files.clear();
        let output = SummaryFormatter::new().format(&report);
        assert_eq!(output, "DOMAIN\ngui\ncircuit\n");
    }
}
