//! Aggregated validation report and its rendering.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::secrets::OutputMasker;
use crate::ui::UserInterface;

use super::ValidationResult;

/// All results of one validation run.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Results in execution order.
    pub results: Vec<ValidationResult>,
    /// When the run finished.
    pub checked_at: DateTime<Utc>,
}

/// Serialized form of a report.
#[derive(Serialize)]
struct ReportJson<'a> {
    results: &'a [ValidationResult],
    passed: usize,
    failed: usize,
    success: bool,
    checked_at: String,
}

impl ValidationReport {
    /// Wrap results, stamping the current time.
    pub fn new(results: Vec<ValidationResult>) -> Self {
        Self {
            results,
            checked_at: Utc::now(),
        }
    }

    /// Number of passing results.
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// Number of failing results.
    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    /// True when nothing failed (an empty report succeeds).
    pub fn success(&self) -> bool {
        self.failed() == 0
    }

    /// The `Results: P passed, F failed` line.
    pub fn summary_line(&self) -> String {
        format!(
            "Results: {} passed, {} failed",
            self.passed(),
            self.failed()
        )
    }

    /// Copy of this report with secrets masked in messages and details.
    pub fn masked(&self, masker: &OutputMasker) -> Self {
        let results = self
            .results
            .iter()
            .map(|r| ValidationResult {
                name: r.name.clone(),
                passed: r.passed,
                message: masker.mask(&r.message),
                details: r.details.as_deref().map(|d| masker.mask(d)),
            })
            .collect();

        Self {
            results,
            checked_at: self.checked_at,
        }
    }

    /// Machine-readable report.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&ReportJson {
            results: &self.results,
            passed: self.passed(),
            failed: self.failed(),
            success: self.success(),
            checked_at: self.checked_at.to_rfc3339(),
        })
    }
}

/// Print one line per result, any details, and the summary.
///
/// Quiet mode leaves out passing results.
pub fn render_report(report: &ValidationReport, ui: &mut dyn UserInterface) {
    let show_passing = ui.output_mode().shows_passing();

    for result in &report.results {
        if result.passed && !show_passing {
            continue;
        }
        ui.check_result(
            result.passed,
            &format!("{}: {}", result.name, result.message),
        );
        if let Some(details) = &result.details {
            ui.message(&format!("   Details: {}", details.trim_end()));
        }
    }

    ui.message("");
    ui.message(&report.summary_line());

    if report.success() {
        ui.success("Environment validation passed!");
    } else {
        ui.error("Environment validation failed!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};

    fn sample() -> ValidationReport {
        ValidationReport::new(vec![
            ValidationResult::pass("Docker Environment", "Not running in Docker container"),
            ValidationResult::fail(
                "Required Environment Variables",
                "Missing required environment variables: SECRET_KEY",
            )
            .with_details("Add these variables to your .env file"),
        ])
    }

    #[test]
    fn counts_results() {
        let report = sample();
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.success());
        assert_eq!(report.summary_line(), "Results: 1 passed, 1 failed");
    }

    #[test]
    fn empty_report_succeeds() {
        let report = ValidationReport::new(vec![]);
        assert!(report.success());
        assert_eq!(report.summary_line(), "Results: 0 passed, 0 failed");
    }

    #[test]
    fn renders_lines_details_and_summary() {
        let mut ui = MockUI::new();
        render_report(&sample(), &mut ui);

        assert_eq!(
            ui.check_results(),
            [
                (
                    true,
                    "Docker Environment: Not running in Docker container".to_string()
                ),
                (
                    false,
                    "Required Environment Variables: Missing required environment variables: SECRET_KEY"
                        .to_string()
                ),
            ]
        );
        assert!(ui.has_message("   Details: Add these variables to your .env file"));
        assert!(ui.has_message("Results: 1 passed, 1 failed"));
        assert!(ui.has_error("Environment validation failed!"));
    }

    #[test]
    fn passing_report_ends_with_success() {
        let report = ValidationReport::new(vec![ValidationResult::pass("A", "ok")]);
        let mut ui = MockUI::new();
        render_report(&report, &mut ui);

        assert!(ui.has_success("Environment validation passed!"));
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn quiet_mode_hides_passing_lines() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        render_report(&sample(), &mut ui);

        assert_eq!(ui.check_results().len(), 1);
        assert!(!ui.check_results()[0].0);
        assert!(ui.has_message("Results: 1 passed, 1 failed"));
    }

    #[test]
    fn masked_report_hides_secrets() {
        let report = ValidationReport::new(vec![ValidationResult::fail(
            "Database Connection",
            "Database connection failed: password authentication failed for hunter2hunter2",
        )
        .with_details("hunter2hunter2")]);

        let mut masker = OutputMasker::new();
        masker.add_secret("hunter2hunter2");
        let masked = report.masked(&masker);

        assert!(!masked.results[0].message.contains("hunter2hunter2"));
        assert_eq!(masked.results[0].details.as_deref(), Some("[REDACTED]"));
        assert_eq!(masked.checked_at, report.checked_at);
    }

    #[test]
    fn json_has_counts_and_timestamp() {
        let json: serde_json::Value =
            serde_json::from_str(&sample().to_json().unwrap()).unwrap();

        assert_eq!(json["passed"], 1);
        assert_eq!(json["failed"], 1);
        assert_eq!(json["success"], false);
        assert_eq!(json["results"].as_array().unwrap().len(), 2);
        assert_eq!(
            json["results"][1]["details"],
            "Add these variables to your .env file"
        );
        assert!(DateTime::parse_from_rfc3339(json["checked_at"].as_str().unwrap()).is_ok());
    }
}
