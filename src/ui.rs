//! Terminal output for the demo binary — spinners and colored sections.
//!
//! Uses `indicatif` for a spinner while scheduled transitions settle and
//! `console` for styled headers. The notification stream itself stays
//! untouched; only the framing around it is decorated.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::report::GradeReport;

/// Visual framing for the classroom demo.
pub struct DemoProgress {
    green: Style,
    cyan: Style,
}

impl DemoProgress {
    pub fn new() -> Self {
        Self {
            green: Style::new().green().bold(),
            cyan: Style::new().cyan().bold(),
        }
    }

    /// Print a styled section header.
    pub fn section(&self, title: &str) {
        println!();
        println!("{}", self.cyan.apply_to(format!("─── {title} ───")));
    }

    /// Spin while the simulated grading latency elapses.
    pub fn waiting(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Print the final grade report as pretty JSON.
    pub fn print_report(&self, report: &GradeReport) {
        self.section("Grade Report");
        println!(
            "{}",
            serde_json::to_string_pretty(report).unwrap_or_default()
        );
        println!("{}", self.green.apply_to("✓ Simulation complete"));
    }
}

impl Default for DemoProgress {
    fn default() -> Self {
        Self::new()
    }
}
