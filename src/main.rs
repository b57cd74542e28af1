use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::time::sleep;

use gradeflow::cli::{Cli, Command};
use gradeflow::config::SimConfig;
use gradeflow::notify::ConsoleNotifier;
use gradeflow::report::GradeReport;
use gradeflow::tracking::{ClassList, Student};
use gradeflow::ui::DemoProgress;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = SimConfig::load()?;
    if let Some(ms) = cli.delay_ms {
        config.grade_delay_ms = ms;
    }
    if cli.verbose {
        println!("Grading latency: {}ms", config.grade_delay_ms);
    }

    match cli.command {
        Command::Demo { assignments } => run_demo(&config, &assignments).await,
    }
}

/// The built-in classroom walkthrough: enrol three students, release the
/// assignments in parallel, let two of them start working, escalate with a
/// final reminder and print the resulting grade report.
async fn run_demo(config: &SimConfig, assignments: &[String]) -> Result<()> {
    let notifier = Arc::new(ConsoleNotifier);
    let delay = config.grade_delay();
    let ui = DemoProgress::new();

    ui.section("Enrolment");
    let mut class = ClassList::new();
    for (name, email) in [
        ("Ana Silva", "ana@example.edu"),
        ("Ben Okafor", "ben@example.edu"),
        ("Cleo Marchetti", "cleo@example.edu"),
    ] {
        class.add(Student::new(name, email, notifier.clone(), delay));
    }

    ui.section("Release");
    let names: Vec<&str> = assignments.iter().map(String::as_str).collect();
    class.release_all(&names).await?;

    if let Some(first) = names.first() {
        ui.section("Working");
        for student in ["Ana Silva", "Ben Okafor"] {
            if let Some(s) = class.find_by_name(student) {
                s.start_working(first);
            }
        }
        let pb = ui.waiting("waiting for auto-submission and grading...");
        sleep(settle_time(delay)).await;
        pb.finish_and_clear();
    }

    if let Some(last) = names.last() {
        ui.section("Outstanding work");
        let outstanding = class.find_outstanding(last);
        if outstanding.is_empty() {
            println!("Nobody has outstanding work for {last}.");
        } else {
            println!("Outstanding for {last}: {}", outstanding.join(", "));
        }

        ui.section("Final reminder");
        class.send_reminder(last);
        let pb = ui.waiting("waiting for forced grading...");
        sleep(settle_time(delay)).await;
        pb.finish_and_clear();
    }

    ui.print_report(&GradeReport::from_class_list(&class));
    Ok(())
}

// Long enough for a submit timer plus the grading timer it schedules.
fn settle_time(delay: Duration) -> Duration {
    delay * 2 + Duration::from_millis(50)
}
