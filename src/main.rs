use std::process::ExitCode;

use tracing::error;

use intensity_segments::configuration::{
    Configuration,
    DEFAULT_SCRIPT_PATH
};
use intensity_segments::logging::init_tracing;

fn main() -> ExitCode {
    init_tracing();

    let script_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SCRIPT_PATH.to_owned());
    let mut config = Configuration::new();
    if let Err(err) = config.from_reader(&script_path) {
        error!(path = %script_path, %err, "failed to load scripts");
        return ExitCode::FAILURE;
    }

    let mut all_passed = true;
    for report in config.replay_all() {
        println!("Running {}", report.name());
        for step in report.steps() {
            println!("{}: {}", step.description(), if step.passed() { "PASS" } else { "FAIL" });
            if !step.passed() {
                if let Some(expected) = step.expected() {
                    println!("  Expected: {}", expected);
                }
                println!("  Actual: {}", step.actual());
            }
        }
        println!();
        all_passed &= report.all_passed();
    }

    if all_passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
