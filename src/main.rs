use ship_kinematics::config::mission::ReferenceMission;
use ship_kinematics::KinematicsCalculator;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let params = ReferenceMission::parameters();

    match KinematicsCalculator::compute(&params) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "computation aborted");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
