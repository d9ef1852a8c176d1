use colored::Colorize;
use std::process::ExitCode;
use suite_runner::cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Resolve options, compile the engine command and run it; any
    // resolution or execution failure maps to exit code 1.
    match cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n❌ {} {e:#}\n", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
