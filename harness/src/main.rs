//! `slidetile`: solve one sliding-tile puzzle and print the result.
//!
//! Usage: `slidetile [CONFIG.json]`. Without a config the built-in 3×3
//! start is solved with A* and the Manhattan-sum heuristic.

use std::process::ExitCode;

use slidetile_harness::config::RunConfig;
use slidetile_harness::render::render_report;
use slidetile_harness::runner::run;

fn main() -> ExitCode {
    slidetile_harness::logging::init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => match RunConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("slidetile: {}: {err}", path.to_string_lossy());
                return ExitCode::FAILURE;
            }
        },
        None => RunConfig::default(),
    };

    match run(&config) {
        Ok(report) => {
            print!("{}", render_report(&report));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("slidetile: {err}");
            ExitCode::FAILURE
        }
    }
}
