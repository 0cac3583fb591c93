//! FAA daily delay and event bulletin.

use std::io::{self, IsTerminal};

use chrono::Utc;
use faa_cli::config::BulletinConfig;
use faa_cli::logging::{LogConfig, init_logging};
use faa_cli::pipeline::{RunOutcome, run_from_network};

fn main() {
    let log_config = LogConfig::default().with_ansi(io::stderr().is_terminal());
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let config = BulletinConfig::default();
    let exit_code = match run_from_network(&config, Utc::now()) {
        Ok(RunOutcome::Generated { events }) => {
            println!(
                "Generated {} with {events} events.",
                config.output_path.display()
            );
            0
        }
        Ok(RunOutcome::Fallback) => {
            println!("Wrote fallback HTML.");
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
