use anyhow::Result;
use markdown_docx_config::Config;
use markdown_docx_engine::{JobOutcome, convert_batch};
use std::{env, path::PathBuf, process};

/// One line of console output for a finished job.
fn report(outcome: &JobOutcome) -> String {
    match outcome {
        JobOutcome::Created(target) => format!("Created: {}", target.display()),
        JobOutcome::NotFound(source) => format!("Not found: {}", source.display()),
        JobOutcome::Failed { source, error } => {
            format!("Failed: {}: {error}", source.display())
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    // Determine configuration from CLI args or the user config file
    let args: Vec<String> = env::args().collect();

    let config = if args.len() == 2 {
        let config_path = PathBuf::from(&args[1]);
        match Config::load_from_path(&config_path) {
            Ok(Some(config)) => config,
            Ok(None) => {
                eprintln!("Error: Config file '{}' not found", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                process::exit(1);
            }
        }
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => config,
            Ok(None) => {
                log::info!(
                    "no config at {}, using defaults",
                    Config::config_path().display()
                );
                Config::default()
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} [config.toml]", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [config.toml]", args[0]);
        process::exit(1);
    };

    log::debug!(
        "converting {} files from {}",
        config.jobs.len(),
        config.source_dir.display()
    );

    for outcome in convert_batch(&config.source_dir, &config.jobs, &config.styles) {
        println!("{}", report(&outcome));
    }

    Ok(())
}
