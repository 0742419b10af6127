use clap::Parser;
use net_notation::cli::{run, Cli};
use net_notation::config::{Config, OutputFormat};
use net_notation::output::{render_json, render_text};
use std::error::Error;
use std::path::Path;

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};

fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    if Path::new(&config.log_config).exists() {
        log4rs::init_file(&config.log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", config.log_config))?;
    } else {
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .build();
        let log_config = log4rs::config::Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
        log4rs::init_config(log_config)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let config = Config::from_env()?;
    init_logging(&config)?;
    colored::control::set_override(config.color);
    log::info!("#Start main()");

    let cli = Cli::parse();
    let report = run(&cli.command)?;

    let output = if cli.json { OutputFormat::Json } else { config.output };
    match output {
        OutputFormat::Json => println!("{}", render_json(&report)?),
        OutputFormat::Text => print!("{}", render_text(&report)),
    }

    if !report.valid {
        std::process::exit(1);
    }
    Ok(())
}
