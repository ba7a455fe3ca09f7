//! Command-line interface entry point for `StudyCost`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use study_cost::config::Config;
use study_cost::info;
use study_cost::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let result = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut config, &defaults),
        Command::Questionnaire {
            answers,
            show,
            clear,
        } => commands::questionnaire::run(&answers, show, clear, &config),
        Command::Estimate {
            country,
            quick,
            json,
        } => commands::estimate::run(country.as_deref(), quick, json, &config),
        Command::Report {
            country,
            format,
            output,
        } => commands::report::run(country.as_deref(), &format, output.as_deref(), &config),
        Command::Lead {
            contact,
            country,
            check,
        } => commands::lead::run(&contact, country.as_deref(), check, &config),
        Command::Callback { contact } => commands::lead::callback(&contact, &config),
        Command::Package { subcommand } => commands::package::run(subcommand, &config),
        Command::Grade {
            best,
            min_passing,
            yours,
            certificate,
            contact,
        } => commands::grade::run(
            &commands::grade::GradeArgs {
                best: &best,
                min_passing: &min_passing,
                yours: &yours,
                certificate,
                contact: &contact,
            },
            &config,
        ),
        Command::Health => commands::health::run(&config),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
