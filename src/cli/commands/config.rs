//! Config command handler

use super::prompt;
use crate::args::ConfigSubcommand;
use study_cost::config::Config;
use study_cost::error;

/// Dispatch config subcommands
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None => {
            show_all(config);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: None }) => {
            show_all(config);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => config
            .get(&key)
            .map(|value| println!("{value}"))
            .ok_or_else(|| format!("✗ Unknown config key: '{key}'")),
        Some(ConfigSubcommand::Set { key, value }) => {
            config.set(&key, &value).map_err(|e| format!("✗ {e}"))?;
            persist(config)?;
            println!("✓ Set {key} = {value}");
            Ok(())
        }
        Some(ConfigSubcommand::Unset { key }) => {
            config.unset(&key, defaults).map_err(|e| format!("✗ {e}"))?;
            persist(config)?;
            println!("✓ Reset {key} to default");
            Ok(())
        }
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

fn show_all(config: &Config) {
    println!("\n=== Configuration ===\n");
    println!("# {}\n", Config::get_config_file_path().display());
    print!("{config}");
}

fn persist(config: &Config) -> Result<(), String> {
    config.save().map_err(|e| {
        error!("Failed to save config: {e}");
        format!("✗ Failed to save config: {e}")
    })
}

fn reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    let answer = prompt("Are you sure you want to reset config to defaults? (y/n)")?;
    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        Config::reset().map_err(|e| format!("✗ Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}
