// src/cli.rs
use crate::config;
use crate::error::{AppError, AppResult};
use crate::generator;
use crate::models::{GeneratedRecord, PasswordConfig, MAX_LENGTH, MIN_LENGTH};
use crate::random::OsRandom;
use crate::store::HistoryStore;
use clap::{Parser, Subcommand};
use log;
use std::io::{self, Write};
use std::path::PathBuf;

/// A random password generator with a local history, written in Rust.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(arg_required_else_help = false)] // Allow no subcommand to default to TUI
pub struct Cli {
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new password and record it in the history
    Generate {
        /// Password length (4-50)
        #[clap(short, long)]
        length: Option<usize>,
        /// What the password is for (e.g. "Gmail", "bank")
        #[clap(short, long)]
        purpose: Option<String>,
        /// Include lowercase letters, even if disabled in the config
        #[clap(long, overrides_with = "no_lower")]
        lower: bool,
        /// Exclude lowercase letters
        #[clap(long, overrides_with = "lower")]
        no_lower: bool,
        /// Include uppercase letters, even if disabled in the config
        #[clap(long, overrides_with = "no_upper")]
        upper: bool,
        /// Exclude uppercase letters
        #[clap(long, overrides_with = "upper")]
        no_upper: bool,
        /// Include digits, even if disabled in the config
        #[clap(long, overrides_with = "no_digits")]
        digits: bool,
        /// Exclude digits
        #[clap(long, overrides_with = "digits")]
        no_digits: bool,
        /// Include symbols, even if disabled in the config
        #[clap(long, overrides_with = "no_symbols")]
        symbols: bool,
        /// Exclude symbols
        #[clap(long, overrides_with = "symbols")]
        no_symbols: bool,
        /// Path to the history file (defaults to the configured location)
        #[clap(short, long, value_parser)]
        file: Option<PathBuf>,
    },
    /// List the password history, newest first
    List {
        /// Path to the history file (defaults to the configured location)
        #[clap(short, long, value_parser)]
        file: Option<PathBuf>,
    },
    /// Delete one record from the history by its id
    Delete {
        /// Record id as shown by 'list'
        id: String,
        /// Path to the history file (defaults to the configured location)
        #[clap(short, long, value_parser)]
        file: Option<PathBuf>,
    },
    /// Clear the entire password history
    Clear {
        /// Skip the confirmation prompt
        #[clap(short = 'y', long)]
        yes: bool,
        /// Path to the history file (defaults to the configured location)
        #[clap(short, long, value_parser)]
        file: Option<PathBuf>,
    },
    /// Launch the Terminal User Interface (TUI)
    Tui,
}

/// Resolves one class toggle from its flag pair and the configured default.
/// An explicit flag wins either way; otherwise the config decides.
fn resolve_class(enable: bool, disable: bool, configured: bool) -> bool {
    if enable {
        true
    } else if disable {
        false
    } else {
        configured
    }
}

fn resolve_store(file: Option<PathBuf>, app_config: &config::Config) -> HistoryStore {
    let path = file.unwrap_or_else(|| app_config.history_path());
    log::debug!("Using history file: {:?}", path);
    HistoryStore::new(path)
}

/// Handles the parsed CLI command.
/// Returns `Ok(true)` if the TUI should run, `Ok(false)` if a CLI command was handled and TUI should not run.
pub fn handle_cli_command(cli: Cli) -> AppResult<bool> {
    log::debug!("Handling CLI command: {:?}", cli.command);
    let app_config = config::load_config();

    match cli.command {
        Some(Commands::Generate {
            length,
            purpose,
            lower,
            no_lower,
            upper,
            no_upper,
            digits,
            no_digits,
            symbols,
            no_symbols,
            file,
        }) => {
            log::info!("Executing 'generate' command.");
            let defaults = app_config.defaults.clone();
            let gen_config = PasswordConfig {
                length: length.unwrap_or(defaults.length),
                use_lower: resolve_class(lower, no_lower, defaults.use_lower),
                use_upper: resolve_class(upper, no_upper, defaults.use_upper),
                use_digits: resolve_class(digits, no_digits, defaults.use_digits),
                use_symbols: resolve_class(symbols, no_symbols, defaults.use_symbols),
            };

            if gen_config.length < MIN_LENGTH || gen_config.length > MAX_LENGTH {
                let msg = format!(
                    "Length must be between {} and {}, got {}.",
                    MIN_LENGTH, MAX_LENGTH, gen_config.length
                );
                log::warn!("Generate command rejected: {}", msg);
                return Err(AppError::Cli(msg));
            }

            let password = generator::generate(&gen_config, &mut OsRandom)?;
            let record = GeneratedRecord::new(
                password.clone(),
                purpose.as_deref().unwrap_or(""),
                gen_config.clone(),
            );

            // The password is presented even if the history append fails
            // below; generation and persistence are independent outcomes.
            println!("Purpose:  {}", record.purpose);
            println!("Password: {}", password);
            println!("Length:   {} characters", gen_config.length);
            log::info!("Generated a {}-character password.", gen_config.length);

            let store = resolve_store(file, &app_config);
            if let Err(e) = store.append(record) {
                log::error!("Failed to record generated password: {}", e);
                eprintln!("Warning: the password above was NOT saved to the history.");
                return Err(e.into());
            }
            println!("Saved to history: {:?}", store.path());
            Ok(false)
        }
        Some(Commands::List { file }) => {
            log::info!("Executing 'list' command.");
            let store = resolve_store(file, &app_config);
            let history = store.load().map_err(|e| {
                log::error!("Failed to load history from {:?}: {}", store.path(), e);
                e
            })?;

            if history.records.is_empty() {
                println!("Password history is empty.");
                log::info!("Listed 0 records from {:?}.", store.path());
            } else {
                println!("Password history ({} records, newest first):", history.records.len());
                for (position, record) in history.records.iter().rev().enumerate() {
                    println!("{}. For: {}", position + 1, record.purpose);
                    println!("   Password: {}", record.password);
                    println!("   Length:   {} characters", record.config.length);
                    println!("   Created:  {}", record.created_at);
                    println!("   Id:       {}", record.id);
                }
                log::info!("Listed {} records from {:?}.", history.records.len(), store.path());
            }
            Ok(false)
        }
        Some(Commands::Delete { id, file }) => {
            log::info!("Executing 'delete' command for id: {}", id);
            let store = resolve_store(file, &app_config);
            store.delete(&id).map_err(|e| {
                log::error!("Failed to delete record '{}': {}", id, e);
                e
            })?;
            println!("Record {} deleted from history.", id);
            Ok(false)
        }
        Some(Commands::Clear { yes, file }) => {
            log::info!("Executing 'clear' command.");
            if !yes {
                print!("Clear the entire password history? (y/N): ");
                io::stdout().flush().map_err(|e| {
                    log::error!("Failed to flush stdout for clear confirmation: {}", e);
                    AppError::Cli(format!("Failed to flush stdout: {}", e))
                })?;
                let mut confirmation = String::new();
                io::stdin().read_line(&mut confirmation).map_err(|e| {
                    log::error!("Failed to read clear confirmation: {}", e);
                    AppError::Cli(format!("Failed to read confirmation: {}", e))
                })?;
                if confirmation.trim().to_lowercase() != "y" {
                    println!("Clear cancelled.");
                    log::info!("History clear cancelled by user.");
                    return Ok(false);
                }
            }

            let store = resolve_store(file, &app_config);
            store.clear().map_err(|e| {
                log::error!("Failed to clear history at {:?}: {}", store.path(), e);
                e
            })?;
            println!("Password history cleared.");
            Ok(false)
        }
        Some(Commands::Tui) => {
            log::info!("'tui' command given, preparing to launch TUI.");
            Ok(true)
        }
        None => {
            log::info!("No CLI command given, preparing to launch TUI by default.");
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_class_explicit_flag_beats_configured_default() {
        // Enable flag wins over a config that disables the class.
        assert!(resolve_class(true, false, false));
        // Disable flag wins over a config that enables it.
        assert!(!resolve_class(false, true, true));
        // No flag: the config decides.
        assert!(resolve_class(false, false, true));
        assert!(!resolve_class(false, false, false));
    }

    #[test]
    fn test_generate_class_flags_parse_as_tri_state() {
        let cli = Cli::try_parse_from(["passgen-rs", "generate", "--upper", "--no-digits"]).unwrap();
        match cli.command {
            Some(Commands::Generate { lower, no_lower, upper, no_digits, .. }) => {
                assert!(upper);
                assert!(no_digits);
                assert!(!lower);
                assert!(!no_lower);
            }
            other => panic!("expected generate command, got {:?}", other),
        }
    }

    #[test]
    fn test_later_class_flag_overrides_earlier_one() {
        let cli = Cli::try_parse_from(["passgen-rs", "generate", "--no-lower", "--lower"]).unwrap();
        match cli.command {
            Some(Commands::Generate { lower, no_lower, .. }) => {
                assert!(lower);
                assert!(!no_lower);
            }
            other => panic!("expected generate command, got {:?}", other),
        }
    }
}
