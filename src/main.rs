// src/main.rs
mod cli;
mod config;
mod error;
mod generator;
mod models;
mod random;
mod store;
mod tui;

use clap::Parser;

fn main() -> Result<(), error::AppError> {
    env_logger::init();
    log::info!("Starting PassGen-RS application");

    let cli_args = cli::Cli::parse();

    match cli::handle_cli_command(cli_args) {
        Ok(should_run_tui) => {
            if should_run_tui {
                if let Err(e) = tui::run_tui() {
                    log::error!("Application TUI error: {:#?}", e);
                    eprintln!("Error: {}", e);
                    return Err(e);
                }
            } else {
                log::info!("CLI command processed.");
            }
        }
        Err(e) => {
            log::error!("Application failed: {:#?}", e);
            eprintln!("Error: {}", e);
            return Err(e);
        }
    }

    log::info!("PassGen-RS application finished successfully.");
    Ok(())
}
