//! 🎟️ Ticz entry point: CLI dispatch between the TUI wizard and scripted commands.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use ticz_core::booking::{DraftSummary, TicketType};
use ticz_core::cli::{Cli, Command};
use ticz_core::config::Config;
use ticz_core::logging;
use ticz_core::ticket::TicketCard;
use ticz_core::{MemoryStore, WizardController};
use ticz_tui::wizard::{self, InputResult};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    if cli.dump_tui {
        logging::init_with(config.log_file.clone());
        println!("{}", wizard::dump_all_steps()?);
        return Ok(());
    }

    match cli.command {
        None => {
            // The TUI owns the terminal, so logs always go to a file.
            logging::init_with(Some(config.log_path()));
            log::info!("🎟️ Ticz wizard starting (data dir {})", config.data_dir.display());
            match wizard::run(&config)? {
                InputResult::Exported(path) => {
                    println!("✅ Ticket saved to {}", path.display());
                }
                _ if config.persist => {
                    println!("💾 Draft saved. Run ticz again to pick up where you left off.");
                }
                _ => {}
            }
        }
        Some(command) => {
            logging::init_with(config.log_file.clone());
            run_command(command, &config)?;
        }
    }
    Ok(())
}

fn run_command(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Show { json } => show(config, json),
        Command::Reset => reset(config),
        Command::Book {
            ticket_type,
            count,
            name,
            email,
            photo,
            special_request,
            output,
        } => {
            let output = output.unwrap_or_else(|| config.default_export_path());
            let request = BookRequest {
                ticket_type,
                count,
                name,
                email,
                special_request,
            };
            let written = book(&request, &photo, &output)?;
            println!("✅ Ticket saved to {}", written.display());
            Ok(())
        }
    }
}

fn show(config: &Config, json: bool) -> Result<()> {
    let store = config.open_store()?;
    let wizard = WizardController::restore(store);
    let draft = wizard.draft();
    let summary = DraftSummary::from_draft(draft);
    if json {
        println!("{}", summary.to_json().context("Failed to encode draft summary")?);
        return Ok(());
    }
    if draft.is_pristine() {
        println!("📭 No saved booking.");
        return Ok(());
    }
    for line in summary.lines() {
        println!("{}", line);
    }
    match (&summary.problem, TicketCard::from_draft(draft)) {
        (Some(problem), _) => println!("\n⏳ Not ready to book yet: {}", problem),
        (None, Some(card)) => {
            println!();
            for line in card.preview_lines() {
                println!("{}", line);
            }
        }
        (None, None) => {}
    }
    Ok(())
}

fn reset(config: &Config) -> Result<()> {
    let mut store = config.open_store()?;
    store.clear().context("Failed to clear saved booking draft")?;
    log::info!("🧹 Saved booking cleared");
    println!("🧹 Saved booking cleared.");
    Ok(())
}

struct BookRequest {
    ticket_type: TicketType,
    count: u8,
    name: String,
    email: String,
    special_request: String,
}

/// Drive the wizard through both transitions and export the ticket.
///
/// Scripted bookings run on a memory store so the interactive draft survives.
fn book(request: &BookRequest, photo: &Path, output: &Path) -> Result<PathBuf> {
    let mut wizard = WizardController::new(MemoryStore::new());
    wizard.select_ticket_type(request.ticket_type)?;
    wizard.set_ticket_count(request.count)?;
    wizard.next()?;

    wizard.load_attendee_photo(photo)?;
    wizard.set_attendee_name(request.name.as_str())?;
    wizard.set_attendee_email(request.email.as_str())?;
    wizard.set_special_request(request.special_request.as_str())?;
    wizard.next()?;

    wizard.export_ticket(output)
}
