//! CLI argument parsing for Ticz
//!
//! Makes the TUI the default entry point when no subcommand is provided.

use crate::booking::TicketType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ticz")]
#[command(about = "🎟️ Ticz - book your Techember Fest '25 ticket")]
#[command(long_about = "🎟️ Ticz - book your Techember Fest '25 ticket\n\n\
    A three-step wizard: pick a ticket, tell us who you are, download your ticket.\n\n\
    Run without arguments to launch the interactive TUI wizard.\n\
    Or use subcommands for CLI scripting.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding the saved draft, logs and exported tickets
    #[arg(long, env = "TICZ_DATA_DIR", default_value = ".ticz", global = true)]
    pub data_dir: PathBuf,

    /// Write logs to this file instead of the default location
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Keep the draft in memory only (nothing is saved between runs)
    #[arg(long, global = true)]
    pub no_persist: bool,

    /// Dump TUI step render text to stdout and exit
    #[arg(long, global = true)]
    pub dump_tui: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 📋 Show the saved booking draft
    Show {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// 🧹 Forget the saved booking draft
    Reset,

    /// 🎟️ Book a ticket non-interactively and export it
    Book {
        /// Ticket tier
        #[arg(long, value_enum)]
        ticket_type: TicketType,

        /// Number of tickets (1-5)
        #[arg(long, default_value_t = 1)]
        count: u8,

        /// Attendee name
        #[arg(long)]
        name: String,

        /// Attendee email
        #[arg(long)]
        email: String,

        /// Profile photo (png, jpg, gif, webp, bmp or svg)
        #[arg(long)]
        photo: PathBuf,

        /// Anything we should know?
        #[arg(long, default_value = "")]
        special_request: String,

        /// Where to write the ticket (defaults to <data-dir>/techember_fest_ticket.html)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}
