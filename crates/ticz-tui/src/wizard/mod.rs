//! The booking wizard TUI.
//!
//! One screen per step, a progress gauge and a status/key legend footer.

pub mod app;
mod ui;

pub use app::{App, InputResult};
pub use ui::{draw, dump_step};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use ticz_core::booking::{AttendeePhoto, TicketType};
use ticz_core::config::Config;
use ticz_core::storage::DraftStore;
use ticz_core::{MemoryStore, WizardController};

/// Run the wizard in the terminal until the user quits.
pub fn run(config: &Config) -> Result<InputResult> {
    use std::io::IsTerminal;

    if !std::io::stdout().is_terminal() {
        anyhow::bail!(
            "No TTY detected. The booking wizard requires an interactive terminal.\n\
             Use `ticz book` for scripted bookings."
        );
    }

    let store = config.open_store()?;
    let mut app = App::new(
        WizardController::restore(store),
        config.default_export_path(),
    );

    enable_raw_mode()?;
    let mut terminal = match enter_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            restore_terminal(&mut io::stdout());
            return Err(err);
        }
    };

    let result = run_wizard(&mut terminal, &mut app);

    // Restore the terminal even when the loop failed.
    restore_terminal(terminal.backend_mut());
    terminal.show_cursor()?;

    result
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Leave raw mode and the alternate screen, logging rather than failing.
fn restore_terminal<W: io::Write>(out: &mut W) {
    if let Err(err) = disable_raw_mode() {
        log::warn!("Failed to disable raw mode: {}", err);
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen) {
        log::warn!("Failed to leave alternate screen: {}", err);
    }
}

/// Main loop: redraw, then feed key presses to the app.
pub fn run_wizard<S: DraftStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S>,
) -> Result<InputResult> {
    let mut last_export: Option<PathBuf> = None;
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match app.handle_input(key) {
                    InputResult::Quit => {
                        return Ok(last_export.map_or(InputResult::Quit, InputResult::Exported));
                    }
                    InputResult::Exported(path) => last_export = Some(path),
                    InputResult::Continue => {}
                }
            }
        }
    }
}

/// Walk a sample booking through every step and return each screen as text.
pub fn dump_all_steps() -> Result<String> {
    let mut wizard = WizardController::new(MemoryStore::new());
    let mut dumps = Vec::new();

    wizard.select_ticket_type(TicketType::Vip)?;
    wizard.set_ticket_count(2)?;
    let export_path = PathBuf::from("techember_fest_ticket.html");
    let mut app = App::new(wizard, export_path);
    dumps.push(dump_step(&app));

    app.wizard.next().context("sample selection was rejected")?;
    app.wizard.set_attendee_photo(AttendeePhoto::new(
        "avatar.png",
        "image/png",
        vec![0x89, b'P', b'N', b'G'],
    ))?;
    app.wizard.set_attendee_name("Ada Lovelace")?;
    app.wizard.set_attendee_email("ada@example.com")?;
    dumps.push(dump_step(&app));

    app.wizard.next().context("sample details were rejected")?;
    dumps.push(dump_step(&app));

    Ok(dumps.join("\n"))
}
