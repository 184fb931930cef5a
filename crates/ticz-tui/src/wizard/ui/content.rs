use super::super::app::{App, ConfirmAction, DetailsField, MIN_SELECTABLE_COUNT};
use crate::widgets::{field_line, option_marker, stepper};
use ticz_core::booking::{WizardStep, MAX_TICKET_COUNT};
use ticz_core::event::{EVENT, TICKET_TIERS};
use ticz_core::storage::DraftStore;

pub(super) fn build_step_lines<S: DraftStore>(app: &App<S>) -> Vec<String> {
    let step = app.step();
    let mut lines = vec![format!(
        "🧭 Step {}/{}: {}",
        step.number(),
        WizardStep::TOTAL,
        step.title()
    )];
    match step {
        WizardStep::Selection => push_selection(app, &mut lines),
        WizardStep::Details => push_details(app, &mut lines),
        WizardStep::Confirmation => push_confirmation(app, &mut lines),
    }
    lines
}

fn push_selection<S: DraftStore>(app: &App<S>, lines: &mut Vec<String>) {
    let draft = app.wizard.draft();
    lines.push(String::new());
    lines.push(EVENT.name.to_string());
    lines.push(EVENT.tagline.to_string());
    lines.push(format!("📍 {} || {}", EVENT.location, EVENT.date));
    lines.push(String::new());
    lines.push("Select Ticket Type:".to_string());
    for (index, tier) in TICKET_TIERS.iter().enumerate() {
        let selected = draft.ticket_type == Some(tier.ticket_type);
        let highlighted = index == app.tier_index;
        lines.push(format!(
            "{} {:<8} {:<15} {}",
            option_marker(selected, highlighted),
            tier.price,
            tier.ticket_type.label(),
            tier.available
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Number of Tickets: {}",
        stepper(draft.ticket_count, MIN_SELECTABLE_COUNT, MAX_TICKET_COUNT)
    ));
}

fn push_details<S: DraftStore>(app: &App<S>, lines: &mut Vec<String>) {
    let draft = app.wizard.draft();
    lines.push(String::new());
    for field in DetailsField::all() {
        let input = match field {
            DetailsField::Photo => &app.photo_input,
            DetailsField::Name => &app.name_input,
            DetailsField::Email => &app.email_input,
            DetailsField::SpecialRequest => &app.request_input,
        };
        lines.push(field_line(field.label(), input, app.focus == *field));
        if *field == DetailsField::Photo {
            let attached = match &draft.attendee_photo {
                Some(photo) => format!("    🖼️ {} ({})", photo.file_name, photo.mime_type),
                None => "    (no photo uploaded)".to_string(),
            };
            lines.push(attached);
        }
    }
}

fn push_confirmation<S: DraftStore>(app: &App<S>, lines: &mut Vec<String>) {
    lines.push(String::new());
    lines.push("Your Ticket is Booked!".to_string());
    lines.push("Download the ticket or book another one.".to_string());
    lines.push(String::new());
    match app.wizard.ticket() {
        Some(card) => lines.extend(card.preview_lines()),
        None => lines.push("(ticket unavailable)".to_string()),
    }
    lines.push(String::new());
    for action in [ConfirmAction::BookAnother, ConfirmAction::Download] {
        let marker = if app.confirm_action == action { "▶" } else { " " };
        lines.push(format!("{} [{}]", marker, action.label()));
    }
}

pub(super) fn expected_actions(step: WizardStep) -> String {
    match step {
        WizardStep::Selection => {
            "←/→ choose tier | Space select | ↑/↓ or 1-5 tickets | Enter next | Esc cancel | q quit"
                .to_string()
        }
        WizardStep::Details => {
            "Tab/↑/↓ move | type to edit | Enter on photo uploads | Enter get ticket | Esc back"
                .to_string()
        }
        WizardStep::Confirmation => {
            "←/→ choose | Enter activate | d download | b book another | q quit".to_string()
        }
    }
}

/// A pending validation error leads the line; a newer status update follows it.
pub(super) fn status_message<S: DraftStore>(app: &App<S>) -> String {
    let error = app.wizard.error().map(|err| format!("❌ {}", err));
    match error {
        Some(error) if app.status_message.is_empty() || app.status_message == error => error,
        Some(error) => format!("{} | {}", error, app.status_message),
        None if app.status_message.is_empty() => "✅ Ready.".to_string(),
        None => app.status_message.clone(),
    }
}
