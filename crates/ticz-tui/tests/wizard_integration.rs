use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use std::fs;
use tempfile::tempdir;
use ticz_core::booking::{TicketType, WizardStep};
use ticz_core::storage::{keys, DraftStore};
use ticz_core::{FileStore, WizardController};
use ticz_tui::wizard::app::DetailsField;
use ticz_tui::wizard::{dump_step, App, InputResult};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn type_text<S: DraftStore>(app: &mut App<S>, text: &str) {
    for c in text.chars() {
        app.handle_input(key(KeyCode::Char(c)));
    }
}

#[test]
fn full_booking_flow_exports_and_resets() {
    let temp = tempdir().unwrap();
    let store_path = temp.path().join("local-storage.json");
    let export_path = temp.path().join("out").join("ticket.html");
    let photo_path = temp.path().join("me.jpg");
    fs::write(&photo_path, b"jpeg bytes").unwrap();

    let store = FileStore::open(&store_path).unwrap();
    let mut app = App::new(WizardController::restore(store), export_path.clone());

    // Selection: VVIP, three tickets.
    app.handle_input(key(KeyCode::Right));
    app.handle_input(key(KeyCode::Right));
    app.handle_input(key(KeyCode::Char(' ')));
    app.handle_input(key(KeyCode::Char('3')));
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.step(), WizardStep::Details);

    // Details: upload, then fill the form.
    type_text(&mut app, &photo_path.display().to_string());
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.focus, DetailsField::Name);
    type_text(&mut app, "Grace Hopper");
    app.handle_input(key(KeyCode::Tab));
    type_text(&mut app, "grace@navy.mil");
    app.handle_input(key(KeyCode::Tab));
    type_text(&mut app, "Front row");
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.step(), WizardStep::Confirmation);

    let dump = dump_step(&app);
    assert!(dump.contains("Ticket Type: VVIP Access"));
    assert!(dump.contains("Number of Tickets: 3"));
    assert!(dump.contains("Special Request: Front row"));

    // Everything typed so far is on disk.
    let reopened = FileStore::open(&store_path).unwrap();
    assert_eq!(
        reopened.get_item(keys::TICKET_TYPE).as_deref(),
        Some("VVIP Access")
    );
    assert_eq!(reopened.get_item(keys::PHOTO_NAME).as_deref(), Some("me.jpg"));

    // Download writes the ticket and starts over.
    let result = app.handle_input(key(KeyCode::Char('d')));
    assert_eq!(result, InputResult::Exported(export_path.clone()));
    let html = fs::read_to_string(&export_path).unwrap();
    assert!(html.contains("Grace Hopper"));
    assert!(html.contains("data:image/jpeg;base64,"));

    assert_eq!(app.step(), WizardStep::Selection);
    assert!(app.wizard.draft().is_pristine());
    assert!(app.name_input.is_empty());
    let reopened = FileStore::open(&store_path).unwrap();
    assert_eq!(reopened.get_item(keys::NAME), None);
}

#[test]
fn restart_restores_draft_on_selection() {
    let temp = tempdir().unwrap();
    let store_path = temp.path().join("local-storage.json");

    {
        let store = FileStore::open(&store_path).unwrap();
        let mut app = App::new(
            WizardController::restore(store),
            temp.path().join("ticket.html"),
        );
        app.handle_input(key(KeyCode::Right));
        app.handle_input(key(KeyCode::Char(' ')));
        app.handle_input(key(KeyCode::Enter));
        app.handle_input(key(KeyCode::Tab));
        type_text(&mut app, "Ada");
    }

    let store = FileStore::open(&store_path).unwrap();
    let app = App::new(
        WizardController::restore(store),
        temp.path().join("ticket.html"),
    );
    assert_eq!(app.step(), WizardStep::Selection);
    assert_eq!(app.wizard.draft().ticket_type, Some(TicketType::Vip));
    assert_eq!(app.highlighted_tier(), TicketType::Vip);
    assert_eq!(app.name_input.value(), "Ada");
    assert!(app.status_message.contains("Restored"));
}

#[test]
fn retyped_photo_path_replaces_uploaded_photo() {
    let temp = tempdir().unwrap();
    let first = temp.path().join("a.png");
    let second = temp.path().join("b.png");
    fs::write(&first, b"first").unwrap();
    fs::write(&second, b"second").unwrap();

    let store = FileStore::open(temp.path().join("local-storage.json")).unwrap();
    let mut app = App::new(
        WizardController::restore(store),
        temp.path().join("ticket.html"),
    );
    app.handle_input(key(KeyCode::Char(' ')));
    app.handle_input(key(KeyCode::Enter));

    type_text(&mut app, &first.display().to_string());
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(
        app.wizard.draft().attendee_photo.as_ref().map(|p| p.file_name.as_str()),
        Some("a.png")
    );

    // Edit the path in place so it never empties out.
    app.handle_input(key(KeyCode::BackTab));
    assert_eq!(app.focus, DetailsField::Photo);
    for _ in 0.."a.png".len() {
        app.handle_input(key(KeyCode::Backspace));
    }
    type_text(&mut app, "b.png");
    assert_eq!(app.photo_input.value(), second.display().to_string());

    app.handle_input(key(KeyCode::Tab));
    type_text(&mut app, "Ada");
    app.handle_input(key(KeyCode::Tab));
    type_text(&mut app, "ada@example.com");
    app.handle_input(key(KeyCode::Enter));

    assert_eq!(app.step(), WizardStep::Confirmation);
    let photo = app.wizard.draft().attendee_photo.as_ref().unwrap();
    assert_eq!(photo.file_name, "b.png");
    assert_eq!(photo.bytes, b"second".to_vec());
}

#[test]
fn restored_photo_is_kept_on_submit() {
    let temp = tempdir().unwrap();
    let store_path = temp.path().join("local-storage.json");
    let photo_path = temp.path().join("me.png");
    fs::write(&photo_path, b"png").unwrap();

    {
        let store = FileStore::open(&store_path).unwrap();
        let mut app = App::new(
            WizardController::restore(store),
            temp.path().join("ticket.html"),
        );
        app.handle_input(key(KeyCode::Char(' ')));
        app.handle_input(key(KeyCode::Enter));
        type_text(&mut app, &photo_path.display().to_string());
        app.handle_input(key(KeyCode::Enter));
        type_text(&mut app, "Ada");
        app.handle_input(key(KeyCode::Tab));
        type_text(&mut app, "ada@example.com");
    }
    fs::remove_file(&photo_path).unwrap();

    let store = FileStore::open(&store_path).unwrap();
    let mut app = App::new(
        WizardController::restore(store),
        temp.path().join("ticket.html"),
    );
    assert_eq!(app.photo_input.value(), "me.png");
    app.handle_input(key(KeyCode::Enter));
    app.focus = DetailsField::Email;
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.step(), WizardStep::Confirmation);
}
