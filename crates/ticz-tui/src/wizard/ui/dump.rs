use super::super::app::App;
use super::content::{build_step_lines, expected_actions, status_message};
use crate::widgets::text_gauge;
use ticz_core::event::EVENT;
use ticz_core::storage::DraftStore;

pub fn dump_step<S: DraftStore>(app: &App<S>) -> String {
    let step = app.step();
    let lines = build_step_lines(app);
    let hint = lines
        .first()
        .cloned()
        .unwrap_or_else(|| "🧭 Step: (unknown)".to_string());
    let body_lines = if lines.len() > 1 {
        lines[1..].join("\n")
    } else {
        "(no body content)".to_string()
    };

    format!(
        "STEP: {}\n\n- Header: ticz | {}\n- Hint line: {}\n- Body contents:\n{}\n- Footer:\nProgress: {}\nStatus: {}\n- Expected user actions (keys): {}\n",
        step.title(),
        EVENT.name,
        hint,
        body_lines,
        text_gauge(step.progress_percent(), 20),
        status_message(app),
        expected_actions(step)
    )
}
