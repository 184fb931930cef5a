use super::super::app::App;
use super::content::{build_step_lines, expected_actions, status_message};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};
use ticz_core::booking::WizardStep;
use ticz_core::event::EVENT;
use ticz_core::storage::DraftStore;

pub fn draw<S: DraftStore>(f: &mut Frame, app: &App<S>) {
    let step = app.step();

    // Title | Progress | Body | Status + key legend
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(4),
            ]
            .as_ref(),
        )
        .split(f.area());

    let title_line = Line::from(vec![
        Span::styled("ticz", Style::default().fg(Color::Cyan)),
        Span::raw(" | "),
        Span::styled(EVENT.name, Style::default().fg(Color::White)),
    ]);
    let title = Block::default().borders(Borders::ALL).title(title_line);
    f.render_widget(title, main_chunks[0]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(format!(
            "{} | Step {}/{}",
            step.title(),
            step.number(),
            WizardStep::TOTAL
        )))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(step.progress_percent());
    f.render_widget(gauge, main_chunks[1]);

    // The hint line is already in the gauge title.
    let list_items = build_step_lines(app)
        .into_iter()
        .skip(1)
        .map(ListItem::new)
        .collect::<Vec<_>>();
    let content =
        List::new(list_items).block(Block::default().borders(Borders::ALL).title(step.title()));
    f.render_widget(content, main_chunks[2]);

    let status = status_message(app);
    let status_color = if app.wizard.error().is_some() || status.starts_with('❌') {
        Color::Red
    } else {
        Color::Green
    };
    let legend = Paragraph::new(vec![
        Line::from(Span::styled(status, Style::default().fg(status_color))),
        Line::from(expected_actions(step)),
    ])
    .block(Block::default().borders(Borders::ALL).title("Keys"));
    f.render_widget(legend, main_chunks[3]);
}
