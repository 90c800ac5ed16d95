pub mod alert;
pub mod confetti;
pub mod confirmation;
pub mod form;
pub mod helpers;
pub mod theme;
pub mod timers;

use crate::app::{App, InputMode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use theme::Palette;

pub fn draw(f: &mut Frame, app: &mut App) {
    let palette = theme::palette(app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    draw_title_bar(f, app, &palette, chunks[0]);
    form::draw_form(f, app, &palette, chunks[1]);
    timers::draw_timers(f, app, &palette, chunks[2]);
    draw_status_bar(f, app, &palette, chunks[3]);

    if app.input_mode == InputMode::ConfirmClear {
        confirmation::draw_confirmation_modal(f, app);
    }

    if let Some(notice) = &app.alert {
        alert::draw_alert(f, &notice.message);
    }

    // Confetti goes on top of everything.
    if !app.confetti.is_idle() {
        f.render_stateful_widget(confetti::Confetti, f.area(), &mut app.confetti);
    }
}

fn draw_title_bar(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let count = app.store.len();
    let count_text = if count == 1 {
        "1 countdown".to_string()
    } else {
        format!("{} countdowns", count)
    };

    let left = Line::from(vec![
        Span::styled(
            "🎉 Tada!",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(count_text, Style::default().fg(palette.dim)),
    ]);
    f.render_widget(Paragraph::new(left), inner);

    let right = Line::from(vec![
        Span::styled(
            format!("theme: {}", app.theme.as_str()),
            Style::default().fg(palette.dim),
        ),
        Span::raw("  "),
        Span::styled(
            if app.muted { "♪ off" } else { "♪ on" },
            Style::default().fg(palette.dim),
        ),
    ]);
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), inner);
}

fn draw_status_bar(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let hints = match app.input_mode {
        InputMode::Normal => {
            "[a] add  [j/k] select  [d] delete  [c] clear all  [t] theme  [m] sound  [q] quit"
        }
        InputMode::EditForm => "[Tab] switch field  [Enter] add timer  [Esc] back",
        InputMode::ConfirmClear => "[y] confirm  [n] cancel",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    f.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(palette.dim))),
        inner,
    );

    if !app.status_message.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(
                app.status_message.as_str(),
                Style::default().fg(palette.accent),
            ))
            .alignment(Alignment::Right),
            inner,
        );
    }
}
