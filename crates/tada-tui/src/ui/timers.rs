use crate::app::App;
use crate::ui::theme::Palette;
use chrono::Utc;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tada_core::models::TimeBreakdown;
use tada_core::render::{render_model, TimerCard, COMPLETION_MESSAGE};

const CARD_HEIGHT: u16 = 5;

pub fn draw_timers(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let cards = render_model(&app.store, Utc::now());

    if cards.is_empty() {
        draw_empty_state(f, palette, area);
        return;
    }

    let visible = (area.height / CARD_HEIGHT).max(1) as usize;
    // Keep the selection on screen; scroll so it sits at the bottom
    // once the list outgrows the area.
    let first = if app.selected_index >= visible {
        app.selected_index + 1 - visible
    } else {
        0
    };

    for (index, card) in cards.iter().enumerate().skip(first).take(visible) {
        let row = (index - first) as u16;
        if (row + 1) * CARD_HEIGHT > area.height {
            break;
        }
        let card_area = Rect::new(area.x, area.y + row * CARD_HEIGHT, area.width, CARD_HEIGHT);
        draw_card(f, palette, card, card_area, index == app.selected_index);
    }
}

fn draw_empty_state(f: &mut Frame, palette: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Countdowns")
        .border_style(Style::default().fg(palette.border));

    let text = vec![
        Line::from(""),
        Line::from("No active countdowns."),
        Line::from(""),
        Line::from(Span::styled(
            "Press [a] to create your first timer!",
            Style::default().fg(palette.dim),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn draw_card(f: &mut Frame, palette: &Palette, card: &TimerCard, area: Rect, selected: bool) {
    let title = if selected {
        format!("→ {} ", card.name())
    } else {
        format!("{} ", card.name())
    };
    let border_style = if selected {
        Style::default()
            .fg(palette.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);

    let label_style = Style::default().fg(palette.dim);
    let text = match card {
        TimerCard::Active {
            target_display,
            breakdown,
            ..
        } => vec![
            countdown_line(breakdown, palette),
            Line::from(""),
            Line::from(vec![
                Span::styled("Target: ", label_style),
                Span::raw(target_display.as_str()),
            ]),
        ],
        TimerCard::Complete { target_display, .. } => vec![
            Line::from(Span::styled(
                COMPLETION_MESSAGE,
                Style::default()
                    .fg(palette.complete)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Finished at: ", label_style),
                Span::raw(target_display.as_str()),
            ]),
        ],
    };

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn countdown_line(breakdown: &TimeBreakdown, palette: &Palette) -> Line<'static> {
    let value_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(palette.dim);

    Line::from(vec![
        Span::styled(format!("{:02}", breakdown.days), value_style),
        Span::styled(" days   ", label_style),
        Span::styled(format!("{:02}", breakdown.hours), value_style),
        Span::styled(" hours   ", label_style),
        Span::styled(format!("{:02}", breakdown.minutes), value_style),
        Span::styled(" mins   ", label_style),
        Span::styled(format!("{:02}", breakdown.seconds), value_style),
        Span::styled(" secs", label_style),
    ])
}
