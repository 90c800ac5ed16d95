use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Floating validation notice, top-center, over whatever is beneath
/// it. Disappears on its own; Esc closes it early.
pub fn draw_alert(f: &mut Frame, message: &str) {
    let area = f.area();
    // Not enough rows to float the notice below the title bar.
    if area.height < 7 {
        return;
    }

    let width = (message.chars().count() as u16 + 6)
        .max(24)
        .min(area.width.saturating_sub(2));
    let x = (area.width.saturating_sub(width)) / 2;
    let notice_area = Rect::new(x, 4, width, 3);

    f.render_widget(Clear, notice_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " ⚠ Hold on ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(Color::Red));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::White),
    )))
    .alignment(Alignment::Center)
    .block(block);

    f.render_widget(paragraph, notice_area);
}
