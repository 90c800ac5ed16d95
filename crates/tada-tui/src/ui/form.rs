use crate::app::{App, FormField, InputMode};
use crate::ui::helpers::focused_border_style;
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// The always-visible "new timer" strip: name on the left, target
/// date/time on the right.
pub fn draw_form(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let editing = app.input_mode == InputMode::EditForm;

    let name_focused = editing && app.form_focus == FormField::Name;
    let name_block = Block::default()
        .borders(Borders::ALL)
        .title("Name (optional)")
        .border_style(focused_border_style(name_focused, palette));
    f.render_widget(
        Paragraph::new(app.form_name.as_str()).block(name_block),
        chunks[0],
    );

    let target_focused = editing && app.form_focus == FormField::Target;
    let target_block = Block::default()
        .borders(Borders::ALL)
        .title("Target (YYYY-MM-DD HH:MM)")
        .border_style(focused_border_style(target_focused, palette));
    f.render_widget(
        Paragraph::new(app.form_target.as_str()).block(target_block),
        chunks[1],
    );

    if editing {
        let (chunk, buffer) = match app.form_focus {
            FormField::Name => (chunks[0], &app.form_name),
            FormField::Target => (chunks[1], &app.form_target),
        };

        // Cursor sits after the last typed character, clamped inside
        // the box.
        let cursor_x =
            (chunk.x + 1 + buffer.len() as u16).min(chunk.x + chunk.width.saturating_sub(2));
        let cursor_y = chunk.y + 1;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}
