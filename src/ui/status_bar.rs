use crate::app::state::{AppState, UiState};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, ui: &UiState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(format!(" {} ", ui.status_line()), Theme::status_bar()));

    let counter = format!(" [loops: {}] ", state.loops.len());

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + counter.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        counter,
        Style::default().fg(Theme::ACCENT).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
