use crate::app::state::AppState;
use crate::tracer::Tracer;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, tracer: &Tracer<AppState>) {
    let block = Block::default()
        .title(title(tracer))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let visible = block.inner(area).height as usize;

    // Newest entries stay at the bottom
    let skip = tracer.len().saturating_sub(visible);
    let items: Vec<ListItem> = tracer
        .entries()
        .skip(skip)
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", entry.stamp()), Theme::trace_index()),
                Span::styled(entry.state_json(), Theme::trace_state()),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn title(tracer: &Tracer<AppState>) -> String {
    match tracer.latest() {
        Some(entry) => format!(" Tracer ({}) last {} ", tracer.total(), entry.at.format("%H:%M:%S")),
        None => format!(" Tracer ({}) ", tracer.total()),
    }
}
