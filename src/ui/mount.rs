use crate::app::state::HitRegion;
use crate::ui::theme::Theme;
use crate::view::Node;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Draw a node tree into `area`, one node per row. Returns the click
/// targets of the buttons that ended up on screen.
pub fn render(frame: &mut Frame, area: Rect, nodes: &[Node]) -> Vec<HitRegion> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut regions = Vec::new();

    for (row, node) in nodes.iter().enumerate() {
        let Ok(row) = u16::try_from(row) else { break };
        if row >= inner.height {
            break;
        }
        let line_area = Rect::new(inner.x, inner.y + row, inner.width, 1);

        let span = match node {
            Node::Heading(text) => Span::styled(text.as_str(), Theme::heading()),
            Node::Paragraph(text) => Span::styled(text.as_str(), Theme::paragraph()),
            Node::Button { label, on_click } => {
                let text = format!("[ {} ]", label);
                let width = (text.width() as u16).min(inner.width);
                regions.push(HitRegion {
                    area: Rect::new(line_area.x, line_area.y, width, 1),
                    action: on_click.clone(),
                });
                Span::styled(text, Theme::button())
            }
        };

        frame.render_widget(Paragraph::new(Line::from(span)), line_area);
    }

    regions
}
