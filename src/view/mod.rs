//! The μPhonor view and its single state transition.
//!
//! [`view`] is a pure function of the state snapshot. Interactive nodes
//! carry an [`Action`] instead of a callback; the event loop resolves the
//! action against the store, which for the button means [`add_loop`].

use crate::app::action::Action;
use crate::app::state::{AppState, StatePatch};
use crate::store::Cell;

pub const TITLE: &str = "μPhonor";
pub const SUBTITLE: &str = "A Micro Holophonor!";
pub const ADD_LOOP_LABEL: &str = "Add Loop";

/// Element descriptor produced by the view.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Heading(String),
    Paragraph(String),
    Button { label: String, on_click: Action },
}

impl Node {
    pub fn text(&self) -> &str {
        match self {
            Node::Heading(text) | Node::Paragraph(text) => text,
            Node::Button { label, .. } => label,
        }
    }
}

pub fn view(state: &AppState) -> Vec<Node> {
    let mut nodes = vec![
        Node::Heading(TITLE.to_string()),
        Node::Paragraph(SUBTITLE.to_string()),
        Node::Button {
            label: ADD_LOOP_LABEL.to_string(),
            on_click: Action::AddLoop,
        },
    ];
    nodes.extend(state.loops.iter().cloned().map(Node::Paragraph));
    nodes
}

/// Append `"loop N"` where N is one past the current count.
pub fn add_loop(cell: &mut impl Cell<AppState>) {
    let loops = &cell.get_state().loops;
    let mut next = Vec::with_capacity(loops.len() + 1);
    next.extend(loops.iter().cloned());
    next.push(format!("loop {}", loops.len() + 1));
    cell.update(StatePatch { loops: Some(next) });
}

/// Plain-text rendition of a node tree, one line per node.
pub fn render_text(nodes: &[Node]) -> Vec<String> {
    nodes
        .iter()
        .map(|node| match node {
            Node::Heading(_) => format!("# {}", node.text()),
            Node::Paragraph(_) => node.text().to_string(),
            Node::Button { .. } => format!("[ {} ]", node.text()),
        })
        .collect()
}
