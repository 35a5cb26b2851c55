use crate::error::MountError;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const MAIN_REGION: &str = "app";
pub const SIDE_REGION: &str = "tracer";

pub struct AppLayout {
    pub title_bar: Rect,
    pub main: Rect,
    pub side: Option<Rect>,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Look up a mount region by id. The side region exists only while
    /// the tracer panel is shown.
    pub fn region(&self, id: &str) -> Option<Rect> {
        match id {
            MAIN_REGION => Some(self.main),
            SIDE_REGION => self.side,
            _ => None,
        }
    }
}

/// Check that both mount ids name known regions and do not collide.
pub fn validate_mounts(mount: &str, tracer: &str) -> Result<(), MountError> {
    for id in [mount, tracer] {
        if id != MAIN_REGION && id != SIDE_REGION {
            return Err(MountError::NotFound(id.to_string()));
        }
    }
    if mount == tracer {
        return Err(MountError::Shared(mount.to_string()));
    }
    Ok(())
}

pub fn compute_layout(area: Rect, show_side: bool) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(3),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let title_bar = main_chunks[0];
    let content = main_chunks[1];
    let status_bar = main_chunks[2];

    if !show_side {
        return AppLayout {
            title_bar,
            main: content,
            side: None,
            status_bar,
        };
    }

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Min(24),        // Main region
            Constraint::Percentage(50), // Side region
        ])
        .split(content);

    AppLayout {
        title_bar,
        main: h_chunks[0],
        side: Some(h_chunks[1]),
        status_bar,
    }
}
