use crate::app::action::Action;
use crate::config::AppConfig;
use crate::store::Merge;
use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

const STATUS_TTL: Duration = Duration::from_secs(3);

/// The application record held by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub loops: Vec<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Merge patch for [`AppState`]. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loops: Option<Vec<String>>,
}

impl Merge for AppState {
    type Patch = StatePatch;

    fn merge(&mut self, patch: StatePatch) {
        if let Some(loops) = patch.loops {
            self.loops = loops;
        }
    }
}

/// Screen area that triggers an action when clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct HitRegion {
    pub area: Rect,
    pub action: Action,
}

/// Terminal-side state: everything that is not the application record.
#[derive(Debug)]
pub struct UiState {
    pub config: AppConfig,
    pub show_tracer: bool,
    pub hit_regions: Vec<HitRegion>,
    pub status: Option<String>,
    pub status_expires: Option<Instant>,
    pub dirty: bool,
    pub should_quit: bool,
}

impl UiState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            show_tracer: config.tracer.enabled,
            config,
            hit_regions: Vec::new(),
            status: None,
            status_expires: None,
            dirty: true,
            should_quit: false,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(text.into());
        self.status_expires = Some(Instant::now() + STATUS_TTL);
        self.dirty = true;
    }

    /// Drop the status message once it has been shown long enough.
    pub fn expire_status(&mut self, now: Instant) {
        if self.status_expires.is_some_and(|at| now >= at) {
            self.status = None;
            self.status_expires = None;
            self.dirty = true;
        }
    }

    /// Action under the given cell, if any. Later regions win on overlap.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<&Action> {
        self.hit_regions
            .iter()
            .rev()
            .find(|region| {
                let a = region.area;
                column >= a.x && column < a.right() && row >= a.y && row < a.bottom()
            })
            .map(|region| &region.action)
    }

    pub fn status_line(&self) -> String {
        match &self.status {
            Some(text) => text.clone(),
            None => "a/Enter: add loop  t: tracer  e: export  q: quit".to_string(),
        }
    }
}
