use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::UiState;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Instant;

pub fn handle_event(ui: &mut UiState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(ui, cevent),
        AppEvent::Tick => {
            ui.expire_status(Instant::now());
            vec![]
        }
    }
}

fn handle_terminal(ui: &mut UiState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(key),
        CEvent::Mouse(mouse) => handle_mouse(ui, mouse),
        CEvent::Resize(_, _) => {
            ui.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(key: KeyEvent) -> Vec<Action> {
    // Windows reports both press and release
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('a') => vec![Action::AddLoop],
        KeyCode::Char('t') => vec![Action::ToggleTracer],
        KeyCode::Char('e') => vec![Action::ExportState],
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_mouse(ui: &mut UiState, mouse: MouseEvent) -> Vec<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => ui
            .hit_test(mouse.column, mouse.row)
            .cloned()
            .into_iter()
            .collect(),
        _ => vec![],
    }
}
