mod layout;
mod mount;
mod status_bar;
mod theme;
mod tracer_panel;

pub use layout::validate_mounts;

use crate::app::state::{AppState, HitRegion, UiState};
use crate::tracer::Tracer;
use crate::view;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

/// Draw one frame and return the click targets it produced.
pub fn render(
    frame: &mut Frame,
    state: &AppState,
    ui: &UiState,
    tracer: &Tracer<AppState>,
) -> Vec<HitRegion> {
    let mount = ui.config.ui.mount.as_str();
    let show_side = ui.show_tracer || mount == layout::SIDE_REGION;
    let app_layout = layout::compute_layout(frame.area(), show_side);

    render_title_bar(frame, app_layout.title_bar, mount, tracer.selector());

    let mut regions = Vec::new();
    if let Some(area) = app_layout.region(mount) {
        regions = mount::render(frame, area, &view::view(state));
    }

    if ui.show_tracer {
        if let Some(area) = app_layout.region(tracer.selector()) {
            tracer_panel::render(frame, area, tracer);
        }
    }

    status_bar::render(frame, app_layout.status_bar, state, ui);
    regions
}

fn render_title_bar(frame: &mut Frame, area: Rect, mount: &str, selector: &str) {
    let line = Line::from(vec![
        Span::styled(" uphonor ", Theme::title()),
        Span::styled(
            format!(" #{} · #{}", mount, selector),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::config::AppConfig;
    use crate::store::Store;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Harness {
        store: Store<AppState>,
        tracer: Rc<RefCell<Tracer<AppState>>>,
        ui: UiState,
        terminal: Terminal<TestBackend>,
    }

    impl Harness {
        fn new(config: AppConfig) -> Self {
            let tracer = Rc::new(RefCell::new(Tracer::new(&config.tracer)));
            let mut store = Store::new(AppState::new());
            let sink = tracer.clone();
            store.subscribe(move |s: &AppState| sink.borrow_mut().record(s));
            Self {
                store,
                tracer,
                ui: UiState::new(config),
                terminal: Terminal::new(TestBackend::new(100, 20)).unwrap(),
            }
        }

        fn draw(&mut self) -> Vec<String> {
            let Harness {
                store,
                tracer,
                ui,
                terminal,
            } = self;
            let tracer = tracer.borrow();
            let mut regions = Vec::new();
            terminal
                .draw(|f| regions = render(f, store.get_state(), ui, &tracer))
                .unwrap();
            ui.hit_regions = regions;

            let buffer = terminal.backend().buffer();
            (0..buffer.area.height)
                .map(|y| {
                    (0..buffer.area.width)
                        .map(|x| buffer[(x, y)].symbol())
                        .collect::<String>()
                })
                .collect()
        }
    }

    fn contains(rows: &[String], text: &str) -> bool {
        rows.iter().any(|row| row.contains(text))
    }

    fn row_of(rows: &[String], text: &str) -> Option<usize> {
        rows.iter().position(|row| row.contains(text))
    }

    #[test]
    fn test_initial_frame() {
        let mut h = Harness::new(AppConfig::default());
        let rows = h.draw();
        assert!(contains(&rows, "μPhonor"));
        assert!(contains(&rows, "A Micro Holophonor!"));
        assert!(contains(&rows, "[ Add Loop ]"));
        assert!(!contains(&rows, "loop 1"));
        assert!(contains(&rows, "[loops: 0]"));
    }

    #[test]
    fn test_loops_render_in_creation_order() {
        let mut h = Harness::new(AppConfig::default());
        for _ in 0..3 {
            view::add_loop(&mut h.store);
        }
        let rows = h.draw();
        let first = row_of(&rows, "loop 1").unwrap();
        let second = row_of(&rows, "loop 2").unwrap();
        let third = row_of(&rows, "loop 3").unwrap();
        assert!(first < second && second < third);
        assert!(contains(&rows, "[loops: 3]"));
    }

    #[test]
    fn test_button_hit_region_matches_drawn_label() {
        let mut h = Harness::new(AppConfig::default());
        let rows = h.draw();
        assert_eq!(h.ui.hit_regions.len(), 1);
        let region = &h.ui.hit_regions[0];
        assert_eq!(region.action, Action::AddLoop);
        assert_eq!(row_of(&rows, "[ Add Loop ]"), Some(region.area.y as usize));
        assert_eq!(
            h.ui.hit_test(region.area.x, region.area.y),
            Some(&Action::AddLoop)
        );
    }

    #[test]
    fn test_tracer_panel_shows_states() {
        let mut h = Harness::new(AppConfig::default());
        view::add_loop(&mut h.store);
        let rows = h.draw();
        assert!(contains(&rows, "Tracer (2)"));
        assert!(contains(&rows, r#"{"loops":[]}"#));
        assert!(contains(&rows, r#"{"loops":["loop 1"]}"#));
    }

    #[test]
    fn test_tracer_panel_matches_headless_lines() {
        let mut h = Harness::new(AppConfig::default());
        view::add_loop(&mut h.store);
        let rows = h.draw();
        let tracer = h.tracer.borrow();
        for line in tracer.lines() {
            assert!(contains(&rows, &line), "missing {line}");
        }
        let last = tracer.latest().unwrap().at.format("%H:%M:%S").to_string();
        assert!(contains(&rows, &format!("Tracer (2) last {}", last)));
    }

    #[test]
    fn test_hidden_tracer() {
        let mut h = Harness::new(AppConfig::default());
        h.ui.show_tracer = false;
        let rows = h.draw();
        assert!(!contains(&rows, "Tracer ("));
        assert!(contains(&rows, "[ Add Loop ]"));
    }

    #[test]
    fn test_view_mounted_on_side_region() {
        let mut config = AppConfig::default();
        config.ui.mount = "tracer".into();
        config.tracer.selector = "app".into();
        let mut h = Harness::new(config);
        h.draw();
        assert!(h.ui.hit_regions[0].area.x > 40);
    }

    #[test]
    fn test_tracer_does_not_touch_store() {
        let mut h = Harness::new(AppConfig::default());
        h.draw();
        h.draw();
        assert_eq!(h.store.revision(), 0);
        assert_eq!(h.tracer.borrow().total(), 1);
    }
}
