mod app;
mod cli;
mod config;
mod debug;
mod error;
mod logging;
mod store;
mod tracer;
mod ui;
mod view;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::{AppState, UiState};
use crate::cli::{Cli, Commands};
use crate::logging::StateLogger;
use crate::store::{Store, SubscriptionId};
use crate::tracer::Tracer;
use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config
    let cfg = match &cli.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };

    logging::init(&cfg.logging)?;
    ui::validate_mounts(&cfg.ui.mount, &cfg.tracer.selector)?;

    match cli.command {
        Some(Commands::Headless {
            clicks,
            export,
            trace,
        }) => return run_headless(&cfg, clicks, export, trace),
        Some(Commands::InitConfig) => {
            let path = cli.config.unwrap_or_else(config::config_path);
            config::save_config_to(&cfg, &path)?;
            println!("Wrote {}", path.display());
            return Ok(());
        }
        None => {}
    }

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// The tracer shared with the renderer, plus its subscription while it is
/// recording.
struct TracerLink {
    tracer: Rc<RefCell<Tracer<AppState>>>,
    subscription: Option<SubscriptionId>,
}

impl TracerLink {
    fn attach(&mut self, store: &mut Store<AppState>) {
        if self.subscription.is_none() {
            let sink = self.tracer.clone();
            let id = store.subscribe(move |state: &AppState| sink.borrow_mut().record(state));
            self.subscription = Some(id);
        }
    }

    fn detach(&mut self, store: &mut Store<AppState>) {
        if let Some(id) = self.subscription.take() {
            if !store.unsubscribe(id) {
                tracing::warn!(id, "tracer subscription already gone");
            }
        }
    }
}

/// Create the store with its standing observers: the state logger and,
/// when enabled, the tracer.
fn build_store(cfg: &config::AppConfig) -> (Store<AppState>, TracerLink) {
    let mut store = Store::new(AppState::new());
    store.subscribe(StateLogger);

    let mut link = TracerLink {
        tracer: Rc::new(RefCell::new(Tracer::new(&cfg.tracer))),
        subscription: None,
    };
    if cfg.tracer.enabled {
        link.attach(&mut store);
    }

    (store, link)
}

fn run_headless(cfg: &config::AppConfig, clicks: usize, export: bool, trace: bool) -> Result<()> {
    let (mut store, link) = build_store(cfg);

    for _ in 0..clicks {
        view::add_loop(&mut store);
    }

    for line in view::render_text(&view::view(store.get_state())) {
        println!("{}", line);
    }
    if trace {
        println!();
        for line in link.tracer.borrow().lines() {
            println!("{}", line);
        }
    }
    if export {
        println!();
        println!("{}", debug::export_state(&store)?);
    }
    Ok(())
}

/// Apply one action against the store and the UI.
fn apply_action(
    store: &mut Store<AppState>,
    ui: &mut UiState,
    link: &mut TracerLink,
    action: Action,
) {
    match action {
        Action::AddLoop => view::add_loop(store),
        Action::ToggleTracer if !ui.config.tracer.enabled => {
            ui.set_status("Tracer disabled; set tracer.enabled = true in config.toml")
        }
        Action::ToggleTracer => {
            // A hidden tracer stops recording
            if ui.show_tracer {
                link.detach(store);
            } else {
                link.attach(store);
            }
            ui.show_tracer = !ui.show_tracer;
            ui.dirty = true;
            tracing::debug!(
                shown = ui.show_tracer,
                observers = store.subscriber_count(),
                "tracer toggled"
            );
        }
        Action::ExportState => match ui.config.debug.export_path.clone() {
            Some(path) => match debug::write_export(&*store, &path) {
                Ok(()) => ui.set_status(format!("State exported to {}", path.display())),
                Err(e) => {
                    tracing::error!("Export failed: {:#}", e);
                    ui.set_status(format!("Export failed: {}", e));
                }
            },
            None => ui.set_status("Set debug.export_path in config.toml to enable export"),
        },
        Action::Quit => ui.should_quit = true,
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let tick_rate = Duration::from_millis(cfg.ui.tick_rate_ms.max(1));
    let (mut store, mut link) = build_store(&cfg);
    let mut ui_state = UiState::new(cfg);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    tracing::info!(mount = %ui_state.config.ui.mount, "mounted view");

    // Main event loop
    loop {
        if ui_state.dirty {
            let tracer = link.tracer.borrow();
            let mut regions = Vec::new();
            terminal.draw(|f| regions = ui::render(f, store.get_state(), &ui_state, &tracer))?;
            ui_state.hit_regions = regions;
            ui_state.dirty = false;
        }

        let Some(event) = event_rx.recv().await else {
            break;
        };

        let revision = store.revision();
        for action in handler::handle_event(&mut ui_state, event) {
            apply_action(&mut store, &mut ui_state, &mut link, action);
        }
        if store.revision() != revision {
            ui_state.dirty = true;
        }

        if ui_state.should_quit {
            break;
        }
    }

    Ok(())
}
