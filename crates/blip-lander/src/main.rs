use blip_client::{BlipApi, DemoClient};
use blip_config::AppConfig;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;

mod action_creators;
mod actions;
mod commands;
mod dispatcher;
mod domain_models;
mod logger;
mod metrics;
mod middleware;
mod reducers;
mod state;
mod store;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use domain_models::{Location, QueryPreferences, RequestGenerations};
use metrics::LogMetricsSink;
use middleware::{
    api_middleware::ApiMiddleware, keyboard_middleware::KeyboardMiddleware,
    logging::LoggingMiddleware, prompt_middleware::PromptMiddleware,
    route_middleware::RouteMiddleware,
};
use state::{AppState, RootViewState};
use store::Store;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting blip, logging to {}", log_file.display());

    let config = AppConfig::load();

    // First argument is the initial location, e.g. "/patients/11/data?units=mmoll"
    let initial = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    let query_prefs = match Location::parse(&initial) {
        Ok(location) => QueryPreferences::from_query(&location.query),
        Err(e) => {
            log::warn!("Ignoring query of initial location {:?}: {}", initial, e);
            QueryPreferences::default()
        }
    };
    let browser_supported = std::env::var("TERM").map_or(true, |term| term != "dumb");

    let runtime = tokio::runtime::Runtime::new()?;
    let api: Arc<dyn BlipApi> = Arc::new(
        DemoClient::bundled()?.with_latency(Duration::from_millis(config.demo_latency_ms)),
    );
    log::info!("Using demo backend in place of {}", config.api_url);

    let mut store = Store::new(AppState::new(
        config,
        RootViewState::new(query_prefs, browser_supported),
    ));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(PromptMiddleware::new()));
    store.add_middleware(Box::new(RouteMiddleware::new(
        Arc::clone(&api),
        Arc::new(LogMetricsSink),
    )));
    store.add_middleware(Box::new(ApiMiddleware::new(
        runtime.handle().clone(),
        api,
        RequestGenerations::new(),
    )));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    store.dispatch(Action::navigate(initial));

    // Main event loop
    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Event loop failed: {}", err);
    }

    log::info!("Exiting blip");
    result.map_err(Into::into)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> io::Result<()> {
    loop {
        // Pick up completions of background requests
        store.process_pending();

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}
