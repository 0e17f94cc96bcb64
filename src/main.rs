//! Weather lookup TUI

use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_lookup::action::Action;
use weather_lookup::components::{Component, WeatherDisplay, WeatherDisplayProps};
use weather_lookup::config::{
    DEFAULT_BASE_URL, DEFAULT_ICON_BASE_URL, DEFAULT_MOCK_DELAY_MS, DEFAULT_TIMEOUT_SECS,
    LookupConfig,
};
use weather_lookup::effect::Effect;
use weather_lookup::reducer::reducer;
use weather_lookup::resolver::{WeatherResolver, resolver_for};
use weather_lookup::state::{AppState, LOADING_ANIM_TICK_MS};

/// Look up current weather for a city
#[derive(Parser, Debug)]
#[command(name = "weather-lookup")]
#[command(about = "Current weather lookup, live from OpenWeatherMap or from demo data")]
struct Args {
    /// OpenWeatherMap API key, or a full request URL containing `appid=`.
    /// Without one the built-in demo data is used.
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// City to search for on startup
    #[arg(long, short)]
    city: Option<String>,

    /// Provider base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Provider icon base URL
    #[arg(long, default_value = DEFAULT_ICON_BASE_URL)]
    icon_base_url: String,

    /// Artificial delay for demo lookups, in milliseconds
    #[arg(long, default_value_t = DEFAULT_MOCK_DELAY_MS)]
    mock_delay_ms: u64,

    /// HTTP timeout for live lookups, in seconds (minimum 1)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: u64,

    /// Write logs here (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

impl Args {
    fn lookup_config(&self) -> LookupConfig {
        LookupConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            icon_base_url: self.icon_base_url.clone(),
            mock_delay_ms: self.mock_delay_ms,
            timeout_secs: self.timeout_secs,
        }
    }
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum LookupComponentId {
    Page,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum LookupContext {
    Main,
}

impl EventRoutingState<LookupComponentId, LookupContext> for AppState {
    fn focused(&self) -> Option<LookupComponentId> {
        Some(LookupComponentId::Page)
    }

    fn modal(&self) -> Option<LookupComponentId> {
        None
    }

    fn binding_context(&self, _id: LookupComponentId) -> LookupContext {
        LookupContext::Main
    }

    fn default_context(&self) -> LookupContext {
        LookupContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = args.lookup_config();
    let initial_city = args.city.clone();
    let debug = DebugSession::new(args.debug);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let resolver = resolver_for(&config).map_err(io::Error::other)?;
    info!(mode = ?resolver.mode(), "weather resolver ready");

    let mut state = debug
        .load_state_or_else_async({
            let config = config.clone();
            move || async move { Ok::<AppState, io::Error>(AppState::new(config)) }
        })
        .await
        .map_err(debug_error)?;

    // A replayed snapshot must not override the configured mode.
    state.mode = config.mode();
    state.config = config;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(
        &mut terminal,
        &debug,
        store,
        resolver,
        initial_city,
        replay_actions,
    )
    .await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

/// Logs go to a file or nowhere; the terminal belongs to the UI.
fn init_logging(path: Option<&Path>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

struct LookupUi {
    display: WeatherDisplay,
}

impl LookupUi {
    fn new() -> Self {
        Self {
            display: WeatherDisplay::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<LookupComponentId>,
    ) {
        event_ctx.set_component_area(LookupComponentId::Page, area);

        let props = WeatherDisplayProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.display.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.display.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    resolver: Arc<dyn WeatherResolver>,
    initial_city: Option<String>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(LookupUi::new()));
    let mut bus: EventBus<AppState, Action, LookupComponentId, LookupContext> = EventBus::new();
    let keybindings: Keybindings<LookupContext> = Keybindings::new();

    let ui_page = Rc::clone(&ui);
    bus.register(LookupComponentId::Page, move |event, state| {
        ui_page.borrow_mut().handle_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            initial_city.map(Action::SearchSubmit),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(LOADING_ANIM_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &resolver),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, resolver: &Arc<dyn WeatherResolver>) {
    match effect {
        Effect::ResolveWeather { city } => {
            let resolver = Arc::clone(resolver);
            // Same key: a newer search replaces one still in flight.
            ctx.tasks().spawn("weather", async move {
                match resolver.resolve(&city).await {
                    Ok(reading) => Action::WeatherDidLoad(reading),
                    Err(e) => Action::WeatherDidError(e.to_string()),
                }
            });
        }
    }
}
