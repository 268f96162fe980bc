//! Weather lookup TUI

use std::cell::RefCell;
use std::fs::File;
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
use tracing::{debug, info};
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
use weather_lookup::api::{DEFAULT_ENDPOINT, WeatherClient, WeatherSource};
use weather_lookup::components::{Component, LookupScreen, LookupScreenProps};
use weather_lookup::effect::{self, Effect, LOOKUP_TASK};
use weather_lookup::reducer::reducer;
use weather_lookup::state::{AppState, DEFAULT_CITY, PULSE_TICK_MS};

/// Look up current weather for a city from a backend weather endpoint
#[derive(Parser, Debug)]
#[command(name = "weather-lookup")]
#[command(about = "A terminal weather lookup backed by a /api/weather endpoint")]
struct Args {
    /// City name pre-filled in the input
    #[arg(long, short, default_value = DEFAULT_CITY)]
    city: String,

    /// Backend weather endpoint; the city is sent as the `city` query parameter
    #[arg(long, short, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum LookupComponentId {
    Screen,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum LookupContext {
    Main,
}

impl EventRoutingState<LookupComponentId, LookupContext> for AppState {
    fn focused(&self) -> Option<LookupComponentId> {
        Some(LookupComponentId::Screen)
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
    let Args {
        city,
        endpoint,
        log_file,
        debug: debug_args,
    } = Args::parse();

    if let Some(path) = log_file.as_deref() {
        init_logging(path)?;
    }

    let client = WeatherClient::new(&endpoint)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    info!(endpoint = client.endpoint(), "weather lookup starting");
    let source: Arc<dyn WeatherSource> = Arc::new(client);

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move { Ok::<AppState, io::Error>(AppState::new(city)) })
        .await
        .map_err(debug_error)?;

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

    let result = run_app(&mut terminal, &debug, store, replay_actions, source).await;

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

    info!("weather lookup exiting");
    Ok(())
}

/// Logs go to a file; stdout belongs to the terminal UI
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("weather_lookup=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::other(format!("failed to install logger: {e}")))
}

struct LookupUi {
    screen: LookupScreen,
}

impl LookupUi {
    fn new() -> Self {
        Self {
            screen: LookupScreen::new(),
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
        event_ctx.set_component_area(LookupComponentId::Screen, area);

        let props = LookupScreenProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.screen.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = LookupScreenProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.screen.handle_event(event, props).into_iter().collect();
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
    replay_actions: Vec<ReplayItem<Action>>,
    source: Arc<dyn WeatherSource>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(LookupUi::new()));
    let mut bus: EventBus<AppState, Action, LookupComponentId, LookupContext> = EventBus::new();
    let keybindings: Keybindings<LookupContext> = Keybindings::new();

    let ui_screen = Rc::clone(&ui);
    bus.register(LookupComponentId::Screen, move |event, state| {
        ui_screen.borrow_mut().handle_event(&event.kind, state)
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
            None,
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(PULSE_TICK_MS),
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
            move |effect, ctx| handle_effect(effect, ctx, Arc::clone(&source)),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, source: Arc<dyn WeatherSource>) {
    match effect {
        Effect::FetchWeather { query, request_id } => {
            debug!(city = %query, request_id, "spawning lookup task");
            // Runs to completion; the reducer never issues a second while one is pending
            ctx.tasks().spawn(LOOKUP_TASK, async move {
                effect::run_lookup(source.as_ref(), query, request_id).await
            });
        }
    }
}
