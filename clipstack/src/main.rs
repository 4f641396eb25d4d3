//! src/main.rs
//! Terminal clipboard history

use std::{
    io::{self, Stdout},
    panic::PanicHookInfo,
    process::ExitCode,
};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tracing::{error, info, warn};

use clipstack::{
    AppError, Config, Logger,
    cli::{Cli, CliOutcome},
    controller::{AppContext, Dispatcher, EventLoop},
    model::UIState,
    platform::{ClipboardProvider, MemoryClipboard, SystemClipboard},
    view::{HistoryView, UIRenderer, project, theme::Theme},
};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::parse_from_args(std::env::args_os()) {
        CliOutcome::Run(cli) => cli,
        CliOutcome::Exit { message, code } => {
            if code == 0 {
                print!("{message}");
            } else {
                eprint!("{message}");
            }
            return ExitCode::from(code);
        }
    };

    let (config, load_error) = match load_config(&cli).await {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(1);
        }
    };

    // nothing is constructed from an invalid configuration
    if let Err(err) = config.validate() {
        eprintln!("error: {err}");
        return ExitCode::from(1);
    }

    match run(config, load_error).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Application error: {err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// File settings with command-line overrides on top. An unreadable default
/// config falls back to built-in defaults; an explicit `--config` must load.
async fn load_config(cli: &Cli) -> Result<(Config, Option<AppError>), AppError> {
    let (mut config, load_error) = match &cli.config {
        Some(path) => (Config::load_from(path).await?, None),
        None => match Config::load().await {
            Ok(config) => (config, None),
            Err(err) => (Config::default(), Some(err)),
        },
    };

    cli.apply(&mut config);
    Ok((config, load_error))
}

async fn run(config: Config, load_error: Option<AppError>) -> Result<()> {
    let _log_guard = Logger::init(&config).context("Failed to initialize logging")?;
    info!("Starting clipstack {}", env!("CARGO_PKG_VERSION"));
    if let Some(err) = load_error {
        warn!("Failed to load config, using defaults: {err}");
    }

    setup_panic_handler();

    let mut app = App::new(&config).context("Failed to initialize application")?;
    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

struct App {
    terminal: AppTerminal,
    ctx: AppContext,
    ui: UIState,
    event_loop: EventLoop,
    dispatcher: Dispatcher,
    renderer: UIRenderer,
}

impl App {
    fn new(config: &Config) -> Result<Self> {
        let ctx = AppContext::from_config(config, open_clipboard())?;
        let theme = Theme::from_config(&config.ui.background)?;
        let renderer = UIRenderer::new(theme, ctx.store.capacity());
        let event_loop = EventLoop::new(config.clipboard.poll_interval)
            .context("Failed to install SIGTERM handler")?;

        info!(
            "History capacity {}, layout {:?}, minimize after paste: {}",
            ctx.store.capacity(),
            config.ui.layout,
            ctx.policy.minimize_after_paste
        );

        let terminal = setup_terminal().context("Failed to initialize terminal")?;

        Ok(Self {
            terminal,
            ctx,
            ui: UIState::new(config.ui.layout),
            event_loop,
            dispatcher: Dispatcher::new(),
            renderer,
        })
    }

    async fn run(&mut self) -> Result<()> {
        info!("Starting event loop");
        self.ui.render(&project(&self.ctx.store));

        loop {
            self.draw()?;

            let Some(action) = self.event_loop.next_action(&mut self.ctx, &self.ui).await else {
                break;
            };
            if !self.dispatcher.handle(action, &mut self.ctx, &mut self.ui) {
                break;
            }
        }

        self.log_final_metrics();
        info!("Event loop terminated cleanly");
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        if !self.ui.needs_redraw() {
            return Ok(());
        }

        let Self {
            terminal,
            renderer,
            ui,
            ..
        } = self;
        terminal
            .draw(|frame: &mut Frame<'_>| renderer.render(frame, ui))
            .map_err(|err| AppError::Terminal(err.to_string()))
            .context("Failed to draw terminal")?;

        self.ui.clear_redraw();
        Ok(())
    }

    fn log_final_metrics(&self) {
        let history = self.ctx.store.stats();
        let dispatch = self.dispatcher.stats();
        let render = self.renderer.stats();
        let (terminal_events, clipboard_changes) = self.event_loop.counts();

        info!("Final metrics:");
        info!(
            "  History: {} inserted, {} evicted, {} promoted, {} removed, {} duplicates ignored, {} promote misses",
            history.inserted,
            history.evicted,
            history.promoted,
            history.removed,
            history.duplicates_ignored,
            history.promote_misses
        );
        info!(
            "  Actions: {} total, {} on history",
            dispatch.total_actions, dispatch.history_actions
        );
        info!(
            "  Events: {} terminal, {} clipboard changes",
            terminal_events, clipboard_changes
        );
        info!(
            "  Frames: {} drawn, {} slow, {:.2}ms total",
            render.frames,
            render.slow,
            render.total.as_secs_f64() * 1000.0
        );
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            warn!("Failed to cleanup terminal: {}", e);
        }
    }
}

fn open_clipboard() -> Box<dyn ClipboardProvider> {
    match SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(err) => {
            warn!("{err}; keeping history of this session's pastes only");
            Box::new(MemoryClipboard::new())
        }
    }
}

fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(err).context("Failed to enter alternate screen");
    }

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!("Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    info!("Terminal cleanup complete");
    Ok(())
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
