//! LazyTable binary: terminal setup and the main event loop.

use std::io::{self, Stdout};

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use lazytable::app::App;
use lazytable::cli::Cli;
use lazytable::config::{config_path, Config};
use lazytable::error::{AppError, Result};
use lazytable::events::EventHandler;
use lazytable::logging;
use lazytable::tasks::TaskSpawner;

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_dir = match logging::init() {
        Ok(dir) => Some(dir),
        Err(e) => {
            eprintln!("Warning: failed to initialize logging: {}", e);
            None
        }
    };

    let result = run(cli).await;
    logging::shutdown();

    if let Err(e) = result {
        tracing::error!(error = %e, "Exiting with error");
        eprintln!("{}", e.user_message());
        if let Some(action) = e.suggested_action() {
            eprintln!("{}", action);
        }
        if let Some(dir) = log_dir {
            eprintln!("See the log in {} for details.", dir.display());
        }
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => config_path()?,
    };
    let mut config = Config::load_from(&path)?;
    cli.apply_to(&mut config);
    logging::log_startup(&path, &config);
    config.warn_inconsistencies();

    let mouse = config.settings.mouse;
    let mut terminal = setup_terminal(mouse)?;
    install_panic_hook(mouse);

    let outcome = event_loop(&mut terminal, config).await;
    restore_terminal(&mut terminal, mouse)?;
    outcome
}

async fn event_loop(terminal: &mut Tui, config: Config) -> Result<()> {
    let events = EventHandler::with_tick_rate(config.settings.tick_rate_ms);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let spawner = TaskSpawner::new(tx);
    let mut app = App::new(config);

    if let Some(source) = app.take_load_request() {
        spawner.spawn_load(source);
    }

    loop {
        while let Ok(message) = rx.try_recv() {
            app.handle_loader_message(message);
        }

        terminal.draw(|frame| app.view(frame))?;

        let event = events.next()?;
        app.update(event);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

fn setup_terminal(mouse: bool) -> Result<Tui> {
    let init = || -> io::Result<Tui> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        Terminal::new(CrosstermBackend::new(stdout))
    };
    init().map_err(|e| AppError::terminal(e.to_string()))
}

fn restore_terminal(terminal: &mut Tui, mouse: bool) -> Result<()> {
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Restore the terminal before the default panic output is printed.
fn install_panic_hook(mouse: bool) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        if mouse {
            let _ = execute!(io::stdout(), DisableMouseCapture);
        }
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));
}
