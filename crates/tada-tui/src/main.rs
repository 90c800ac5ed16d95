mod app;
mod effects;
mod tick;
mod ui;

use anyhow::Result;
use app::{App, InputMode};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use effects::RodioEffects;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tada_core::storage::{get_config_dir, PrefsStorage};
use tick::TickScheduler;
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::info;

fn setup_logging() -> Result<()> {
    let mut log_path = std::env::temp_dir();
    log_path.push("tada.log");

    let log_file = std::fs::File::create(log_path)?;
    let subscriber = tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter("tada_tui=debug,tada_core=debug")
        .json()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        let _ = crossterm::execute!(std::io::stdout(), crossterm::cursor::Show);

        tracing::error!(?panic_info, "Application panicked");

        eprintln!("A fatal error occurred: {}", panic_info);

        original_hook(panic_info);
    }));
}

#[derive(Parser, Debug)]
#[command(name = "tada")]
#[command(about = "Countdown timers with a party at the end", long_about = None)]
struct Args {
    /// Directory for prefs.json; defaults to the platform config dir
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Start with the celebration sound off
    #[arg(long)]
    muted: bool,
}

fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.input_mode == InputMode::ConfirmClear {
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter | KeyCode::Char(' ') => {
                app.confirm_clear_all();
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('q') => {
                app.cancel_modal();
            }
            _ => {}
        }
        return;
    }

    if app.input_mode == InputMode::EditForm {
        match code {
            KeyCode::Enter => app.submit_form(),
            KeyCode::Tab => app.form_toggle_focus(),
            KeyCode::Backspace => app.form_backspace(),
            KeyCode::Esc => app.close_form(),
            KeyCode::Char(c) => app.form_push(c),
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc => app.dismiss_alert(),
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_form(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('c') => app.request_clear_all(),
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char('m') => app.toggle_mute(),
        _ => {}
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;
    setup_panic_hook();
    info!("Tada starting up");

    let args = Args::parse();

    let config_dir = args.config_dir.unwrap_or_else(get_config_dir);
    let prefs = PrefsStorage::new(config_dir);

    let (tick_tx, mut tick_rx) = mpsc::channel(32);
    let scheduler = TickScheduler::new(tick_tx);

    let mut app = App::new(prefs, scheduler, Box::new(RodioEffects), args.muted);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut last_anim = std::time::Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if app.should_quit {
            break;
        }

        tokio::select! {
            Some(_) = tick_rx.recv() => {
                app.on_tick(chrono::Utc::now());
            }
            _ = tokio::time::sleep(Duration::from_millis(16)) => {
                if last_anim.elapsed() >= Duration::from_millis(30) {
                    app.confetti.tick();
                    last_anim = std::time::Instant::now();
                }

                app.expire_alert();

                if event::poll(Duration::from_millis(0))? {
                    let event = event::read()?;
                    tracing::debug!(?event, "Received event");
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            handle_key_event(&mut app, key.code, key.modifiers);
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Tada shutting down");
    Ok(())
}
