mod app;

use std::io::{self, Stdout};
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use nameform_config::FormConfig;
use nameform_core::{
    event::Event,
    logging::{self, LogBuffer},
    snapshot::FileStore,
};

use app::App;

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    let log_buffer = logging::init();
    let config = FormConfig::load().context("failed to load configuration")?;
    let store = match &config.snapshot.path {
        Some(path) => FileStore::new(path),
        None => FileStore::default_location(),
    };
    tracing::info!(delay_step_ms = config.form.delay_step_ms, "nameform starting up");

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &config, store, log_buffer);
    restore_terminal(terminal)?;
    res
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &FormConfig,
    store: FileStore,
    log_buffer: LogBuffer,
) -> Result<()> {
    let mut app = App::new(config, store, log_buffer);
    tracing::info!(path = %app.store().path().display(), "snapshot store ready");
    let max_poll = config.poll_timeout();

    loop {
        // ── Fire due appends and sync logs into the status bar ──
        let now = Instant::now();
        app.bus.publish(Event::Tick { now });
        if app.pump(now) {
            return Ok(());
        }
        app.sync_logs();

        // ── Render ──
        terminal.draw(|f| app.draw(f))?;

        // ── Poll → Publish ──
        if event::poll(app.poll_timeout(Instant::now(), max_poll))? {
            match event::read()? {
                CEvent::Key(key) => app.bus.publish(Event::Key(key)),
                CEvent::Resize(cols, rows) => app.bus.publish(Event::Resize { cols, rows }),
                _ => {}
            }
        }

        // ── Drain → Dispatch ──
        if app.pump(Instant::now()) {
            return Ok(());
        }
    }
}
