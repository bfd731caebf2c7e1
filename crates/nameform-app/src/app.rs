use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;

use nameform_config::FormConfig;
use nameform_core::{
    bus::EventBus,
    event::Event,
    input::InputField,
    logging::{self, LogBuffer, LogLevel},
    screen::FormScreen,
    snapshot::SnapshotStore,
};
use nameform_ui::{
    input::render_input_row,
    layout::{form_layout, BUTTON_WIDTH},
    messages::{render_messages, MessageListState},
    shell::{render_shell, ShellView},
};

const PAGE: usize = 5;

pub struct App<S: SnapshotStore> {
    pub bus: EventBus,
    pub screen: FormScreen,
    pub input: InputField,
    pub list: MessageListState,
    store: S,
    delay_step: Duration,
    log_buffer: LogBuffer,
    status_line: String,
}

impl<S: SnapshotStore> App<S> {
    pub fn new(config: &FormConfig, store: S, log_buffer: LogBuffer) -> Self {
        let mut app = Self {
            bus: EventBus::new(),
            screen: FormScreen::create(config.delay_step()),
            input: InputField::new(),
            list: MessageListState::default(),
            store,
            delay_step: config.delay_step(),
            log_buffer,
            status_line: "Type a name and press Enter.".to_string(),
        };
        if config.snapshot.restore_on_launch {
            app.restore_from_store();
        }
        app
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// Show the newest info-or-worse log entry in the status bar.
    pub fn sync_logs(&mut self) {
        if let Some(entry) = logging::drain(&self.log_buffer)
            .into_iter()
            .rev()
            .find(|entry| entry.level >= LogLevel::Info)
        {
            self.status_line = entry.to_string();
        }
    }

    /// Map a key press onto input edits, list scrolling, or bus events.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.bus.publish(Event::Quit),
                KeyCode::Char('r') => self.bus.publish(Event::Recreate),
                _ => {}
            }
            return;
        }

        let total = self.screen.cards().len();
        match key.code {
            KeyCode::Enter => {
                let input = self.input.take();
                self.bus.publish(Event::Submit { input });
            }
            KeyCode::Esc => self.bus.publish(Event::Quit),
            KeyCode::F(5) => self.bus.publish(Event::Recreate),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.cursor_left(),
            KeyCode::Right => self.input.cursor_right(),
            KeyCode::Home => self.input.cursor_home(),
            KeyCode::End => self.input.cursor_end(),
            KeyCode::Up => self.list.scroll_up(1, total),
            KeyCode::Down => self.list.scroll_down(1),
            KeyCode::PageUp => self.list.scroll_up(PAGE, total),
            KeyCode::PageDown => self.list.scroll_down(PAGE),
            KeyCode::Char(c) => self.input.insert_char(c),
            _ => {}
        }
    }

    /// Handle one drained event. Returns `true` when the app should exit.
    pub fn dispatch(&mut self, event: Event, now: Instant) -> bool {
        match event {
            Event::Tick { now } => {
                self.screen.advance(now);
            }
            Event::Key(key) => self.handle_key(key),
            Event::Resize { cols, rows } => {
                tracing::debug!(cols, rows, "terminal resized");
            }
            Event::Submit { input } => {
                self.screen.submit(&input, now);
                self.list.reset();
            }
            Event::Recreate => self.recreate(),
            Event::Quit => {
                self.persist();
                return true;
            }
        }
        false
    }

    /// Drain the bus and dispatch everything on it.
    pub fn pump(&mut self, now: Instant) -> bool {
        let mut quit = false;
        // Key handling can publish follow-up events, so keep draining.
        while self.bus.has_pending() {
            for event in self.bus.drain() {
                if self.dispatch(event, now) {
                    quit = true;
                }
            }
            if quit {
                break;
            }
        }
        quit
    }

    /// How long the loop may block on input before the next append is due.
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        match self.screen.next_due() {
            Some(due) => due.saturating_duration_since(now).min(max),
            None => max,
        }
    }

    /// Tear the screen down and build a new one from its snapshot.
    ///
    /// The new screen is restored from the snapshot just taken; the store
    /// only keeps a copy, so a failed save loses nothing on screen. Appends
    /// still pending on the old screen are dropped with it, and the
    /// accepted-submit counter starts again from zero.
    pub fn recreate(&mut self) {
        let snapshot = self.screen.save_snapshot();
        if let Err(err) = self.store.save(&snapshot) {
            tracing::warn!(error = %format!("{err:#}"), "failed to save snapshot");
        }

        let old = std::mem::replace(&mut self.screen, FormScreen::create(self.delay_step));
        let dropped = old.destroy();

        self.screen.restore_snapshot(snapshot);
        self.list.reset();
        tracing::info!(
            dropped,
            messages = self.screen.messages().len(),
            "screen recreated"
        );
    }

    /// Save the current messages ahead of exit.
    pub fn persist(&mut self) {
        let snapshot = self.screen.save_snapshot();
        match self.store.save(&snapshot) {
            Ok(()) => tracing::info!(messages = snapshot.messages.len(), "snapshot persisted"),
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "failed to persist snapshot")
            }
        }
    }

    fn restore_from_store(&mut self) {
        match self.store.load() {
            Ok(Some(snapshot)) => self.screen.restore_snapshot(snapshot),
            Ok(None) => tracing::debug!("no snapshot to restore"),
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "snapshot unreadable; starting empty")
            }
        }
    }

    pub fn draw(&self, f: &mut Frame) {
        let rects = form_layout(f.area(), BUTTON_WIDTH);
        let view = ShellView {
            title: "NAMEFORM",
            status_line: self.status_line(),
            accepted: self.screen.pending_count(),
            in_flight: self.screen.in_flight(),
            message_count: self.screen.messages().len(),
        };

        render_shell(f, rects, view, |f, rects| {
            render_input_row(f, rects.input, rects.button, &self.input, true);
            render_messages(f, rects.messages, self.screen.cards(), &self.list);
        });
    }
}
