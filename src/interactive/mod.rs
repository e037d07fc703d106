use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::config::Settings;
use crate::provider::RentalProvider;
use crate::schemas::VehicleClass;

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;


use self::application::rental_service::RentalService;
use self::constants::DOUBLE_CTRL_C_TIMEOUT_SECS;
use self::domain::models::{Focus, Mode, ProviderRequest, ProviderResponse};
use self::ui::{
    app_state::AppState,
    commands::Command,
    components::{Component, EXIT_PROMPT, rental_form::RentalField},
    events::Message,
    renderer::Renderer,
};

/// The interactive rental console.
///
/// Owns the state, the renderer and the runtime provider calls run on.
/// Completions come back over a channel and are applied between frames.
pub struct RentalConsole {
    state: AppState,
    renderer: Renderer,
    service: Arc<RentalService>,
    runtime: Runtime,
    response_tx: UnboundedSender<ProviderResponse>,
    response_rx: UnboundedReceiver<ProviderResponse>,
    in_flight: usize,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
    message_clear_delay: u64,
    poll_interval: Duration,
}

impl RentalConsole {
    pub fn new(provider: Arc<dyn RentalProvider>, settings: &Settings) -> Result<Self> {
        Self::with_initial_class(provider, settings, settings.default_class)
    }

    pub fn with_initial_class(
        provider: Arc<dyn RentalProvider>,
        settings: &Settings,
        initial_class: VehicleClass,
    ) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;
        let (response_tx, response_rx) = mpsc::unbounded_channel();

        Ok(Self {
            state: AppState::new(initial_class)
                .with_message_clear_delay(settings.message_clear_delay_ms),
            renderer: Renderer::new(),
            service: Arc::new(RentalService::new(provider)),
            runtime,
            response_tx,
            response_rx,
            in_flight: 0,
            last_ctrl_c_press: None,
            message_timer: None,
            message_clear_delay: settings.message_clear_delay_ms,
            poll_interval: Duration::from_millis(settings.event_poll_interval_ms),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;
        info!(class = %self.state.selected_class, "console started");

        let command = self.state.startup();
        self.execute_command(command);

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        info!("console stopped");
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            self.process_responses();

            // Check for scheduled message clear
            if let Some(timer) = self.message_timer {
                if timer.elapsed() >= Duration::from_millis(self.message_clear_delay) {
                    self.message_timer = None;
                    self.handle_message(Message::ClearMessage);
                }
            }

            if poll(self.poll_interval)? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_input(key) {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Applies every completion that has arrived since the last frame.
    fn process_responses(&mut self) {
        while let Ok(response) = self.response_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.handle_message(Message::Provider(response));
        }
    }

    /// Returns true when the console should exit.
    fn handle_input(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return true;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.ui.status = Some(EXIT_PROMPT.to_string());
            self.message_timer = Some(Instant::now());
            return false;
        }

        if let Some(result) = self.handle_global_key(key) {
            return result;
        }

        let message = match self.state.mode {
            Mode::Browse => self.handle_browse_input(key),
            Mode::AddStock => self.renderer.get_stock_form_mut().handle_key(key),
            Mode::ConfirmRental => self.renderer.get_confirmation_dialog_mut().handle_key(key),
            Mode::Help => self.renderer.get_help_dialog_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
        false
    }

    /// Keys that work regardless of the focused pane. `None` passes the key on.
    fn handle_global_key(&mut self, key: KeyEvent) -> Option<bool> {
        if self.state.mode == Mode::Help {
            return None;
        }

        let browsing = self.state.mode == Mode::Browse;
        let message = match key.code {
            KeyCode::Tab if browsing => Message::FocusNext,
            KeyCode::BackTab if browsing => Message::FocusPrevious,
            KeyCode::F(5) => Message::RefreshInventory,
            KeyCode::Char('?' | 'q') if self.is_editing_text() => return None,
            KeyCode::Char('?') => Message::ShowHelp,
            KeyCode::Char('q') if browsing => return Some(true),
            _ => return None,
        };
        self.handle_message(message);
        Some(false)
    }

    /// True while a key could be text typed into a field.
    fn is_editing_text(&mut self) -> bool {
        match (self.state.mode, self.state.focus) {
            (Mode::AddStock, _) => true,
            (Mode::Browse, Focus::InventorySearch) => true,
            (Mode::Browse, Focus::RentalForm) => {
                self.state.rental_form_enabled()
                    && self.renderer.get_rental_form_mut().active_field() != RentalField::Vehicle
            }
            _ => false,
        }
    }

    fn handle_browse_input(&mut self, key: KeyEvent) -> Option<Message> {
        match self.state.focus {
            Focus::TypeSelector => self.renderer.get_type_selector_mut().handle_key(key),
            Focus::Inventory | Focus::InventorySearch => {
                self.renderer.get_inventory_table_mut().handle_key(key)
            }
            Focus::RentalForm => self.renderer.get_rental_form_mut().handle_key(key),
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::Request(request) => self.dispatch(request),
            Command::Batch(commands) => {
                for command in commands {
                    self.execute_command(command);
                }
            }
            Command::ScheduleClearMessage(delay) => {
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = delay;
            }
        }
    }

    fn dispatch(&mut self, request: ProviderRequest) {
        debug!(?request, "spawning provider task");
        self.in_flight += 1;

        let service = Arc::clone(&self.service);
        let tx = self.response_tx.clone();
        self.runtime.spawn(async move {
            let response = service.execute(request).await;
            // The receiver only goes away when the console is dropped.
            let _ = tx.send(response);
        });
    }

    /// Blocks until every dispatched request has been applied.
    #[cfg(test)]
    pub(crate) fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.response_rx.blocking_recv() {
                Some(response) => {
                    self.in_flight -= 1;
                    self.handle_message(Message::Provider(response));
                }
                None => break,
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn start(&mut self) {
        let command = self.state.startup();
        self.execute_command(command);
    }

    #[cfg(test)]
    pub(crate) fn press(&mut self, code: KeyCode) -> bool {
        self.handle_input(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[cfg(test)]
    pub(crate) fn draw(&mut self, terminal: &mut Terminal<ratatui::backend::TestBackend>) {
        // Drawing syncs component state the key handlers read.
        let _ = terminal.draw(|f| self.renderer.render(f, &self.state));
    }
}
