//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the interactive
//! state of the package manager completely decoupled from I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Routes keys by [`Mode`]: list navigation and uninstall while browsing,
//!   line editing and install while searching.
//! - Owns the installed package snapshot, replaced wholesale on every load.
//! - Tracks the loading flag. While a command is outstanding every key except
//!   [`KeyInput::Interrupt`] is ignored, so no second command can overlap it.
//! - Presents command results through the status line and `last_error`.

use pipdeck_client::{ClientError, InstalledPackage};

use crate::{AppAction, AppError, AppEvent, Command, KeyInput, Mode, SearchInput, ValidationError};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable without a terminal or network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    /// Current interaction mode.
    mode: Mode,
    /// Installed packages, in the order the bridge reported them.
    packages: Vec<InstalledPackage>,
    /// Cursor into `packages`. Always 0 when the list is empty.
    selected: usize,
    /// Package name being typed.
    search: SearchInput,
    /// Status line. `None` if nothing to report.
    status_message: Option<String>,
    /// Most recent failure. Cleared on mode switch and on success.
    last_error: Option<AppError>,
    /// A network-backed command is outstanding.
    loading: bool,
    /// Spinner animation frame, advanced on ticks while loading.
    spinner_frame: usize,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App in browsing mode, waiting for the initial package list.
    pub fn new() -> Self {
        Self {
            mode: Mode::Browsing,
            packages: Vec::new(),
            selected: 0,
            search: SearchInput::new(),
            status_message: None,
            last_error: None,
            loading: true,
            spinner_frame: 0,
            terminal_size: (80, 24),
        }
    }

    /// Actions to run once at startup: the initial list load and first frame.
    pub fn start(&self) -> Vec<AppAction> {
        vec![AppAction::Dispatch(Command::FetchPackages), AppAction::Render]
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::Tick => {
                if self.loading {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                    vec![AppAction::Render]
                } else {
                    vec![]
                }
            },
            AppEvent::PackagesLoaded { packages } => {
                self.packages = packages;
                self.clamp_selection();
                self.loading = false;
                if self.status_message.is_none() {
                    self.status_message = Some(package_count_summary(self.packages.len()));
                }
                vec![AppAction::Render]
            },
            AppEvent::OperationSucceeded { message } => {
                tracing::info!(%message, "operation succeeded");
                self.status_message = Some(message);
                self.last_error = None;
                // Stays loading until the refresh below lands.
                self.loading = true;
                vec![AppAction::Dispatch(Command::FetchPackages), AppAction::Render]
            },
            AppEvent::Error { cause } => {
                tracing::warn!(%cause, "command failed");
                self.fail(cause);
                vec![AppAction::Render]
            },
        }
    }

    /// Handle keyboard input.
    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        if key == KeyInput::Interrupt {
            return vec![AppAction::Quit];
        }
        if self.loading {
            return vec![];
        }
        if key == KeyInput::Tab {
            return self.toggle_mode();
        }

        match self.mode {
            Mode::Browsing => self.handle_browsing_key(key),
            Mode::Searching => self.handle_searching_key(key),
        }
    }

    fn handle_browsing_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Char('q') => vec![AppAction::Quit],
            KeyInput::Char('d') => self.uninstall_selected(),
            KeyInput::Up => {
                self.selected = self.selected.saturating_sub(1);
                vec![AppAction::Render]
            },
            KeyInput::Down => {
                if let Some(last) = self.packages.len().checked_sub(1) {
                    self.selected = (self.selected + 1).min(last);
                }
                vec![AppAction::Render]
            },
            _ => vec![],
        }
    }

    fn handle_searching_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Enter => return self.install_search_text(),
            KeyInput::Char(c) => self.search.insert(c),
            KeyInput::Backspace => self.search.backspace(),
            KeyInput::Delete => self.search.delete(),
            KeyInput::Left => self.search.move_left(),
            KeyInput::Right => self.search.move_right(),
            KeyInput::Home => self.search.move_home(),
            KeyInput::End => self.search.move_end(),
            KeyInput::Esc => self.search.clear(),
            _ => return vec![],
        }
        vec![AppAction::Render]
    }

    fn toggle_mode(&mut self) -> Vec<AppAction> {
        self.mode = self.mode.toggled();
        self.status_message = None;
        self.last_error = None;
        vec![AppAction::Render]
    }

    fn uninstall_selected(&mut self) -> Vec<AppAction> {
        let Some(package) = self.selected_package() else {
            return self.reject(ValidationError::NothingSelected);
        };
        let name = package.name.clone();

        self.begin(format!("Uninstalling {name}..."));
        vec![AppAction::Dispatch(Command::Uninstall { name }), AppAction::Render]
    }

    fn install_search_text(&mut self) -> Vec<AppAction> {
        if self.search.trimmed().is_empty() {
            return self.reject(ValidationError::EmptyPackageName);
        }
        let name = self.search.take().trim().to_owned();

        self.begin(format!("Installing {name}..."));
        vec![AppAction::Dispatch(Command::Install { name }), AppAction::Render]
    }

    /// Enter the loading state for a user-initiated command.
    fn begin(&mut self, status: String) {
        tracing::debug!(%status, "dispatching command");
        self.status_message = Some(status);
        self.last_error = None;
        self.loading = true;
    }

    fn reject(&mut self, err: ValidationError) -> Vec<AppAction> {
        self.status_message = Some(err.to_string());
        self.last_error = Some(err.into());
        vec![AppAction::Render]
    }

    fn fail(&mut self, cause: ClientError) {
        self.status_message = Some(format!("Error: {cause}"));
        self.last_error = Some(cause.into());
        self.loading = false;
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.packages.len().saturating_sub(1));
    }

    /// Current interaction mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Installed packages from the most recent load.
    pub fn packages(&self) -> &[InstalledPackage] {
        &self.packages
    }

    /// Index of the highlighted package. 0 when the list is empty.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Highlighted package. `None` if the list is empty.
    pub fn selected_package(&self) -> Option<&InstalledPackage> {
        self.packages.get(self.selected)
    }

    /// Search input line.
    pub fn search(&self) -> &SearchInput {
        &self.search
    }

    /// Status line text. `None` if nothing to report.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Most recent error. `None` if the last operation succeeded.
    pub fn last_error(&self) -> Option<&AppError> {
        self.last_error.as_ref()
    }

    /// A network-backed command is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Spinner animation frame.
    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}

fn package_count_summary(count: usize) -> String {
    if count == 1 { "Loaded 1 package".to_owned() } else { format!("Loaded {count} packages") }
}
