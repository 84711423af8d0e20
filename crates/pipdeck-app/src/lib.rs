//! Application layer for pipdeck
//!
//! Pure state machine and generic runtime for the package manager UI. The
//! state machine never performs I/O; network work is handed to the command
//! layer and comes back as events.
//!
//! # Components
//!
//! - [`App`]: UI state machine (modes, package list, search input, status)
//! - [`CommandExecutor`]: Runs [`Command`]s on spawned tasks, reports
//!   completions as [`AppEvent`]s
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Event loop serializing input and completions into the App

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod command;
mod driver;
mod event;
mod input;
mod runtime;
mod state;

pub use action::{AppAction, Command};
pub use app::App;
pub use command::{CommandExecutor, execute};
pub use driver::Driver;
pub use event::AppEvent;
pub use input::KeyInput;
pub use pipdeck_client::{ClientError, InstalledPackage};
pub use runtime::Runtime;
pub use state::{AppError, Mode, SEARCH_CHAR_LIMIT, SearchInput, ValidationError};
