//! Terminal UI for pipdeck
//!
//! A thin shell over [`pipdeck_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`pipdeck_app::Runtime`].
//!
//! This crate only handles terminal input, rendering and process setup.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod terminal;
pub mod theme;
pub mod ui;

pub use pipdeck_app::{App, AppAction, AppEvent, Driver, KeyInput, Mode, Runtime};
pub use terminal::{TerminalDriver, TerminalError, install_panic_hook};
pub use theme::{Theme, parse_color};
