//! Application input events.
//!
//! This module defines [`AppEvent`], the closed set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from two distinct sources:
//! - User interactions (keyboard, resize) and timer ticks from the driver.
//! - Command completions reported by the [`crate::CommandExecutor`].

use pipdeck_client::{ClientError, InstalledPackage};

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Periodic tick (spinner animation).
    Tick,

    /// The installed package list was fetched.
    PackagesLoaded {
        /// Complete list as reported by the bridge service.
        packages: Vec<InstalledPackage>,
    },

    /// An install or uninstall completed.
    OperationSucceeded {
        /// Confirmation reported by the bridge service.
        message: String,
    },

    /// A command failed.
    Error {
        /// What went wrong.
        cause: ClientError,
    },
}
