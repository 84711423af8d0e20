//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute,
//! and the [`Command`]s the runtime hands to the command layer.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Run a network-backed command off the event loop.
    Dispatch(Command),
}

/// A unit of asynchronous work producing exactly one completion event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch the installed package list.
    FetchPackages,

    /// Verify a package on the index, then install it.
    Install {
        /// Package name.
        name: String,
    },

    /// Uninstall a package.
    Uninstall {
        /// Package name.
        name: String,
    },
}
