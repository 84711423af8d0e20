//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: UI state machine
//! - [`CommandExecutor`]: network work on spawned tasks
//! - [`Driver`]: Platform-specific I/O
//!
//! Input events and command completions are merged into one serialized
//! stream, so [`App::handle`] is never entered concurrently.

use pipdeck_client::{PackageBridge, PackageIndex};
use tokio::sync::mpsc;

use crate::{App, AppAction, AppEvent, CommandExecutor, Driver};

/// Generic runtime that orchestrates App, commands and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
/// - `I`: Package index client
/// - `B`: Bridge service client
pub struct Runtime<D, I, B>
where
    D: Driver,
    I: PackageIndex + 'static,
    B: PackageBridge + 'static,
{
    driver: D,
    app: App,
    commands: CommandExecutor<I, B>,
    completions: mpsc::Receiver<AppEvent>,
}

impl<D, I, B> Runtime<D, I, B>
where
    D: Driver,
    I: PackageIndex + 'static,
    B: PackageBridge + 'static,
{
    /// Create a new runtime with the given driver and clients.
    pub fn new(driver: D, index: I, bridge: B) -> Self {
        let (commands, completions) = CommandExecutor::new(index, bridge);
        Self { driver, app: App::new(), commands, completions }
    }

    /// Run the main event loop until the App asks to quit.
    ///
    /// Issues the initial package load, then alternates between driver input
    /// and command completions. Completions are preferred when both are ready.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(&mut self) -> Result<(), D::Error> {
        let actions = self.app.start();
        let mut should_quit = self.process_actions(actions)?;

        while !should_quit {
            let event = tokio::select! {
                biased;

                Some(event) = self.completions.recv() => event,

                polled = self.driver.poll_event() => match polled? {
                    Some(event) => event,
                    None => continue,
                },
            };

            let actions = self.app.handle(event);
            should_quit = self.process_actions(actions)?;
        }

        tracing::info!("quitting");
        self.driver.stop();
        Ok(())
    }

    /// Execute actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => return Ok(true),
                AppAction::Dispatch(command) => {
                    // Detached; the result arrives on `completions`.
                    drop(self.commands.issue(command));
                },
            }
        }
        Ok(false)
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
