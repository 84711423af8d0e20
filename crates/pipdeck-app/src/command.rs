//! Asynchronous command layer.
//!
//! Each [`Command`] runs on its own tokio task, away from the event loop, and
//! reports exactly one [`AppEvent`] back through a channel. Client failures
//! never escape a task: they are converted into [`AppEvent::Error`].
//!
//! Commands hold no reference to the [`crate::App`]; the channel is the only
//! way their results reach it.

use std::sync::Arc;

use pipdeck_client::{PackageBridge, PackageIndex};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{AppEvent, Command};

/// Capacity of the completion channel.
const COMPLETION_BUFFER: usize = 32;

/// Spawns commands and forwards their completion events.
pub struct CommandExecutor<I, B> {
    index: Arc<I>,
    bridge: Arc<B>,
    completions: mpsc::Sender<AppEvent>,
}

impl<I, B> CommandExecutor<I, B>
where
    I: PackageIndex + 'static,
    B: PackageBridge + 'static,
{
    /// Create an executor and the receiving end of its completion channel.
    pub fn new(index: I, bridge: B) -> (Self, mpsc::Receiver<AppEvent>) {
        let (tx, rx) = mpsc::channel(COMPLETION_BUFFER);
        let executor = Self { index: Arc::new(index), bridge: Arc::new(bridge), completions: tx };
        (executor, rx)
    }

    /// Run `command` on a new task. Its completion event is sent to the
    /// channel returned by [`CommandExecutor::new`].
    ///
    /// Must be called from within a tokio runtime.
    pub fn issue(&self, command: Command) -> JoinHandle<()> {
        let index = Arc::clone(&self.index);
        let bridge = Arc::clone(&self.bridge);
        let completions = self.completions.clone();

        tracing::debug!(?command, "issuing command");
        tokio::spawn(async move {
            let event = execute(index.as_ref(), bridge.as_ref(), command).await;
            if completions.send(event).await.is_err() {
                tracing::debug!("event loop gone, dropping completion");
            }
        })
    }
}

/// Perform one command against the clients and describe the outcome.
///
/// Install looks the package up on the index first. If the index does not
/// know it, or cannot be reached, the bridge is never called.
pub async fn execute<I, B>(index: &I, bridge: &B, command: Command) -> AppEvent
where
    I: PackageIndex,
    B: PackageBridge,
{
    let result = match command {
        Command::FetchPackages => {
            return match bridge.list().await {
                Ok(packages) => {
                    tracing::debug!(count = packages.len(), "packages loaded");
                    AppEvent::PackagesLoaded { packages }
                },
                Err(cause) => AppEvent::Error { cause },
            };
        },
        Command::Install { name } => match index.lookup(&name).await {
            Ok(metadata) => {
                tracing::info!(
                    package = %metadata.name,
                    version = %metadata.version,
                    summary = metadata.summary.as_deref().unwrap_or(""),
                    "package verified on index"
                );
                bridge.install(&name).await
            },
            Err(cause) => {
                tracing::warn!(package = %name, %cause, "index lookup failed, not installing");
                Err(cause)
            },
        },
        Command::Uninstall { name } => bridge.uninstall(&name).await,
    };

    match result {
        Ok(message) => AppEvent::OperationSucceeded { message },
        Err(cause) => AppEvent::Error { cause },
    }
}
