//! Recording fakes for the index and bridge clients.

#![allow(dead_code)]

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use pipdeck_app::{App, AppAction, AppEvent, Command, KeyInput, execute};
use pipdeck_client::{
    ClientError, InstalledPackage, PackageBridge, PackageIndex, PackageMetadata, TransportError,
};

/// Index that knows a fixed set of names and counts lookups.
#[derive(Debug, Default)]
pub struct FakeIndex {
    known: Vec<String>,
    pub lookups: AtomicUsize,
}

impl FakeIndex {
    pub fn knowing(names: &[&str]) -> Self {
        Self { known: names.iter().map(ToString::to_string).collect(), ..Self::default() }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl PackageIndex for FakeIndex {
    async fn lookup(&self, name: &str) -> Result<PackageMetadata, ClientError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.known.iter().any(|k| k == name) {
            Ok(PackageMetadata {
                name: name.to_owned(),
                version: "1.0.0".to_owned(),
                summary: None,
                author: None,
                home_page: None,
            })
        } else {
            Err(ClientError::NotFound { name: name.to_owned() })
        }
    }
}

/// Bridge backed by an in-memory package list.
///
/// Install adds `<name> 1.0.0` and answers "Installed <name>"; uninstall
/// removes the package unless its name is listed in `conflicts`, in which case
/// it answers like the real service does with a 400 and the given body.
#[derive(Debug, Default)]
pub struct FakeBridge {
    packages: Mutex<Vec<InstalledPackage>>,
    conflicts: Vec<(String, String)>,
    pub lists: AtomicUsize,
    pub installs: AtomicUsize,
    pub uninstalls: AtomicUsize,
}

impl FakeBridge {
    pub fn with_packages(packages: Vec<InstalledPackage>) -> Self {
        Self { packages: Mutex::new(packages), ..Self::default() }
    }

    pub fn with_conflict(mut self, name: &str, body: &str) -> Self {
        self.conflicts.push((name.to_owned(), body.to_owned()));
        self
    }

    pub fn installs(&self) -> usize {
        self.installs.load(Ordering::SeqCst)
    }

    pub fn uninstalls(&self) -> usize {
        self.uninstalls.load(Ordering::SeqCst)
    }

    fn snapshot(&self) -> Vec<InstalledPackage> {
        self.packages.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl PackageBridge for FakeBridge {
    async fn list(&self) -> Result<Vec<InstalledPackage>, ClientError> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshot())
    }

    async fn install(&self, name: &str) -> Result<String, ClientError> {
        self.installs.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut packages) = self.packages.lock() {
            packages.push(InstalledPackage::new(name, "1.0.0"));
        }
        Ok(format!("Installed {name}"))
    }

    async fn uninstall(&self, name: &str) -> Result<String, ClientError> {
        self.uninstalls.fetch_add(1, Ordering::SeqCst);
        if let Some((_, body)) = self.conflicts.iter().find(|(n, _)| n == name) {
            return Err(TransportError::Rejected { status: 400, body: body.clone() }.into());
        }
        if let Ok(mut packages) = self.packages.lock() {
            packages.retain(|p| p.name != name);
        }
        Ok(format!("Successfully uninstalled {name}"))
    }
}

/// Feed characters into the App one key at a time.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        let _ = app.handle(AppEvent::Key(KeyInput::Char(c)));
    }
}

/// Dispatched commands in an action list.
pub fn commands(actions: &[AppAction]) -> Vec<Command> {
    actions
        .iter()
        .filter_map(|a| match a {
            AppAction::Dispatch(command) => Some(command.clone()),
            AppAction::Render | AppAction::Quit => None,
        })
        .collect()
}

/// Run every dispatched command to completion, feeding results back into
/// the App until no more commands are produced.
pub async fn settle(
    app: &mut App,
    index: &FakeIndex,
    bridge: &FakeBridge,
    actions: Vec<AppAction>,
) {
    let mut pending = commands(&actions);
    while let Some(command) = pending.pop() {
        let event = execute(index, bridge, command).await;
        let actions = app.handle(event);
        pending.extend(commands(&actions));
    }
}
