//! Property-based tests for App state machine.
//!
//! Tests verify that invariants hold under arbitrary event sequences.
//! This ensures behavioral correctness across all possible execution paths.

use pipdeck_app::{App, AppAction, AppEvent, ClientError, InstalledPackage, KeyInput};
use proptest::prelude::*;

fn package_list_strategy() -> impl Strategy<Value = Vec<InstalledPackage>> {
    prop::collection::vec(("[a-z]{1,8}", "[0-9]\\.[0-9]{1,2}"), 0..8).prop_map(|pairs| {
        pairs.into_iter().map(|(name, version)| InstalledPackage::new(name, version)).collect()
    })
}

fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        4 => Just(KeyInput::Up),
        4 => Just(KeyInput::Down),
        1 => Just(KeyInput::Tab),
        1 => Just(KeyInput::Enter),
        1 => Just(KeyInput::Backspace),
        1 => Just(KeyInput::Left),
        1 => Just(KeyInput::Home),
        1 => Just(KeyInput::Char('d')),
        2 => prop::char::range('a', 'z').prop_map(KeyInput::Char),
    ]
}

/// Generate random app events, including list replacements of any size.
fn event_strategy() -> impl Strategy<Value = AppEvent> {
    prop_oneof![
        6 => key_strategy().prop_map(AppEvent::Key),
        1 => Just(AppEvent::Tick),
        1 => (1u16..200, 1u16..100).prop_map(|(c, r)| AppEvent::Resize(c, r)),
        2 => package_list_strategy().prop_map(|packages| AppEvent::PackagesLoaded { packages }),
        1 => "[a-z ]{1,20}".prop_map(|message| AppEvent::OperationSucceeded { message }),
        1 => Just(AppEvent::Error { cause: ClientError::Auth }),
    ]
}

/// Selection stays inside the list, or at 0 when the list is empty.
fn selection_in_bounds(app: &App) -> bool {
    if app.packages().is_empty() {
        app.selected_index() == 0 && app.selected_package().is_none()
    } else {
        app.selected_index() < app.packages().len()
    }
}

/// The App never asks for more than one command per event.
fn at_most_one_dispatch(actions: &[AppAction]) -> bool {
    actions.iter().filter(|a| matches!(a, AppAction::Dispatch(_))).count() <= 1
}

proptest! {
    #[test]
    fn prop_selection_stays_in_bounds(
        packages in package_list_strategy(),
        moves in prop::collection::vec(prop_oneof![Just(KeyInput::Up), Just(KeyInput::Down)], 0..40),
    ) {
        let mut app = App::new();
        let _ = app.handle(AppEvent::PackagesLoaded { packages });

        for key in moves {
            let _ = app.handle(AppEvent::Key(key));
            prop_assert!(selection_in_bounds(&app));
        }
    }

    #[test]
    fn prop_invariants_hold_for_any_event_sequence(
        events in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let mut app = App::new();

        for event in events {
            let actions = app.handle(event);
            prop_assert!(selection_in_bounds(&app));
            prop_assert!(at_most_one_dispatch(&actions));
            // Anything dispatched leaves the App loading until it completes.
            if actions.iter().any(|a| matches!(a, AppAction::Dispatch(_))) {
                prop_assert!(app.is_loading());
            }
        }
    }

    #[test]
    fn prop_keys_while_loading_change_nothing(
        packages in package_list_strategy(),
        keys in prop::collection::vec(key_strategy(), 1..30),
    ) {
        let mut app = App::new();
        let _ = app.handle(AppEvent::OperationSucceeded { message: "done".into() });
        let _ = app.handle(AppEvent::PackagesLoaded { packages: packages.clone() });
        let _ = app.handle(AppEvent::OperationSucceeded { message: "again".into() });
        prop_assert!(app.is_loading());
        let before = app.clone();

        for key in keys {
            let actions = app.handle(AppEvent::Key(key));
            prop_assert!(actions.is_empty());
        }

        prop_assert_eq!(app, before);
    }

    #[test]
    fn prop_repeated_load_is_idempotent(packages in package_list_strategy()) {
        let mut app = App::new();
        let event = AppEvent::PackagesLoaded { packages: packages.clone() };

        let _ = app.handle(event.clone());
        let once = app.clone();
        let _ = app.handle(event);

        prop_assert_eq!(app.packages(), packages.as_slice());
        prop_assert_eq!(app, once);
    }
}

#[test]
fn empty_list_has_no_selection() {
    let mut app = App::new();
    let _ = app.handle(AppEvent::PackagesLoaded { packages: vec![] });

    for key in [KeyInput::Down, KeyInput::Down, KeyInput::Up] {
        let _ = app.handle(AppEvent::Key(key));
    }

    assert!(selection_in_bounds(&app));
}
