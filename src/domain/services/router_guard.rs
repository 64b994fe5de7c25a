//! Per-navigation hook reconciling the router position with shared UI state.
//!
//! The continuation must run exactly once per navigation attempt, otherwise
//! the router stalls. [`Proceed`] enforces this: it is consumed on the normal
//! path and fires from `Drop` on any other path (early return, unwinding).

use std::future::Future;

use crate::domain::models::{AppUiState, SidebarToggle};
use crate::shared::errors::AppError;
use crate::shared::logging::{log_navigation, log_navigation_step_error};

/// Continuation that is invoked exactly once
pub struct Proceed<F: FnOnce()> {
    next: Option<F>,
}

impl<F: FnOnce()> Proceed<F> {
    pub fn new(next: F) -> Self {
        Self { next: Some(next) }
    }

    pub fn call(mut self) {
        if let Some(next) = self.next.take() {
            next();
        }
    }
}

impl<F: FnOnce()> Drop for Proceed<F> {
    fn drop(&mut self) {
        if let Some(next) = self.next.take() {
            next();
        }
    }
}

/// Where the guard reads and writes the shared UI flags
pub trait UiStateStore {
    fn ui(&self) -> AppUiState;
    fn set_ui(&mut self, ui: AppUiState);
}

impl UiStateStore for AppUiState {
    fn ui(&self) -> AppUiState {
        *self
    }

    fn set_ui(&mut self, ui: AppUiState) {
        *self = ui;
    }
}

/// Last path the guard ran for.
///
/// A navigation guarded before its push is not guarded again when the router
/// commits it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardedPath(Option<String>);

impl GuardedPath {
    pub fn record(&mut self, path: &str) {
        self.0 = Some(path.to_string());
    }

    pub fn is_pending(&self, path: &str) -> bool {
        self.0.as_deref() != Some(path)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RouterSyncGuard;

impl RouterSyncGuard {
    pub fn new() -> Self {
        Self
    }

    /// Close the sidebar when navigating on a mobile device.
    /// The store is only written when something changes.
    fn reconcile<S: UiStateStore + ?Sized>(&self, target: &str, store: &mut S) {
        let mut ui = store.ui();
        let close = ui.device.is_mobile() && ui.sidebar.opened;
        if close {
            ui.toggle_sidebar(SidebarToggle::Set(false));
            store.set_ui(ui);
        }
        log_navigation(target, close);
    }

    /// Run before a route transition commits, then call `proceed`
    pub fn before_each<S, P>(&self, target: &str, store: &mut S, proceed: P)
    where
        S: UiStateStore + ?Sized,
        P: FnOnce(),
    {
        let proceed = Proceed::new(proceed);
        self.reconcile(target, store);
        proceed.call();
    }

    /// Same as [`before_each`](Self::before_each) with one awaited step in between.
    ///
    /// A failing step is logged and navigation still proceeds.
    pub async fn before_each_with<S, St, Fut, P>(
        &self,
        target: &str,
        store: &mut S,
        step: St,
        proceed: P,
    ) where
        S: UiStateStore + ?Sized,
        St: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
        P: FnOnce(),
    {
        let proceed = Proceed::new(proceed);
        self.reconcile(target, store);

        if let Err(e) = step().await {
            log_navigation_step_error(target, &e.to_string());
        }

        proceed.call();
    }

    /// Guard a route the router committed on its own (history, redirect, typed
    /// URL). Returns false when `path` was already guarded before its push.
    pub fn on_committed<S>(&self, path: &str, guarded: &mut GuardedPath, store: &mut S) -> bool
    where
        S: UiStateStore + ?Sized,
    {
        if !guarded.is_pending(path) {
            return false;
        }
        guarded.record(path);
        self.before_each(path, store, || {});
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::DeviceClass;
    use std::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_mobile_open_sidebar_closes() {
        let mut state = AppUiState::new(DeviceClass::Mobile, true);
        let calls = Cell::new(0);

        RouterSyncGuard::new().before_each("/secrets", &mut state, || calls.set(calls.get() + 1));

        assert!(!state.sidebar.opened);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_mobile_closed_sidebar_unchanged() {
        let mut state = AppUiState::new(DeviceClass::Mobile, false);
        let calls = Cell::new(0);

        RouterSyncGuard::new().before_each("/secrets", &mut state, || calls.set(calls.get() + 1));

        assert!(!state.sidebar.opened);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_desktop_sidebar_untouched() {
        for opened in [true, false] {
            let mut state = AppUiState::new(DeviceClass::Desktop, opened);
            let calls = Cell::new(0);

            RouterSyncGuard::new().before_each("/users", &mut state, || calls.set(calls.get() + 1));

            assert_eq!(state.sidebar.opened, opened);
            assert_eq!(calls.get(), 1);
        }
    }

    #[test]
    fn test_proceed_fires_once_when_unwinding() {
        let calls = Cell::new(0);

        let result = catch_unwind(AssertUnwindSafe(|| {
            let _proceed = Proceed::new(|| calls.set(calls.get() + 1));
            panic!("guard body failed");
        }));

        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_proceed_call_does_not_fire_twice() {
        let calls = Cell::new(0);

        Proceed::new(|| calls.set(calls.get() + 1)).call();

        assert_eq!(calls.get(), 1);
    }

    /// Counts writes and can fail on read
    struct RecordingStore {
        ui: AppUiState,
        writes: usize,
        fail_read: bool,
    }

    impl RecordingStore {
        fn new(device: DeviceClass, opened: bool) -> Self {
            Self {
                ui: AppUiState::new(device, opened),
                writes: 0,
                fail_read: false,
            }
        }
    }

    impl UiStateStore for RecordingStore {
        fn ui(&self) -> AppUiState {
            if self.fail_read {
                panic!("ui state already borrowed");
            }
            self.ui
        }

        fn set_ui(&mut self, ui: AppUiState) {
            self.writes += 1;
            self.ui = ui;
        }
    }

    #[test]
    fn test_desktop_navigation_does_not_write_state() {
        let mut store = RecordingStore::new(DeviceClass::Desktop, true);

        RouterSyncGuard::new().before_each("/secrets", &mut store, || {});

        assert_eq!(store.writes, 0);
        assert!(store.ui.sidebar.opened);
    }

    #[test]
    fn test_mobile_navigation_writes_once() {
        let mut store = RecordingStore::new(DeviceClass::Mobile, true);

        RouterSyncGuard::new().before_each("/secrets", &mut store, || {});

        assert_eq!(store.writes, 1);
        assert!(!store.ui.sidebar.opened);
    }

    #[test]
    fn test_proceed_fires_once_when_state_read_fails() {
        let mut store = RecordingStore::new(DeviceClass::Mobile, true);
        store.fail_read = true;
        let calls = Cell::new(0);

        let result = catch_unwind(AssertUnwindSafe(|| {
            RouterSyncGuard::new().before_each("/users", &mut store, || calls.set(calls.get() + 1));
        }));

        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_history_navigation_closes_mobile_sidebar() {
        let guard = RouterSyncGuard::new();
        let mut guarded = GuardedPath::default();
        let mut state = AppUiState::new(DeviceClass::Mobile, false);

        // Sidebar link: guarded before the push, then committed by the router
        guard.before_each("/transit", &mut state, || guarded.record("/transit"));
        assert!(!guard.on_committed("/transit", &mut guarded, &mut state));

        // User reopens the sidebar and presses Back
        state.toggle_sidebar(SidebarToggle::Set(true));
        assert!(guard.on_committed("/secrets", &mut guarded, &mut state));
        assert!(!state.sidebar.opened);

        // The same commit seen again is not guarded twice
        state.toggle_sidebar(SidebarToggle::Set(true));
        assert!(!guard.on_committed("/secrets", &mut guarded, &mut state));
        assert!(state.sidebar.opened);
    }

    #[test]
    fn test_redirect_on_first_load_is_guarded() {
        let guard = RouterSyncGuard::new();
        let mut guarded = GuardedPath::default();
        let mut store = RecordingStore::new(DeviceClass::Mobile, true);

        assert!(guard.on_committed("/", &mut guarded, &mut store));
        assert!(guard.on_committed("/login", &mut guarded, &mut store));

        assert!(!store.ui.sidebar.opened);
        assert_eq!(store.writes, 1);
    }

    #[tokio::test]
    async fn test_async_step_failure_still_proceeds() {
        let mut state = AppUiState::new(DeviceClass::Mobile, true);
        let calls = Cell::new(0);

        RouterSyncGuard::new()
            .before_each_with(
                "/transit",
                &mut state,
                || async { Err(AppError::NavigationStep("token lookup failed".to_string())) },
                || calls.set(calls.get() + 1),
            )
            .await;

        assert!(!state.sidebar.opened);
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_async_step_success_proceeds_once() {
        let mut state = AppUiState::new(DeviceClass::Desktop, true);
        let calls = Cell::new(0);

        RouterSyncGuard::new()
            .before_each_with("/transit", &mut state, || async { Ok(()) }, || calls.set(calls.get() + 1))
            .await;

        assert!(state.sidebar.opened);
        assert_eq!(calls.get(), 1);
    }
}
