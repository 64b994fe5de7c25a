use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::models::{AppUiState, ShellState};
use crate::domain::services::{GuardedPath, RouterSyncGuard, UiStateStore};

impl UiStateStore for Signal<ShellState> {
    fn ui(&self) -> AppUiState {
        self.peek().ui
    }

    fn set_ui(&mut self, ui: AppUiState) {
        self.write().ui = ui;
    }
}

/// Last guarded path, shared by link clicks and route commits
#[derive(Clone, Default)]
pub struct RouteGuard {
    guarded: Rc<RefCell<GuardedPath>>,
}

impl RouteGuard {
    /// Guard a navigation the shell is about to start, then run `push`
    pub fn navigate<P: FnOnce()>(&self, mut state: Signal<ShellState>, target: &str, push: P) {
        let guarded = self.guarded.clone();
        let path = target.to_string();
        RouterSyncGuard::new().before_each(target, &mut state, move || {
            guarded.borrow_mut().record(&path);
            push();
        });
    }

    /// Guard a route the router committed without going through [`navigate`](Self::navigate)
    pub fn committed(&self, mut state: Signal<ShellState>, path: &str) -> bool {
        let mut guarded = self.guarded.borrow_mut();
        RouterSyncGuard::new().on_committed(path, &mut guarded, &mut state)
    }
}

pub fn use_route_guard_provider() -> RouteGuard {
    use_context_provider(RouteGuard::default)
}

pub fn use_route_guard() -> RouteGuard {
    use_context::<RouteGuard>()
}
