use dioxus::prelude::*;

use crate::config::ShellConfig;
use crate::domain::models::{ExpandMenu, ShellState, SidebarToggle};

/// Create the shell state from the configuration and share it with the tree
pub fn use_shell_state_provider(config: &ShellConfig) -> Signal<ShellState> {
    let menu = config.menu.clone();
    use_context_provider(move || Signal::new(ShellState::new(menu)))
}

/// Access the shell state provided by the root component
pub fn use_shell_state() -> Signal<ShellState> {
    use_context::<Signal<ShellState>>()
}

/// Dispatch an `EXPAND_MENU` command from the view layer
pub fn dispatch_expand(mut state: Signal<ShellState>, command: ExpandMenu) {
    state.write().menu.commit(&command);
}

pub fn dispatch_toggle_sidebar(mut state: Signal<ShellState>, toggle: SidebarToggle) {
    state.write().ui.toggle_sidebar(toggle);
}
