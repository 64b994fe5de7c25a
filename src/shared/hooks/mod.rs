// Custom Dioxus hooks
pub mod use_notifier;
pub mod use_route_guard;
pub mod use_shell_state;
pub mod use_viewport;

pub use use_notifier::{use_notifier, use_notifier_provider, Notifier};
pub use use_route_guard::{use_route_guard, use_route_guard_provider, RouteGuard};
pub use use_shell_state::{dispatch_expand, dispatch_toggle_sidebar, use_shell_state, use_shell_state_provider};
pub use use_viewport::use_viewport_sync;
