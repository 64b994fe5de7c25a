// Domain models (shell state and alert types)
// Pure Rust, no framework dependencies

pub mod menu;
pub mod ui_state;
pub mod notification;
pub mod transport;

pub use menu::{ExpandMenu, Locator, MenuGroup, MenuItem, MenuMeta, MenuNode, MenuTree, NodePath};
pub use ui_state::{AppUiState, DeviceClass, ShellState, SidebarState, SidebarToggle, DEFAULT_MOBILE_BREAKPOINT_PX};
pub use notification::{
    NotificationId, NotificationInstance, NotificationOptions, NotificationRequest, NotificationType,
};
pub use transport::TransportOutcome;
