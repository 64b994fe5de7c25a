pub mod common;
pub mod menu_tree;
pub mod notifications;
pub mod post_mount;
pub mod tooltip;

pub use common::{ErrorMessage, PageFrame};
pub use menu_tree::{MenuEntry, MenuLink};
pub use notifications::NotificationContainer;
pub use post_mount::{AutoFocusInput, HighlightedCode, HIGHLIGHT_SCRIPT_URL, HIGHLIGHT_THEME_URL};
pub use tooltip::{Tooltip, TooltipSize, TooltipStyle};
