use dioxus::prelude::*;

use crate::app::components::{Tooltip, TooltipStyle};
use crate::domain::models::SidebarToggle;
use crate::shared::hooks::{dispatch_toggle_sidebar, use_shell_state};

/// Top bar with the sidebar toggle and the console title
#[component]
pub fn Navbar(title: String) -> Element {
    let state = use_shell_state();
    let opened = state.read().ui.sidebar.opened;
    let tooltip = if opened { "Hide navigation" } else { "Show navigation" };

    rsx! {
        nav { class: "c-navbar",
            Tooltip {
                label: tooltip.to_string(),
                style: TooltipStyle {
                    placement: "right".to_string(),
                    ..Default::default()
                },
                button {
                    class: "c-navbar__toggle",
                    aria_label: "Toggle navigation",
                    onclick: move |_| dispatch_toggle_sidebar(state, SidebarToggle::Flip),
                    "☰"
                }
            }
            span { class: "c-navbar__brand", "🔐 {title}" }
        }
    }
}
