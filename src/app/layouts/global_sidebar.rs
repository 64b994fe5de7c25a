use dioxus::prelude::*;

use crate::app::components::MenuEntry;
use crate::domain::models::NodePath;
use crate::shared::hooks::use_shell_state;

#[component]
pub fn GlobalSidebar() -> Element {
    let state = use_shell_state();
    let opened = state.read().ui.sidebar.opened;
    let items = state.read().menu.items.clone();

    let sidebar_class = if opened {
        "c-sidebar c-sidebar--open"
    } else {
        "c-sidebar"
    };

    rsx! {
        aside { class: "{sidebar_class}",
            nav { class: "c-sidebar__nav",
                ul { class: "c-menu",
                    for (index, node) in items.into_iter().enumerate() {
                        MenuEntry {
                            key: "{index}",
                            node,
                            path: NodePath::root(index),
                            top_level: index,
                        }
                    }
                }
            }
        }
    }
}
