use dioxus::prelude::*;

use crate::app::pages::shell_routes::{navigate_guarded, Route};
use crate::domain::models::{ExpandMenu, MenuItem, MenuNode, NodePath};
use crate::shared::hooks::{dispatch_expand, use_route_guard, use_shell_state};

/// One node of the sidebar menu. Groups render their children while expanded.
///
/// Top-level groups address themselves by index; nested groups only know
/// their node path, matching the two locator forms of `EXPAND_MENU`.
#[component]
pub fn MenuEntry(node: MenuNode, path: NodePath, #[props(default)] top_level: Option<usize>) -> Element {
    let state = use_shell_state();
    let label = node.display_label().to_string();

    match node {
        MenuNode::Item(item) => rsx! {
            MenuLink { item }
        },
        MenuNode::Group(group) => {
            let expanded = group.meta.expanded.unwrap_or(false);
            let icon = group.meta.icon.clone();
            let group_class = if expanded {
                "c-menu__group c-menu__group--expanded"
            } else {
                "c-menu__group"
            };

            let toggle_path = path.clone();
            let toggle = move |evt: MouseEvent| {
                evt.prevent_default();
                let command = match top_level {
                    Some(index) => ExpandMenu::at_index(index, !expanded),
                    None => ExpandMenu::for_node(toggle_path.clone(), !expanded),
                };
                dispatch_expand(state, command);
            };

            rsx! {
                li { class: "{group_class}",
                    a {
                        class: "c-menu__group-label",
                        href: "#",
                        aria_expanded: "{expanded}",
                        onclick: toggle,
                        if let Some(icon) = icon {
                            i { class: "fa {icon}" }
                        }
                        span { "{label}" }
                        span { class: "c-menu__caret", if expanded { "▾" } else { "▸" } }
                    }
                    if expanded {
                        ul { class: "c-menu__children",
                            for (index, child) in group.children.into_iter().enumerate() {
                                MenuEntry {
                                    key: "{index}",
                                    node: child,
                                    path: path.child(index),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Leaf link; navigation goes through the router sync guard
#[component]
pub fn MenuLink(item: MenuItem) -> Element {
    let state = use_shell_state();
    let guard = use_route_guard();
    let navigator = use_navigator();
    let current = use_route::<Route>();

    let target = Route::for_path(&item.path);
    let link_class = if current == target {
        "c-menu__link c-menu__link--active"
    } else {
        "c-menu__link"
    };
    let icon = item.meta.as_ref().and_then(|meta| meta.icon.clone());

    rsx! {
        li { class: "c-menu__item",
            a {
                class: "{link_class}",
                href: "{item.path}",
                onclick: move |evt| {
                    evt.prevent_default();
                    navigate_guarded(&guard, state, navigator, target.clone());
                },
                if let Some(icon) = icon {
                    i { class: "fa {icon}" }
                }
                span { "{item.name}" }
            }
        }
    }
}
