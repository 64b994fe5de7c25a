use dioxus::prelude::*;
use dioxus::router::Navigator;
use std::rc::Rc;

use crate::app::components::{ErrorMessage, NotificationContainer, HIGHLIGHT_SCRIPT_URL, HIGHLIGHT_THEME_URL};
use crate::app::layouts::{GlobalSidebar, Navbar};
use crate::app::pages::{page_registry, render_page, PageView};
use crate::config::ShellConfig;
use crate::domain::models::ShellState;
use crate::domain::services::{ComponentRegistry, ComponentResolver, MESSAGES, NOTIFICATIONS};
use crate::shared::hooks::{
    use_notifier_provider, use_route_guard, use_route_guard_provider, use_shell_state, use_shell_state_provider,
    use_viewport_sync, RouteGuard,
};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    // Landing: forwards to the first configured page
    #[route("/")]
    Home {},

    // Every menu path resolves through the menu tree and the page registry
    #[route("/:..segments")]
    MenuPage { segments: Vec<String> },
}

impl Route {
    /// Route for a configured menu path such as `/tools/transit`
    pub fn for_path(path: &str) -> Self {
        let segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        if segments.is_empty() {
            Route::Home {}
        } else {
            Route::MenuPage { segments }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home {} => "/".to_string(),
            Route::MenuPage { segments } => format!("/{}", segments.join("/")),
        }
    }
}

/// Navigate through the router sync guard: on mobile the sidebar closes
/// before the transition is committed.
pub fn navigate_guarded(guard: &RouteGuard, state: Signal<ShellState>, navigator: Navigator, target: Route) {
    let path = target.path();
    guard.navigate(state, &path, move || {
        navigator.push(target);
    });
}

pub type PageRegistry = Rc<ComponentRegistry<PageView>>;

#[component]
pub fn App() -> Element {
    let config = use_hook(|| try_consume_context::<ShellConfig>().unwrap_or_default());

    let state = use_shell_state_provider(&config);
    use_viewport_sync(state, config.mobile_breakpoint_px);
    use_notifier_provider();
    use_route_guard_provider();
    use_context_provider(|| Rc::new(page_registry()));
    use_context_provider(|| config.clone());

    use_effect(|| {
        tracing::info!("Vault console shell initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let config = use_context::<ShellConfig>();
    let state = use_shell_state();
    let guard = use_route_guard();
    let route = use_route::<Route>();

    // Routes the router changes on its own (history, redirects, typed URLs)
    use_effect(use_reactive((&route,), move |(route,)| {
        guard.committed(state, &route.path());
    }));
    let layout_class = if state.read().ui.sidebar.opened {
        "c-layout c-layout--sidebar-open"
    } else {
        "c-layout"
    };

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        document::Link {
            rel: "stylesheet",
            href: HIGHLIGHT_THEME_URL
        },
        document::Script {
            src: HIGHLIGHT_SCRIPT_URL
        },
        div { class: "{layout_class}",
            Navbar { title: config.title.clone() }

            div { class: "c-layout__body",
                GlobalSidebar {}

                main { class: "c-layout__main",
                    Outlet::<Route> {}
                }
            }

            NotificationContainer { selector: NOTIFICATIONS.container.to_string() }
            NotificationContainer { selector: MESSAGES.container.to_string() }
        }
    }
}

#[component]
fn Home() -> Element {
    let state = use_shell_state();
    let navigator = use_navigator();
    let first = state.read().menu.leaves().first().map(|item| item.path.clone());

    use_effect(move || {
        if let Some(path) = first.clone() {
            navigator.replace(Route::for_path(&path));
        }
    });

    rsx! {
        div { class: "c-page c-page--empty",
            p { "No pages are configured." }
        }
    }
}

#[component]
fn MenuPage(segments: Vec<String>) -> Element {
    let state = use_shell_state();
    let registry = use_context::<PageRegistry>();

    let path = format!("/{}", segments.join("/"));
    let component_key = state
        .read()
        .menu
        .find_by_path(&path)
        .map(|item| item.component_key.clone());

    match component_key.map(|key| registry.resolve(&key)) {
        Some(Ok(view)) => render_page(view),
        Some(Err(e)) => {
            tracing::error!(path = %path, error = %e, "Menu entry has no registered view");
            rsx! { ErrorMessage { message: e.to_string() } }
        }
        None => rsx! {
            div { class: "c-page c-page--not-found",
                h2 { "Not found" }
                p { "No page is configured at {path}" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_for_path() {
        assert_eq!(Route::for_path("/"), Route::Home {});
        assert_eq!(
            Route::for_path("/transit"),
            Route::MenuPage { segments: vec!["transit".to_string()] }
        );
        assert_eq!(Route::for_path("/admin/users/").path(), "/admin/users");
    }

    #[test]
    fn test_every_menu_path_maps_to_a_route() {
        let config = ShellConfig::default();

        for item in config.menu.leaves() {
            assert_eq!(Route::for_path(&item.path).path(), item.path);
        }
    }
}
