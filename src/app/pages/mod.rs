pub mod shell_routes;

pub use shell_routes::{App, Route};

use dioxus::prelude::*;

use crate::app::components::{AutoFocusInput, HighlightedCode, PageFrame};
use crate::domain::models::{NotificationOptions, NotificationType, TransportOutcome};
use crate::domain::services::ComponentRegistry;
use crate::shared::hooks::use_notifier;

/// Views a menu entry's component key can resolve to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageView {
    Login,
    Secrets,
    Bulletins,
    Users,
    Transit,
}

/// Registry of every page view, keyed by the menu's `componentKey`
pub fn page_registry() -> ComponentRegistry<PageView> {
    let mut registry = ComponentRegistry::new();
    registry
        .register("login", || PageView::Login)
        .register("secrets", || PageView::Secrets)
        .register("bulletinboard", || PageView::Bulletins)
        .register("admin/Users", || PageView::Users)
        .register("tools/Transit", || PageView::Transit)
        .register("tools/BulletinBoard", || PageView::Bulletins);
    registry
}

pub fn render_page(view: PageView) -> Element {
    match view {
        PageView::Login => rsx! { LoginPage {} },
        PageView::Secrets => rsx! { SecretsPage {} },
        PageView::Bulletins => rsx! { BulletinsPage {} },
        PageView::Users => rsx! { UsersPage {} },
        PageView::Transit => rsx! { TransitPage {} },
    }
}

#[component]
fn LoginPage() -> Element {
    let notifier = use_notifier();
    let mut token = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if token.read().trim().is_empty() {
            notifier.message(
                NotificationOptions::new()
                    .title("Token required")
                    .message("Enter a vault token to continue")
                    .kind(NotificationType::Warning),
            );
            return;
        }
        // No backend transport is wired into the shell
        notifier.report_error(&TransportOutcome::NoResponse);
    };

    rsx! {
        PageFrame { title: "Login".to_string(),
            form { class: "c-login", onsubmit: submit,
                AutoFocusInput {
                    value: token.read().clone(),
                    input_type: "password",
                    placeholder: "Vault token",
                    on_input: move |value: String| token.set(value),
                }
                button { class: "c-button c-button--primary", r#type: "submit", "Login" }
            }
        }
    }
}

#[component]
fn SecretsPage() -> Element {
    rsx! {
        PageFrame {
            title: "Secrets".to_string(),
            subtitle: "Browse the secret backends mounted on this vault".to_string(),
            p { class: "c-page__empty", "No secret backend selected." }
        }
    }
}

#[component]
fn BulletinsPage() -> Element {
    rsx! {
        PageFrame { title: "Bulletin Board".to_string(),
            p { class: "c-page__empty", "No bulletins have been posted." }
        }
    }
}

#[component]
fn UsersPage() -> Element {
    rsx! {
        PageFrame {
            title: "Users".to_string(),
            subtitle: "Tokens, userpass and approle accounts".to_string(),
            p { class: "c-page__empty", "Pick an auth backend to list its users." }
        }
    }
}

#[component]
fn TransitPage() -> Element {
    let mut plaintext = use_signal(String::new);
    let request = serde_json::json!({ "plaintext": plaintext.read().clone() });
    let preview = serde_json::to_string_pretty(&request).unwrap_or_default();

    rsx! {
        PageFrame {
            title: "Transit".to_string(),
            subtitle: "Encrypt and decrypt data with a transit key".to_string(),
            AutoFocusInput {
                value: plaintext.read().clone(),
                placeholder: "Plaintext",
                on_input: move |value: String| plaintext.set(value),
            }
            HighlightedCode { code: preview }
        }
    }
}
