use dioxus::prelude::*;

// Reusable Error Message Component (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "c-error",
            span { class: "c-error__icon", "❌" }
            p { class: "c-error__text", "{message}" }
        }
    }
}

// Page frame shared by every console page (BEM: c-page)
#[component]
pub fn PageFrame(title: String, #[props(default)] subtitle: Option<String>, children: Element) -> Element {
    rsx! {
        section { class: "c-page",
            header { class: "c-page__header",
                h1 { class: "c-page__title", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "c-page__subtitle", "{subtitle}" }
                }
            }
            div { class: "c-page__body",
                {children}
            }
        }
    }
}
