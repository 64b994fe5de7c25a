use dioxus::prelude::*;

use crate::domain::models::{NotificationId, NotificationInstance};
use crate::shared::hooks::use_notifier;

/// Rendered alert region. The container is registered on the notification
/// surface while this component is mounted; alerts targeting it stack in
/// creation order.
#[component]
pub fn NotificationContainer(selector: String) -> Element {
    let notifier = use_notifier();

    use_hook({
        let surface = notifier.surface().clone();
        let selector = selector.clone();
        move || surface.mount_container(&selector)
    });
    use_drop({
        let surface = notifier.surface().clone();
        let selector = selector.clone();
        move || surface.unmount_container(&selector)
    });

    // Subscribe to surface changes
    let _revision = *notifier.revision.read();
    let alerts = notifier.surface().instances(&selector);
    let class_name = selector.trim_start_matches('.').to_string();

    let on_close = EventHandler::new(move |id: NotificationId| {
        notifier.dismiss(id);
    });

    rsx! {
        div { class: "{class_name}",
            for alert in alerts {
                NotificationCard {
                    key: "{alert.id}",
                    alert: alert.clone(),
                    on_close,
                }
            }
        }
    }
}

#[component]
fn NotificationCard(alert: NotificationInstance, on_close: EventHandler<NotificationId>) -> Element {
    let id = alert.id;
    let kind_class = alert.kind.css_class();
    let direction_class = if alert.direction.is_empty() {
        String::new()
    } else {
        format!("c-alert--{}", alert.direction)
    };

    rsx! {
        div {
            class: "c-alert {kind_class} {direction_class}",
            role: "alert",
            button {
                class: "c-alert__close",
                aria_label: "Close",
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_close.call(id);
                },
                "×"
            }
            if !alert.title.is_empty() {
                p { class: "c-alert__title", "{alert.title}" }
            }
            if !alert.message.is_empty() {
                p { class: "c-alert__message", "{alert.message}" }
            }
        }
    }
}
