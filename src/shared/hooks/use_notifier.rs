use dioxus::prelude::*;
use std::rc::Rc;

use crate::domain::models::{NotificationId, NotificationOptions, TransportOutcome};
use crate::domain::services::{
    classify_with, ErrorPolicy, NotificationHandle, NotificationService, NotificationSurface,
    TimerScheduler,
};
use crate::shared::services::{run_timers, QueuedTimerScheduler};

/// Both alert services plus a revision counter bumped on every surface change
#[derive(Clone)]
pub struct Notifier {
    pub notifications: NotificationService,
    pub messages: NotificationService,
    pub revision: Signal<u64>,
}

impl Notifier {
    pub fn surface(&self) -> &NotificationSurface {
        self.notifications.surface()
    }

    /// Long-lived alert in the `.notifications` stack
    pub fn notify(&self, options: NotificationOptions) -> NotificationHandle {
        self.notifications.create(options)
    }

    /// Short toast in the `.messages` stack
    pub fn message(&self, options: NotificationOptions) -> NotificationHandle {
        self.messages.create(options)
    }

    /// Classify a failed backend call and show the result
    pub fn report_error(&self, outcome: &TransportOutcome) -> NotificationHandle {
        self.report_error_with(ErrorPolicy::StatusAware, outcome)
    }

    pub fn report_error_with(&self, policy: ErrorPolicy, outcome: &TransportOutcome) -> NotificationHandle {
        self.notifications.notify(classify_with(policy, outcome))
    }

    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.notifications.dismiss(id)
    }
}

/// Build the alert services once at the application root.
///
/// The timer driver is spawned in the calling scope, so this must be called
/// from a component that lives as long as the app.
pub fn use_notifier_provider() -> Notifier {
    let revision = use_signal(|| 0u64);

    use_context_provider(move || {
        let surface = NotificationSurface::new();
        surface.subscribe(Rc::new(move || {
            let mut revision = revision;
            *revision.write() += 1;
        }));

        let (scheduler, queue) = QueuedTimerScheduler::new();
        spawn(run_timers(queue));
        let scheduler: Rc<dyn TimerScheduler> = Rc::new(scheduler);

        Notifier {
            notifications: NotificationService::notifications(surface.clone(), scheduler.clone()),
            messages: NotificationService::messages(surface, scheduler),
            revision,
        }
    })
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}
