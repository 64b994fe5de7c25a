//! Lifecycle engine for transient alerts.
//!
//! Two services share one [`NotificationSurface`]: notifications (bottom-right
//! stack, long default duration) and messages (short-lived toasts). Both mount
//! instances into a container, stack them in creation order and retire each one
//! either when its own timer fires or when the user dismisses it.
//!
//! Everything here runs on the single UI event loop, hence `Rc`/`RefCell`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::domain::models::{
    NotificationId, NotificationInstance, NotificationOptions, NotificationRequest,
};
use crate::shared::logging::{
    log_notification_dropped, log_notification_mounted, log_notification_retired,
};

/// A pending timer that can be cancelled before it fires
pub trait TimerHandle {
    fn cancel(self: Box<Self>);
}

/// Source of one-shot timers
pub trait TimerScheduler {
    fn schedule(&self, after: Duration, on_fire: Box<dyn FnOnce()>) -> Box<dyn TimerHandle>;
}

/// Defaults that distinguish the notification service from the message service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceProfile {
    pub container: &'static str,
    pub duration_ms: u32,
}

pub const NOTIFICATIONS: ServiceProfile = ServiceProfile {
    container: ".notifications",
    duration_ms: 4500,
};

pub const MESSAGES: ServiceProfile = ServiceProfile {
    container: ".messages",
    duration_ms: 1500,
};

struct LiveAlert {
    instance: NotificationInstance,
    timer: Option<Box<dyn TimerHandle>>,
}

struct Container {
    selector: String,
    alerts: Vec<LiveAlert>,
}

/// The rendered surface: mounted containers and the alerts stacked in them
#[derive(Default)]
pub struct NotificationBoard {
    containers: Vec<Container>,
    observers: Vec<Rc<dyn Fn()>>,
}

impl NotificationBoard {
    fn container_mut(&mut self, selector: &str) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| c.selector == selector)
    }

    fn take(&mut self, id: NotificationId) -> Option<LiveAlert> {
        self.containers.iter_mut().find_map(|container| {
            let position = container.alerts.iter().position(|a| a.instance.id == id)?;
            Some(container.alerts.remove(position))
        })
    }
}

/// Shared handle on the [`NotificationBoard`]
#[derive(Clone, Default)]
pub struct NotificationSurface {
    board: Rc<RefCell<NotificationBoard>>,
}

impl NotificationSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a container as rendered. Mounting twice is a no-op.
    pub fn mount_container(&self, selector: &str) {
        let mut board = self.board.borrow_mut();
        if board.container_mut(selector).is_none() {
            board.containers.push(Container {
                selector: selector.to_string(),
                alerts: Vec::new(),
            });
        }
    }

    /// Remove a container along with its alerts, cancelling their timers
    pub fn unmount_container(&self, selector: &str) {
        let removed = {
            let mut board = self.board.borrow_mut();
            let position = board.containers.iter().position(|c| c.selector == selector);
            position.map(|p| board.containers.remove(p))
        };

        if let Some(container) = removed {
            for alert in container.alerts {
                if let Some(timer) = alert.timer {
                    timer.cancel();
                }
            }
            self.notify_observers();
        }
    }

    pub fn is_mounted(&self, selector: &str) -> bool {
        self.board.borrow().containers.iter().any(|c| c.selector == selector)
    }

    /// Live instances of a container, oldest first
    pub fn instances(&self, selector: &str) -> Vec<NotificationInstance> {
        self.board
            .borrow()
            .containers
            .iter()
            .find(|c| c.selector == selector)
            .map(|c| c.alerts.iter().map(|a| a.instance.clone()).collect())
            .unwrap_or_default()
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.board
            .borrow()
            .containers
            .iter()
            .any(|c| c.alerts.iter().any(|a| a.instance.id == id))
    }

    /// Register a callback run after every change to the surface
    pub fn subscribe(&self, observer: Rc<dyn Fn()>) {
        self.board.borrow_mut().observers.push(observer);
    }

    fn notify_observers(&self) {
        let observers = self.board.borrow().observers.clone();
        for observer in observers {
            observer();
        }
    }

    fn mount(&self, instance: NotificationInstance) -> bool {
        let mounted = {
            let mut board = self.board.borrow_mut();
            match board.container_mut(&instance.container) {
                Some(container) => {
                    container.alerts.push(LiveAlert { instance, timer: None });
                    true
                }
                None => false,
            }
        };
        if mounted {
            self.notify_observers();
        }
        mounted
    }

    /// Attach the retirement timer. Returns the handle back if the alert is gone.
    fn attach_timer(&self, id: NotificationId, timer: Box<dyn TimerHandle>) -> Option<Box<dyn TimerHandle>> {
        let mut board = self.board.borrow_mut();
        let alert = board
            .containers
            .iter_mut()
            .flat_map(|c| c.alerts.iter_mut())
            .find(|a| a.instance.id == id);
        match alert {
            Some(alert) => {
                alert.timer = Some(timer);
                None
            }
            None => Some(timer),
        }
    }

    fn retire(&self, id: NotificationId, reason: &str) -> Option<LiveAlert> {
        let alert = self.board.borrow_mut().take(id)?;
        log_notification_retired(&id.to_string(), reason);
        self.notify_observers();
        Some(alert)
    }

    fn downgrade(&self) -> Weak<RefCell<NotificationBoard>> {
        Rc::downgrade(&self.board)
    }
}

/// One alert engine bound to a [`ServiceProfile`]
#[derive(Clone)]
pub struct NotificationService {
    profile: ServiceProfile,
    surface: NotificationSurface,
    scheduler: Rc<dyn TimerScheduler>,
}

impl NotificationService {
    pub fn new(profile: ServiceProfile, surface: NotificationSurface, scheduler: Rc<dyn TimerScheduler>) -> Self {
        Self {
            profile,
            surface,
            scheduler,
        }
    }

    pub fn notifications(surface: NotificationSurface, scheduler: Rc<dyn TimerScheduler>) -> Self {
        Self::new(NOTIFICATIONS, surface, scheduler)
    }

    pub fn messages(surface: NotificationSurface, scheduler: Rc<dyn TimerScheduler>) -> Self {
        Self::new(MESSAGES, surface, scheduler)
    }

    pub fn surface(&self) -> &NotificationSurface {
        &self.surface
    }

    fn instantiate(&self, options: NotificationOptions) -> NotificationInstance {
        NotificationInstance {
            id: NotificationId::new(),
            title: options.title,
            message: options.message,
            kind: options.kind,
            direction: options.direction,
            duration_ms: options.duration_ms.unwrap_or(self.profile.duration_ms),
            container: options
                .container
                .unwrap_or_else(|| self.profile.container.to_string()),
        }
    }

    /// Mount a new alert and start its retirement timer.
    ///
    /// Never fails: when the container is not rendered the alert is logged and
    /// dropped, and the returned handle is inert.
    pub fn create(&self, options: NotificationOptions) -> NotificationHandle {
        let instance = self.instantiate(options);
        let id = instance.id;
        let duration_ms = instance.duration_ms;
        let container = instance.container.clone();
        let title = instance.title.clone();

        if !self.surface.mount(instance) {
            log_notification_dropped(&container, &title);
            return NotificationHandle {
                id,
                service: self.clone(),
            };
        }
        log_notification_mounted(&id.to_string(), &container, duration_ms);

        let board = self.surface.downgrade();
        let timer = self.scheduler.schedule(
            Duration::from_millis(u64::from(duration_ms)),
            Box::new(move || {
                if let Some(board) = board.upgrade() {
                    // The firing timer is done; dropping its handle is enough
                    let _ = NotificationSurface { board }.retire(id, "expired");
                }
            }),
        );
        if let Some(orphan) = self.surface.attach_timer(id, timer) {
            orphan.cancel();
        }

        NotificationHandle {
            id,
            service: self.clone(),
        }
    }

    /// Mount an alert produced by the error classifier
    pub fn notify(&self, request: NotificationRequest) -> NotificationHandle {
        self.create(request.into())
    }

    /// Remove an alert immediately and cancel its pending timer. Idempotent.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        match self.surface.retire(id, "dismissed") {
            Some(alert) => {
                if let Some(timer) = alert.timer {
                    timer.cancel();
                }
                true
            }
            None => false,
        }
    }
}

/// Returned by [`NotificationService::create`]
#[derive(Clone)]
pub struct NotificationHandle {
    id: NotificationId,
    service: NotificationService,
}

impl NotificationHandle {
    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.service.surface.contains(self.id)
    }

    pub fn dismiss(&self) -> bool {
        self.service.dismiss(self.id)
    }
}
