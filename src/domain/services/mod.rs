// Business logic services
// Framework-agnostic, 100% testable

pub mod component_registry;
pub mod error_classifier;
pub mod notification_service;
pub mod router_guard;

pub use component_registry::{ComponentRegistry, ComponentResolver};
pub use error_classifier::{classify, classify_with, ErrorPolicy};
pub use notification_service::{
    NotificationHandle, NotificationService, NotificationSurface, ServiceProfile, TimerHandle,
    TimerScheduler, MESSAGES, NOTIFICATIONS,
};
pub use router_guard::{GuardedPath, Proceed, RouterSyncGuard, UiStateStore};
