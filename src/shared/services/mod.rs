// Shared services
// Runtime plumbing used by the hooks

pub mod timers;

pub use timers::{run_timers, QueuedTimerScheduler, TimerQueue};
