// Public API exports
pub mod config;
pub mod domain;
pub mod shared;

// Dioxus shell (routes, layouts, components)
pub mod app;
