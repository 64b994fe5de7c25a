pub mod errors;
pub mod logging;
pub mod services;

// Dioxus hooks (web and desktop)
pub mod hooks;
