pub mod components;
pub mod layouts;
pub mod pages;

// Re-export the console shell App
pub use pages::shell_routes::App;
