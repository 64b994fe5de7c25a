//! Vault Console - entry point
//!
//! Native builds read an optional JSON config before launching the shell;
//! the browser build always uses the embedded defaults.

use vault_console::app::App;

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "vault-console", version, about = "Secrets-management console shell")]
struct Args {
    /// JSON file overriding the title, breakpoint and navigation menu
    #[arg(long, env = vault_console::config::CONFIG_ENV_VAR)]
    config: Option<std::path::PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

// Native client (desktop)
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;
    use vault_console::config::ShellConfig;

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .init();

    let config = match ShellConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "Failed to load console config, using defaults");
            ShellConfig::default()
        }
    };

    tracing::info!(title = %config.title, pages = config.menu.leaves().len(), "Starting Vault Console...");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    dioxus::logger::init(tracing::Level::INFO).ok();
    web_sys::console::log_1(&"[WASM] Vault Console initialized".into());
    dioxus::launch(App);
}
