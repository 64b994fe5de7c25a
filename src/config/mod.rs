//! Shell configuration
//!
//! Every field has a default, so a configuration file only needs the values it
//! overrides:
//! - `title`: `"Vault Console"`
//! - `mobile_breakpoint_px`: `768`
//! - `menu`: the bundled navigation menu (`menu.json`)

use serde::{Deserialize, Serialize};

use crate::domain::models::{MenuTree, DEFAULT_MOBILE_BREAKPOINT_PX};
use crate::shared::errors::Result;

/// Bundled navigation menu
pub const DEFAULT_MENU_JSON: &str = include_str!("menu.json");

pub const DEFAULT_TITLE: &str = "Vault Console";

/// Env var naming a configuration file for the native binary
pub const CONFIG_ENV_VAR: &str = "VAULT_CONSOLE_CONFIG";

pub fn default_menu() -> Result<MenuTree> {
    MenuTree::from_json(DEFAULT_MENU_JSON)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub title: String,
    pub mobile_breakpoint_px: f64,
    pub menu: MenuTree,
}

impl Default for ShellConfig {
    fn default() -> Self {
        let menu = default_menu().unwrap_or_else(|e| {
            tracing::error!(error = %e, "Bundled menu configuration is invalid");
            MenuTree::default()
        });

        Self {
            title: DEFAULT_TITLE.to_string(),
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            menu,
        }
    }
}

impl ShellConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file, or the defaults when no path is given
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: Option<&std::path::Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            menu_entries = config.menu.items.len(),
            "Loaded shell configuration"
        );
        Ok(config)
    }
}
