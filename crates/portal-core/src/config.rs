//! Portal configuration loaded from the environment. Unset => defaults.
//!
//! | Env | Default | Description |
//! |-----|---------|-------------|
//! | PORTAL_TITLE | 🚀 DevOps Lab | Summary header title. |
//! | PORTAL_SUBTITLE | (lab tagline) | Summary header subtitle. |
//! | PORTAL_ACCESS_NOTE | (credentials hint) | Callout under the header. |
//! | PORTAL_CATALOG_PATH | unset | External catalog file (.toml/.json); embedded data otherwise. |
//! | PORTAL_INITIAL_ROUTE | unset | Startup token for hosts with no native location. |
//! | PORTAL_SMOOTH_SCROLL | true | Attempt smooth scroll resets before the instant fallback. |

use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::error::CatalogResult;
use crate::view::Chrome;

/// Runtime configuration for a portal frontend.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub chrome: Chrome,
    /// PORTAL_CATALOG_PATH: load this file instead of the embedded catalog.
    pub catalog_path: Option<PathBuf>,
    /// PORTAL_INITIAL_ROUTE: token the startup history entry carries.
    pub initial_route: Option<String>,
    /// PORTAL_SMOOTH_SCROLL: when false, go straight to instant scroll resets.
    pub smooth_scroll: bool,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            chrome: Chrome::default(),
            catalog_path: None,
            initial_route: None,
            smooth_scroll: true,
        }
    }
}

impl PortalConfig {
    /// Load from environment. See module docs for variable names.
    pub fn from_env() -> Self {
        let mut chrome = Chrome::default();
        if let Some(title) = env_opt_string("PORTAL_TITLE") {
            chrome.title = title;
        }
        if let Some(subtitle) = env_opt_string("PORTAL_SUBTITLE") {
            chrome.subtitle = subtitle;
        }
        if let Some(note) = env_opt_string("PORTAL_ACCESS_NOTE") {
            chrome.access_note = note;
        }
        Self {
            chrome,
            catalog_path: env_opt_string("PORTAL_CATALOG_PATH").map(PathBuf::from),
            initial_route: env_opt_string("PORTAL_INITIAL_ROUTE"),
            smooth_scroll: env_bool("PORTAL_SMOOTH_SCROLL", true),
        }
    }

    /// Catalog per config: the external file when set, embedded data otherwise.
    pub fn load_catalog(&self) -> CatalogResult<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load_path(path),
            None => Catalog::builtin(),
        }
    }
}

fn env_bool(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(v) => v.trim().eq_ignore_ascii_case("true") || (v.trim().is_empty() && default),
        Err(_) => default,
    }
}

fn env_opt_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
