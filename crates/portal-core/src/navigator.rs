//! Single-page navigation: a view-key state machine over the catalog.
//!
//! The navigator is the only stateful component. It reacts to exactly two
//! event kinds — explicit navigation requests and host history changes —
//! plus a one-time startup resolution. Every operation is synchronous and
//! completes before the triggering event handler returns.

use std::sync::Arc;
use tracing::{debug, trace};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::config::PortalConfig;
use crate::host::{HistoryHost, ScrollMotion, Surface};
use crate::view::{render, Chrome};

/// Which view is current: the summary or one service detail page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewKey {
    Home,
    Service(String),
}

impl ViewKey {
    /// History token for this view. Exact inverse of [`ViewKey::resolve`].
    pub fn token(&self) -> &str {
        match self {
            ViewKey::Home => "home",
            ViewKey::Service(id) => id,
        }
    }

    /// Display address pushed alongside the token, hash-fragment style:
    /// `#` for home, `#id` for a detail view.
    pub fn address(&self) -> String {
        match self {
            ViewKey::Home => "#".to_string(),
            ViewKey::Service(id) => format!("#{id}"),
        }
    }

    /// Maps a token to a view key: `"home"`, or the id of a cataloged
    /// service. Anything else resolves to nothing.
    pub fn resolve(token: &str, catalog: &Catalog) -> Option<ViewKey> {
        if token == "home" {
            return Some(ViewKey::Home);
        }
        if catalog.contains(token) {
            return Some(ViewKey::Service(token.to_string()));
        }
        None
    }
}

/// Single-page view controller: owns the current [`ViewKey`], the history
/// host, and the rendering surface.
pub struct Navigator<H, S> {
    catalog: Arc<Catalog>,
    chrome: Chrome,
    smooth_scroll: bool,
    history: H,
    surface: S,
    current: ViewKey,
}

impl<H: HistoryHost, S: Surface> Navigator<H, S> {
    /// Adopts the host's current history entry: a startup token resolving to
    /// a catalog id starts in that detail view, anything else starts on the
    /// summary. Renders the initial view without pushing history.
    pub fn start(catalog: Arc<Catalog>, config: &PortalConfig, history: H, surface: S) -> Self {
        let current = history
            .initial_token()
            .as_deref()
            .and_then(|token| ViewKey::resolve(token, &catalog))
            .unwrap_or(ViewKey::Home);
        debug!(view = current.token(), "portal-nav: start");

        let mut nav = Self {
            catalog,
            chrome: config.chrome.clone(),
            smooth_scroll: config.smooth_scroll,
            history,
            surface,
            current,
        };
        nav.mount_current();
        nav
    }

    pub fn current_view(&self) -> &ViewKey {
        &self.current
    }

    /// Explicit navigation request, normally user-initiated.
    ///
    /// `"home"` or a valid id transitions, pushes one history entry, renders
    /// and resets scroll. Anything else is a silent no-op.
    pub fn navigate(&mut self, target: &str) {
        let Some(next) = ViewKey::resolve(target, &self.catalog) else {
            trace!(target, "portal-nav: unresolved target ignored");
            return;
        };
        debug!(
            from = self.current.token(),
            to = next.token(),
            "portal-nav: navigate"
        );
        self.current = next;
        self.history
            .push(self.current.token(), &self.current.address());
        self.mount_current();
    }

    /// Host history moved (back/forward). Resolves like [`Self::navigate`]
    /// except that a missing or invalid token falls back to the summary, and
    /// nothing is pushed — the host already moved its own stack.
    pub fn history_changed(&mut self, token: Option<&str>) {
        self.current = token
            .and_then(|t| ViewKey::resolve(t, &self.catalog))
            .unwrap_or(ViewKey::Home);
        debug!(to = self.current.token(), "portal-nav: history change");
        self.mount_current();
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// For hosts whose history lives in-process (e.g. [`crate::SessionHistory`]):
    /// step the log, then feed the recovered token to [`Self::history_changed`].
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn mount_current(&mut self) {
        let tree = render(&self.current, &self.catalog, &self.chrome);
        self.surface.mount(tree);
        self.reset_scroll();
    }

    /// Smooth when configured and supported, instant otherwise. A declined
    /// motion is substituted locally and never surfaced.
    fn reset_scroll(&mut self) {
        if self.smooth_scroll && self.surface.scroll_to_top(ScrollMotion::Smooth).is_ok() {
            return;
        }
        let _ = self.surface.scroll_to_top(ScrollMotion::Instant);
    }
}
