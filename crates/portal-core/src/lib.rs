//! portal-core: service catalog, view construction, and single-page
//! navigation for the DevOps Lab portal.
//!
//! The catalog is immutable data validated at construction; the view layer
//! is a pure function from `(view key, catalog)` to a declarative widget
//! tree; the navigator is the one stateful component, written against the
//! [`Surface`] and [`HistoryHost`] seams so every frontend (and every test)
//! supplies its own host. Frontends live under `add-ons/`.

mod catalog;
mod config;
mod error;
mod host;
mod navigator;
mod view;

pub use catalog::{Catalog, Category, ServiceDescriptor};
pub use config::PortalConfig;
pub use error::{CatalogError, CatalogResult};
pub use host::{HistoryHost, ScrollMotion, ScrollUnsupported, SessionHistory, Surface};
pub use navigator::{Navigator, ViewKey};
pub use view::{render, render_home, render_service, Card, Chrome, Node, ViewTree};
