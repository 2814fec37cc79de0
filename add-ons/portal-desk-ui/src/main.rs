//! portal-desk-ui: egui desktop frontend for the DevOps Lab portal.
//! Summary cards grouped by category; click a card for the detail view.

use eframe::egui;
use portal_desk_ui::{build_portal, DeskApp};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let stack = build_portal().expect("load portal catalog");
    let title = stack.config.chrome.title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        "DevOps Lab Portal",
        options,
        Box::new(move |_cc| Ok(Box::new(DeskApp::new(stack)))),
    )
}
