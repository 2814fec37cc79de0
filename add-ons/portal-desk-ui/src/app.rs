//! Desk application: paints the mounted view tree with egui and routes every
//! activation through the one navigator it owns.

use eframe::egui;
use portal_core::{
    Card, Navigator, Node, ScrollMotion, ScrollUnsupported, SessionHistory, Surface, ViewKey,
    ViewTree,
};

use crate::{session_history, PortalStack};

/// Rendering target owned by the navigator. Mount replaces the tree
/// wholesale; egui repaints it every frame.
#[derive(Default)]
pub struct EguiSurface {
    current: Option<ViewTree>,
    scroll_reset: bool,
}

impl EguiSurface {
    pub fn current(&self) -> Option<&ViewTree> {
        self.current.as_ref()
    }

    /// True once after a scroll reset was requested.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset)
    }
}

impl Surface for EguiSurface {
    fn mount(&mut self, view: ViewTree) {
        self.current = Some(view);
    }

    fn scroll_to_top(&mut self, motion: ScrollMotion) -> Result<(), ScrollUnsupported> {
        match motion {
            // egui scroll offsets jump, they do not animate.
            ScrollMotion::Smooth => Err(ScrollUnsupported),
            ScrollMotion::Instant => {
                self.scroll_reset = true;
                Ok(())
            }
        }
    }
}

/// One user intent per frame, applied after painting.
enum NavAction {
    Go(String),
    Back,
    Forward,
}

pub struct DeskApp {
    nav: Navigator<SessionHistory, EguiSurface>,
}

impl DeskApp {
    pub fn new(stack: PortalStack) -> Self {
        let history = session_history(&stack.config);
        let nav = Navigator::start(
            stack.catalog,
            &stack.config,
            history,
            EguiSurface::default(),
        );
        Self { nav }
    }

    fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::Go(token) => self.nav.navigate(&token),
            NavAction::Back => {
                if let Some(token) = self.nav.history_mut().back() {
                    self.nav.history_changed(Some(&token));
                }
            }
            NavAction::Forward => {
                if let Some(token) = self.nav.history_mut().forward() {
                    self.nav.history_changed(Some(&token));
                }
            }
        }
    }
}

impl eframe::App for DeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut action: Option<NavAction> = None;

        egui::TopBottomPanel::top("portal-nav-bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(self.nav.history().can_back(), egui::Button::new("←"))
                    .clicked()
                {
                    action = Some(NavAction::Back);
                }
                if ui
                    .add_enabled(self.nav.history().can_forward(), egui::Button::new("→"))
                    .clicked()
                {
                    action = Some(NavAction::Forward);
                }
                ui.separator();
                let location = match self.nav.current_view() {
                    ViewKey::Home => "Dashboard".to_string(),
                    ViewKey::Service(id) => format!("Dashboard / {id}"),
                };
                ui.label(egui::RichText::new(location).strong());
            });
        });

        let reset = self.nav.surface_mut().take_scroll_request();
        let tree = self.nav.surface().current().cloned();

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut area = egui::ScrollArea::vertical().auto_shrink([false; 2]);
            if reset {
                area = area.vertical_scroll_offset(0.0);
            }
            area.show(ui, |ui| {
                if let Some(tree) = &tree {
                    for node in &tree.nodes {
                        if let Some(a) = paint_node(ui, node) {
                            action = Some(a);
                        }
                    }
                }
            });
        });

        if let Some(action) = action {
            self.apply(action);
        }
    }
}

fn paint_node(ui: &mut egui::Ui, node: &Node) -> Option<NavAction> {
    let mut action = None;
    match node {
        Node::Heading(text) => {
            ui.heading(text);
        }
        Node::Subtitle(text) => {
            ui.label(egui::RichText::new(text).italics());
        }
        Node::Note(text) => {
            ui.label(egui::RichText::new(text).color(ui.visuals().warn_fg_color));
        }
        Node::GroupHeader(label) => {
            ui.add_space(14.0);
            ui.label(egui::RichText::new(label).strong().size(18.0));
            ui.separator();
        }
        Node::Card(card) => {
            action = paint_card(ui, card);
        }
        Node::Text(text) => {
            ui.label(text);
        }
        Node::Badge { text, color } => {
            ui.label(egui::RichText::new(text).strong().color(accent(color)));
        }
        Node::InfoRow { label, value } => {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(format!("{label}:")).strong());
                ui.label(value);
            });
        }
        Node::ExternalLink { label, href } => {
            ui.hyperlink_to(label, href);
        }
        Node::NavButton { label, target } => {
            if ui.button(label).clicked() {
                action = Some(NavAction::Go(target.token().to_string()));
            }
        }
        Node::SectionTitle(title) => {
            ui.add_space(10.0);
            ui.label(egui::RichText::new(title).strong().size(16.0));
        }
        Node::Enumerated(items) => {
            for (i, item) in items.iter().enumerate() {
                ui.label(format!("{}. {item}", i + 1));
            }
        }
        Node::Bulleted(items) => {
            for item in items {
                ui.label(format!("• {item}"));
            }
        }
        Node::Tags(tags) => {
            ui.horizontal_wrapped(|ui| {
                for tag in tags {
                    ui.label(egui::RichText::new(format!("[{tag}]")).small());
                }
            });
        }
        Node::FooterText(text) => {
            ui.add_space(8.0);
            ui.label(egui::RichText::new(text).weak().small());
        }
    }
    action
}

/// Card body click navigates; the open hyperlink keeps its own click.
fn paint_card(ui: &mut egui::Ui, card: &Card) -> Option<NavAction> {
    let mut action = None;
    let response = egui::Frame::group(ui.style())
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("{} {}", card.icon, card.name))
                        .strong()
                        .size(15.0),
                );
                ui.label(
                    egui::RichText::new(&card.badge)
                        .small()
                        .color(accent(&card.color)),
                );
            });
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Port:").strong());
                ui.label(card.port.to_string());
            });
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Purpose:").strong());
                ui.label(&card.purpose);
            });
            ui.hyperlink_to(&card.open_label, &card.url);
            ui.label(egui::RichText::new(&card.credentials).weak().small());
        })
        .response;

    if response.interact(egui::Sense::click()).clicked() {
        action = Some(NavAction::Go(card.target.token().to_string()));
    }
    action
}

/// `#rrggbb` accent string to an egui color; off-palette input falls back
/// to gray.
fn accent(color: &str) -> egui::Color32 {
    let hex = color.trim_start_matches('#');
    if hex.len() != 6 {
        return egui::Color32::GRAY;
    }
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0x80)
    };
    egui::Color32::from_rgb(channel(0..2), channel(2..4), channel(4..6))
}
