//! Terminal frontend building blocks: the surface and the line renderer.
//!
//! Kept out of `main.rs` so the view-tree-to-lines mapping and the card
//! cursor helpers stay testable without a terminal.

use portal_core::{Node, ScrollMotion, ScrollUnsupported, Surface, ViewTree};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Rendering target owned by the navigator; the draw loop paints whatever is
/// currently mounted.
#[derive(Default)]
pub struct TermSurface {
    current: Option<ViewTree>,
    scroll_reset: bool,
}

impl TermSurface {
    pub fn current(&self) -> Option<&ViewTree> {
        self.current.as_ref()
    }

    /// True once after a scroll reset was requested.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset)
    }
}

impl Surface for TermSurface {
    fn mount(&mut self, view: ViewTree) {
        self.current = Some(view);
    }

    fn scroll_to_top(&mut self, motion: ScrollMotion) -> Result<(), ScrollUnsupported> {
        match motion {
            // A terminal repaint has no animation to offer.
            ScrollMotion::Smooth => Err(ScrollUnsupported),
            ScrollMotion::Instant => {
                self.scroll_reset = true;
                Ok(())
            }
        }
    }
}

/// Navigation tokens of the cards in tree order — the selectable targets on
/// the summary view.
pub fn card_targets(tree: &ViewTree) -> Vec<String> {
    tree.nodes
        .iter()
        .filter_map(|node| match node {
            Node::Card(card) => Some(card.target.token().to_string()),
            _ => None,
        })
        .collect()
}

/// Primary service URL of the view: the selected card's URL on the summary,
/// the first external link on a detail page.
pub fn primary_url(tree: &ViewTree, selected: usize) -> Option<String> {
    let mut card_index = 0;
    for node in &tree.nodes {
        match node {
            Node::Card(card) => {
                if card_index == selected {
                    return Some(card.url.clone());
                }
                card_index += 1;
            }
            Node::ExternalLink { href, .. } => return Some(href.clone()),
            _ => {}
        }
    }
    None
}

/// Documentation URL of a detail view, if the view carries one.
pub fn docs_url(tree: &ViewTree) -> Option<String> {
    tree.nodes.iter().find_map(|node| match node {
        Node::ExternalLink { label, href } if label.contains("Documentation") => {
            Some(href.clone())
        }
        _ => None,
    })
}

/// Flattens a view tree into styled terminal lines. `selected` marks the
/// highlighted card on the summary view.
pub fn tree_lines(tree: &ViewTree, selected: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut card_index = 0;

    for node in &tree.nodes {
        match node {
            Node::Heading(text) => {
                lines.push(Line::styled(
                    text.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            Node::Subtitle(text) => {
                lines.push(Line::styled(
                    text.clone(),
                    Style::default().add_modifier(Modifier::ITALIC),
                ));
            }
            Node::Note(text) => {
                lines.push(Line::styled(text.clone(), Style::default().fg(Color::Yellow)));
                lines.push(Line::raw(""));
            }
            Node::GroupHeader(label) => {
                lines.push(Line::raw(""));
                lines.push(Line::styled(
                    format!("── {label} ──"),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            Node::Card(card) => {
                let is_selected = card_index == selected;
                let marker = if is_selected { "▸" } else { " " };
                let title_style = if is_selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(accent(&card.color))
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                lines.push(Line::from(vec![
                    Span::raw(format!("{marker} ")),
                    Span::styled(format!("{} {}", card.icon, card.name), title_style),
                    Span::styled(
                        format!("  [{}]  :{}", card.badge, card.port),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
                lines.push(Line::raw(format!("    {}", card.purpose)));
                lines.push(Line::styled(
                    format!("    {}  ({})", card.url, card.credentials),
                    Style::default().fg(Color::DarkGray),
                ));
                card_index += 1;
            }
            Node::Text(text) => {
                lines.push(Line::raw(text.clone()));
            }
            Node::Badge { text, color } => {
                lines.push(Line::styled(
                    format!("[{text}]"),
                    Style::default().fg(accent(color)),
                ));
            }
            Node::InfoRow { label, value } => {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{label}: "),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(value.clone()),
                ]));
            }
            Node::ExternalLink { label, href } => {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("↗ {label}"),
                        Style::default()
                            .fg(Color::Blue)
                            .add_modifier(Modifier::UNDERLINED),
                    ),
                    Span::styled(format!("  {href}"), Style::default().fg(Color::DarkGray)),
                ]));
            }
            Node::NavButton { label, .. } => {
                lines.push(Line::styled(
                    format!("[Esc] {label}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Node::SectionTitle(title) => {
                lines.push(Line::raw(""));
                lines.push(Line::styled(
                    title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
            }
            Node::Enumerated(items) => {
                for (i, item) in items.iter().enumerate() {
                    lines.push(Line::raw(format!("  {}. {item}", i + 1)));
                }
            }
            Node::Bulleted(items) => {
                for item in items {
                    lines.push(Line::raw(format!("  • {item}")));
                }
            }
            Node::Tags(tags) => {
                lines.push(Line::styled(
                    format!("  {}", tags.join(" · ")),
                    Style::default().fg(Color::Magenta),
                ));
            }
            Node::FooterText(text) => {
                lines.push(Line::raw(""));
                lines.push(Line::styled(
                    text.clone(),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
    }

    lines
}

/// `#rrggbb` accent string to a terminal color; off-palette input falls back
/// to white.
fn accent(color: &str) -> Color {
    let hex = color.trim_start_matches('#');
    if hex.len() != 6 {
        return Color::White;
    }
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0x80)
    };
    Color::Rgb(channel(0..2), channel(2..4), channel(4..6))
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::{render_home, Catalog, Chrome};

    #[test]
    fn card_targets_match_catalog_order() {
        let catalog = Catalog::builtin().unwrap();
        let tree = render_home(&catalog, &Chrome::default());
        let targets = card_targets(&tree);
        assert_eq!(targets.len(), catalog.len());
        assert_eq!(targets[0], "jenkins");
        assert_eq!(targets[1], "gitlab");
    }

    #[test]
    fn primary_url_follows_selection() {
        let catalog = Catalog::builtin().unwrap();
        let tree = render_home(&catalog, &Chrome::default());
        assert_eq!(
            primary_url(&tree, 0).as_deref(),
            Some("http://localhost:8080")
        );
        assert_eq!(
            primary_url(&tree, 1).as_deref(),
            Some("http://localhost:8081")
        );
    }

    #[test]
    fn docs_url_found_on_detail_view() {
        let catalog = Catalog::builtin().unwrap();
        let tree = portal_core::render_service(catalog.get("jenkins").unwrap());
        assert_eq!(docs_url(&tree).as_deref(), Some("https://www.jenkins.io/doc/"));
        assert!(card_targets(&tree).is_empty());
    }
}
