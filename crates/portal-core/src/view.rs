//! Pure view construction: `(view key, catalog)` → declarative widget tree.
//!
//! The tree carries no toolkit types and no executable handlers. Interactive
//! nodes hold a [`ViewKey`] target as plain data; frontends route every
//! activation through the one navigator they own. Rendering the same state
//! twice yields an equal tree.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ServiceDescriptor};
use crate::navigator::ViewKey;

/// Static page furniture around the catalog content: header and footer text
/// on the summary view. Overridable via `PORTAL_TITLE` and friends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chrome {
    pub title: String,
    pub subtitle: String,
    /// One-line default-credentials hint shown under the header.
    pub access_note: String,
    pub footer: Vec<String>,
}

impl Default for Chrome {
    fn default() -> Self {
        Self {
            title: "🚀 DevOps Lab".to_string(),
            subtitle: "Complete DevOps Platform • Ansible • Kubernetes • CI/CD • Monitoring"
                .to_string(),
            access_note:
                "Default Credentials: ansible / ansible | Admin UIs: admin / devopslab123"
                    .to_string(),
            footer: vec![
                "DevOps Lab • Infrastructure as Code • Powered by Ansible, Docker & Kubernetes"
                    .to_string(),
                "Quick Start: ssh -p 2221 ansible@localhost • Run playbooks from ~/playbooks/"
                    .to_string(),
            ],
        }
    }
}

/// Summary card for one service. Activating the card body navigates to the
/// detail view; the open link is external and must not trigger navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub icon: String,
    pub name: String,
    pub badge: String,
    pub color: String,
    pub port: u16,
    /// First sentence of the service description.
    pub purpose: String,
    pub open_label: String,
    pub url: String,
    pub credentials: String,
    pub target: ViewKey,
}

/// One widget in the declarative tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Heading(String),
    Subtitle(String),
    /// Callout line (credentials hint on the summary header).
    Note(String),
    GroupHeader(String),
    Card(Card),
    Text(String),
    Badge { text: String, color: String },
    InfoRow { label: String, value: String },
    /// Opened in a separate context; never touches navigation state.
    ExternalLink { label: String, href: String },
    /// In-app control routed through the navigator.
    NavButton { label: String, target: ViewKey },
    SectionTitle(String),
    Enumerated(Vec<String>),
    Bulleted(Vec<String>),
    Tags(Vec<String>),
    FooterText(String),
}

/// A fully rendered view, ready for a surface to paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewTree {
    pub key: ViewKey,
    pub nodes: Vec<Node>,
}

/// Renders the view for `key`. A service key no longer in the catalog
/// renders the summary, same fallback rule as token resolution.
pub fn render(key: &ViewKey, catalog: &Catalog, chrome: &Chrome) -> ViewTree {
    match key {
        ViewKey::Home => render_home(catalog, chrome),
        ViewKey::Service(id) => match catalog.get(id) {
            Some(descriptor) => render_service(descriptor),
            None => render_home(catalog, chrome),
        },
    }
}

/// Summary view: header, one group per non-empty category in priority order,
/// one card per member in declaration order, footer.
pub fn render_home(catalog: &Catalog, chrome: &Chrome) -> ViewTree {
    let mut nodes = vec![
        Node::Heading(chrome.title.clone()),
        Node::Subtitle(chrome.subtitle.clone()),
        Node::Note(chrome.access_note.clone()),
    ];

    for (category, members) in catalog.by_category() {
        nodes.push(Node::GroupHeader(category.label().to_string()));
        for descriptor in members {
            nodes.push(Node::Card(summary_card(descriptor)));
        }
    }

    for line in &chrome.footer {
        nodes.push(Node::FooterText(line.clone()));
    }

    ViewTree {
        key: ViewKey::Home,
        nodes,
    }
}

/// Detail view for one service: back control, hero, quick start, features,
/// access panel, integrations, resources, action footer, back control again.
pub fn render_service(descriptor: &ServiceDescriptor) -> ViewTree {
    let nodes = vec![
        Node::NavButton {
            label: "← Back to Dashboard".to_string(),
            target: ViewKey::Home,
        },
        Node::Heading(format!("{} {}", descriptor.icon, descriptor.name)),
        Node::Text(descriptor.description.clone()),
        Node::Badge {
            text: descriptor.category.label().to_string(),
            color: descriptor.color.clone(),
        },
        Node::InfoRow {
            label: "Port".to_string(),
            value: descriptor.port.to_string(),
        },
        Node::ExternalLink {
            label: "Open Service".to_string(),
            href: descriptor.url.clone(),
        },
        Node::SectionTitle("🚀 Quick Start".to_string()),
        Node::Enumerated(descriptor.quick_start.clone()),
        Node::SectionTitle("✨ Key Features".to_string()),
        Node::Bulleted(descriptor.features.clone()),
        Node::SectionTitle("🔐 Access".to_string()),
        Node::InfoRow {
            label: "URL".to_string(),
            value: descriptor.url.clone(),
        },
        Node::InfoRow {
            label: "Credentials".to_string(),
            value: descriptor.credentials.clone(),
        },
        Node::SectionTitle("🔗 Integrations".to_string()),
        Node::Tags(descriptor.integrations.clone()),
        Node::SectionTitle("📚 Documentation & Resources".to_string()),
        Node::ExternalLink {
            label: "📖 Official Documentation".to_string(),
            href: descriptor.docs.clone(),
        },
        Node::ExternalLink {
            label: format!("🌐 Access {}", descriptor.name),
            href: descriptor.url.clone(),
        },
        Node::ExternalLink {
            label: format!("Launch {} →", descriptor.name),
            href: descriptor.url.clone(),
        },
        Node::NavButton {
            label: "← Back to Dashboard".to_string(),
            target: ViewKey::Home,
        },
    ];

    ViewTree {
        key: ViewKey::Service(descriptor.id.clone()),
        nodes,
    }
}

fn summary_card(descriptor: &ServiceDescriptor) -> Card {
    Card {
        icon: descriptor.icon.clone(),
        name: descriptor.name.clone(),
        badge: descriptor.category.label().to_string(),
        color: descriptor.color.clone(),
        port: descriptor.port,
        purpose: descriptor.first_sentence().to_string(),
        open_label: format!("Open {}", descriptor.name),
        url: descriptor.url.clone(),
        credentials: descriptor.credentials.clone(),
        target: ViewKey::Service(descriptor.id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendering_is_pure() {
        let catalog = Catalog::builtin().unwrap();
        let chrome = Chrome::default();
        let first = render(&ViewKey::Home, &catalog, &chrome);
        let second = render(&ViewKey::Home, &catalog, &chrome);
        assert_eq!(first, second);

        let key = ViewKey::Service("jenkins".to_string());
        assert_eq!(
            render(&key, &catalog, &chrome),
            render(&key, &catalog, &chrome)
        );
    }

    #[test]
    fn home_groups_follow_priority_order() {
        let catalog = Catalog::builtin().unwrap();
        let tree = render_home(&catalog, &Chrome::default());
        let headers: Vec<&str> = tree
            .nodes
            .iter()
            .filter_map(|n| match n {
                Node::GroupHeader(label) => Some(label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            headers,
            [
                "CI/CD",
                "Monitoring",
                "Security",
                "Quality",
                "Artifacts",
                "Terminals"
            ]
        );
    }

    #[test]
    fn detail_has_back_controls_at_both_ends() {
        let catalog = Catalog::builtin().unwrap();
        let tree = render_service(catalog.get("vault").unwrap());
        let back = |n: &Node| {
            matches!(
                n,
                Node::NavButton {
                    target: ViewKey::Home,
                    ..
                }
            )
        };
        assert!(back(&tree.nodes[0]));
        assert!(back(tree.nodes.last().unwrap()));
    }

    #[test]
    fn card_purpose_is_first_sentence_only() {
        let catalog = Catalog::builtin().unwrap();
        let tree = render_home(&catalog, &Chrome::default());
        let jenkins = tree
            .nodes
            .iter()
            .find_map(|n| match n {
                Node::Card(card) if card.name == "Jenkins" => Some(card),
                _ => None,
            })
            .unwrap();
        assert_eq!(
            jenkins.purpose,
            "Leading open-source automation server for building, deploying, and automating projects"
        );
        assert_eq!(jenkins.port, 8080);
    }
}
