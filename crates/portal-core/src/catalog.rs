//! Immutable service catalog: descriptors, categories, and grouping.
//!
//! The catalog is loaded once (embedded data or an external TOML/JSON file),
//! validated at construction, and never mutated afterwards. Lookup and
//! grouping are the only behavior it has.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::{CatalogError, CatalogResult};

/// Built-in catalog data compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/services.toml");

/// Closed set of dashboard groups.
///
/// Grouped iteration always follows [`Category::PRIORITY`] regardless of the
/// order services were declared in. A category label outside this set is a
/// parse error, not a silently dropped entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "CI/CD")]
    CiCd,
    Monitoring,
    Security,
    Quality,
    Artifacts,
    Terminals,
}

impl Category {
    /// Fixed ordering for the summary view's group headers.
    pub const PRIORITY: [Category; 6] = [
        Category::CiCd,
        Category::Monitoring,
        Category::Security,
        Category::Quality,
        Category::Artifacts,
        Category::Terminals,
    ];

    /// Display label as shown on badges and group headers.
    pub fn label(&self) -> &'static str {
        match self {
            Category::CiCd => "CI/CD",
            Category::Monitoring => "Monitoring",
            Category::Security => "Security",
            Category::Quality => "Quality",
            Category::Artifacts => "Artifacts",
            Category::Terminals => "Terminals",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One cataloged tool or lab machine.
///
/// `port` and `url` are informational only; the portal never dials them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// Stable identifier, used in navigation and as the history token.
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Accent color as a `#rrggbb` string.
    pub color: String,
    pub category: Category,
    pub port: u16,
    pub url: String,
    /// Display string describing default access.
    pub credentials: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub quick_start: Vec<String>,
    #[serde(default)]
    pub integrations: Vec<String>,
    pub docs: String,
}

impl ServiceDescriptor {
    /// Description text up to the first `.` — the summary card's purpose row.
    pub fn first_sentence(&self) -> &str {
        self.description
            .split('.')
            .next()
            .unwrap_or(&self.description)
    }
}

/// File shape for catalog data: a `[[service]]` array of tables in TOML,
/// `{"service": [...]}` (or `"services"`) in JSON.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "service", alias = "services")]
    services: Vec<ServiceDescriptor>,
}

/// The full immutable set of descriptors, keyed by id.
///
/// Iteration order is declaration order; `by_category` regroups it under the
/// fixed [`Category::PRIORITY`] sequence.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<ServiceDescriptor>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from descriptors, validating ids.
    ///
    /// Rejects empty and duplicate ids. Category validity is enforced by the
    /// closed [`Category`] enum before the entries ever reach this point.
    pub fn from_entries(entries: Vec<ServiceDescriptor>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries, index })
    }

    /// Parses the TOML catalog format.
    pub fn from_toml_str(data: &str) -> CatalogResult<Self> {
        let file: CatalogFile = toml::from_str(data)?;
        Self::from_entries(file.services)
    }

    /// Parses the JSON catalog format.
    pub fn from_json_str(data: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_json::from_str(data)?;
        Self::from_entries(file.services)
    }

    /// Loads a catalog file, dispatching on extension (`.toml` or `.json`).
    pub fn load_path<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&data),
            Some("json") => Self::from_json_str(&data),
            other => Err(CatalogError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// The embedded catalog (the lab's 15 services and machines).
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Lookup by id.
    pub fn get(&self, id: &str) -> Option<&ServiceDescriptor> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// True when `id` names a cataloged service.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All descriptors in declaration order.
    pub fn all(&self) -> &[ServiceDescriptor] {
        &self.entries
    }

    /// Descriptors grouped by category in [`Category::PRIORITY`] order,
    /// declaration order within each group. Empty groups are omitted.
    pub fn by_category(&self) -> Vec<(Category, Vec<&ServiceDescriptor>)> {
        Category::PRIORITY
            .iter()
            .filter_map(|&category| {
                let members: Vec<&ServiceDescriptor> = self
                    .entries
                    .iter()
                    .filter(|entry| entry.category == category)
                    .collect();
                if members.is_empty() {
                    None
                } else {
                    Some((category, members))
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(id: &str, category: Category) -> ServiceDescriptor {
        ServiceDescriptor {
            id: id.to_string(),
            name: id.to_uppercase(),
            icon: "🔧".to_string(),
            color: "#336699".to_string(),
            category,
            port: 8080,
            url: format!("http://localhost:8080/{id}"),
            credentials: "admin / admin".to_string(),
            description: "First sentence. Second sentence.".to_string(),
            features: vec![],
            quick_start: vec![],
            integrations: vec![],
            docs: "https://example.com/docs".to_string(),
        }
    }

    #[test]
    fn first_sentence_stops_at_dot() {
        let d = descriptor("a", Category::Quality);
        assert_eq!(d.first_sentence(), "First sentence");
    }

    #[test]
    fn first_sentence_without_dot_is_whole_description() {
        let mut d = descriptor("a", Category::Quality);
        d.description = "No terminator here".to_string();
        assert_eq!(d.first_sentence(), "No terminator here");
    }

    #[test]
    fn duplicate_id_rejected() {
        let err = Catalog::from_entries(vec![
            descriptor("a", Category::Security),
            descriptor("a", Category::Quality),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn empty_id_rejected() {
        let err = Catalog::from_entries(vec![descriptor("  ", Category::Security)]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyId(0)));
    }

    #[test]
    fn by_category_follows_priority_not_declaration() {
        let catalog = Catalog::from_entries(vec![
            descriptor("term", Category::Terminals),
            descriptor("ci", Category::CiCd),
            descriptor("sec", Category::Security),
        ])
        .unwrap();
        let groups: Vec<Category> = catalog.by_category().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            groups,
            [Category::CiCd, Category::Security, Category::Terminals]
        );
    }

    #[test]
    fn unknown_category_label_is_a_parse_error() {
        let data = r##"
            [[service]]
            id = "x"
            name = "X"
            icon = "x"
            color = "#000000"
            category = "Databases"
            port = 1
            url = "http://localhost:1"
            credentials = "none"
            description = "x."
            docs = "https://example.com"
        "##;
        assert!(matches!(
            Catalog::from_toml_str(data),
            Err(CatalogError::Toml(_))
        ));
    }
}
