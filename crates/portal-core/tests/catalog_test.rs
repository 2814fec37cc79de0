//! Integration test: catalog construction and grouping.
//!
//! Verifies that:
//! 1. The embedded catalog parses, with the lab's 15 services intact.
//! 2. Grouping follows the fixed category priority and omits empty groups.
//! 3. Construction rejects bad data loudly instead of dropping entries.
//! 4. External catalog files load by extension (TOML and JSON).

use portal_core::{Catalog, CatalogError, Category};

#[test]
fn builtin_catalog_loads_all_services() {
    let catalog = Catalog::builtin().expect("embedded catalog parses");
    assert_eq!(catalog.len(), 15);

    let jenkins = catalog.get("jenkins").expect("jenkins is cataloged");
    assert_eq!(jenkins.port, 8080);
    assert_eq!(jenkins.category, Category::CiCd);
    assert_eq!(jenkins.credentials, "admin / devopslab123");
    assert_eq!(jenkins.features.len(), 5);
    assert_eq!(jenkins.quick_start.len(), 5);

    let vault = catalog.get("vault").expect("vault is cataloged");
    assert_eq!(vault.port, 8200);
    assert_eq!(vault.category, Category::Security);
    assert_eq!(vault.credentials, "Token: devopslab-root-token");

    assert!(catalog.get("doesnotexist").is_none());
}

#[test]
fn builtin_declaration_order_is_preserved() {
    let catalog = Catalog::builtin().unwrap();
    let first_ids: Vec<&str> = catalog.all().iter().take(4).map(|d| d.id.as_str()).collect();
    assert_eq!(first_ids, ["jenkins", "gitlab", "prometheus", "grafana"]);
}

#[test]
fn builtin_groups_in_priority_order() {
    let catalog = Catalog::builtin().unwrap();
    let groups = catalog.by_category();
    let order: Vec<Category> = groups.iter().map(|(c, _)| *c).collect();
    assert_eq!(order, Category::PRIORITY);

    // Declaration order within a group.
    let (_, ci) = &groups[0];
    let ids: Vec<&str> = ci.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["jenkins", "gitlab"]);

    // Terminals group holds all seven lab machines.
    let (_, terminals) = groups.last().unwrap();
    assert_eq!(terminals.len(), 7);
}

#[test]
fn empty_groups_are_omitted() {
    let full = Catalog::builtin().unwrap();
    let subset: Vec<_> = full
        .all()
        .iter()
        .filter(|d| d.category != Category::Quality)
        .cloned()
        .collect();
    let catalog = Catalog::from_entries(subset).unwrap();
    let order: Vec<Category> = catalog.by_category().iter().map(|(c, _)| *c).collect();
    assert!(!order.contains(&Category::Quality));
    assert_eq!(order.len(), 5);
}

#[test]
fn duplicate_ids_fail_construction() {
    let full = Catalog::builtin().unwrap();
    let mut entries = full.all().to_vec();
    entries.push(entries[0].clone());
    let err = Catalog::from_entries(entries).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(id) if id == "jenkins"));
}

#[test]
fn load_path_dispatches_on_extension() {
    let dir = tempfile::tempdir().unwrap();

    let toml_path = dir.path().join("catalog.toml");
    std::fs::write(
        &toml_path,
        r##"
        [[service]]
        id = "ci"
        name = "CI"
        icon = "🔧"
        color = "#112233"
        category = "CI/CD"
        port = 9999
        url = "http://localhost:9999"
        credentials = "admin / admin"
        description = "A build server. With more detail."
        docs = "https://example.com"
        "##,
    )
    .unwrap();
    let catalog = Catalog::load_path(&toml_path).expect("toml catalog loads");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("ci").unwrap().port, 9999);

    let json_path = dir.path().join("catalog.json");
    std::fs::write(
        &json_path,
        r##"{
            "services": [{
                "id": "mon",
                "name": "Mon",
                "icon": "📊",
                "color": "#445566",
                "category": "Monitoring",
                "port": 9998,
                "url": "http://localhost:9998",
                "credentials": "none",
                "description": "A metrics stack.",
                "docs": "https://example.com"
            }]
        }"##,
    )
    .unwrap();
    let catalog = Catalog::load_path(&json_path).expect("json catalog loads");
    assert_eq!(catalog.get("mon").unwrap().category, Category::Monitoring);

    let yaml_path = dir.path().join("catalog.yaml");
    std::fs::write(&yaml_path, "service: []").unwrap();
    assert!(matches!(
        Catalog::load_path(&yaml_path),
        Err(CatalogError::UnsupportedFormat(ext)) if ext == "yaml"
    ));
}

#[test]
fn missing_catalog_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::load_path(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}
