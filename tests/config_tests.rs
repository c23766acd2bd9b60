//! Integration tests for YAML view configuration and engine wiring.

use portal::prelude::*;
use std::io::Write;

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"
views:
  catalog:
    page_size: 6
    default_sort: unit_price
    default_direction: descending
  users:
    page_size: 10
    default_sort: name
"#
    )
    .expect("write yaml");

    let config = PortalConfig::from_yaml_file(file.path().to_str().unwrap()).expect("valid file");
    assert_eq!(config.view("catalog").page_size, 6);
    assert_eq!(config.view("users").default_sort.as_deref(), Some("name"));
}

#[test]
fn test_missing_file_is_an_error() {
    let err = PortalConfig::from_yaml_file("/nonexistent/portal.yaml").unwrap_err();
    assert!(err.to_string().contains("failed to read"));
}

#[test]
fn test_engine_honors_configured_page_size_and_sort() {
    let store = PortalStore::seeded();
    let config = PortalConfig::from_yaml_str(
        r#"
views:
  catalog:
    page_size: 5
    default_sort: unit_price
    default_direction: descending
"#,
    )
    .expect("valid yaml");

    let engine =
        ListQueryEngine::with_config(store.products().unwrap(), &config.view("catalog")).unwrap();

    let view = engine.view();
    assert_eq!(view.page_items.len(), 5);
    assert_eq!(view.total_pages(), 3); // 12 products / 5 per page

    // Most expensive product first
    assert_eq!(view.matched[0].sku, "HYD-3350");
    let prices: Vec<f64> = view.matched.iter().map(|p| p.unit_price).collect();
    let mut sorted = prices.clone();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
    assert_eq!(prices, sorted);
}

#[test]
fn test_configured_sort_key_must_exist_for_record_type() {
    let store = PortalStore::seeded();
    let config = PortalConfig::from_yaml_str(
        r#"
views:
  catalog:
    page_size: 8
    default_sort: assignee
"#,
    )
    .expect("yaml itself is valid");

    // "assignee" is a ticket key, not a product key; wiring it to the
    // catalog engine fails at construction
    let err =
        ListQueryEngine::<Product>::with_config(store.products().unwrap(), &config.view("catalog"))
            .unwrap_err();
    assert_eq!(err.error_code(), "QUERY_UNKNOWN_FIELD");
}

#[test]
fn test_default_config_builds_engines_for_all_stock_views() {
    let store = PortalStore::seeded();
    let config = PortalConfig::default();

    assert!(ListQueryEngine::with_config(store.products().unwrap(), &config.view("catalog")).is_ok());
    assert!(ListQueryEngine::with_config(store.products().unwrap(), &config.view("products")).is_ok());
    assert!(ListQueryEngine::with_config(store.requests().unwrap(), &config.view("requests")).is_ok());
    assert!(ListQueryEngine::with_config(store.users().unwrap(), &config.view("users")).is_ok());
    assert!(ListQueryEngine::with_config(store.tickets().unwrap(), &config.view("tickets")).is_ok());
}
