use std::io::Write;

use tempfile::NamedTempFile;

use super::models::TemplateDescriptor;
use super::registry::{FormCatalog, TemplateRegistry, PREVENTION_PLAN_TEMPLATE};
use super::CatalogError;
use crate::config::PdfMonkeyConfig;

fn registry_with(default_id: Option<&str>) -> TemplateRegistry {
    TemplateRegistry::new(
        vec![TemplateDescriptor {
            name: PREVENTION_PLAN_TEMPLATE.to_string(),
            template_id: "tpl-123".to_string(),
        }],
        default_id.map(str::to_string),
    )
}

#[test]
fn resolve_returns_registered_descriptor() {
    let registry = registry_with(None);

    let descriptor = registry.resolve(PREVENTION_PLAN_TEMPLATE).unwrap();

    assert_eq!(descriptor.template_id, "tpl-123");
}

#[test]
fn resolve_returns_none_for_unknown_name() {
    let registry = registry_with(Some("tpl-default"));

    assert!(registry.resolve("Unknown Template").is_none());
}

#[test]
fn resolve_or_default_falls_back_to_configured_id() {
    let registry = registry_with(Some("tpl-default"));

    let descriptor = registry.resolve_or_default("Unknown Template").unwrap();

    assert_eq!(descriptor.name, "Unknown Template");
    assert_eq!(descriptor.template_id, "tpl-default");
}

#[test]
fn resolve_or_default_without_fallback_yields_none() {
    let registry = registry_with(None);

    assert!(registry.resolve_or_default("Unknown Template").is_none());
}

#[test]
fn registry_from_config_binds_prevention_plan_to_default_id() {
    let config = PdfMonkeyConfig {
        api_key: None,
        base_url: "https://api.pdfmonkey.io/api/v1".to_string(),
        default_template_id: Some("tpl-env".to_string()),
    };

    let registry = TemplateRegistry::from_config(&config);

    let descriptor = registry.resolve(PREVENTION_PLAN_TEMPLATE).unwrap();
    assert_eq!(descriptor.template_id, "tpl-env");
}

const CATALOG_JSON: &str = r#"{
  "templates": [
    {
      "id": "plan-prevencion",
      "name": "Plan de Prevención",
      "description": "Informe de plan de prevención.",
      "template_id": "",
      "fields": []
    },
    {
      "id": "otro-informe",
      "name": "Otro Informe",
      "fields": []
    }
  ]
}"#;

fn catalog_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp file");
    file
}

#[test]
fn catalog_list_returns_summaries_with_defaulted_description() {
    let file = catalog_file(CATALOG_JSON);
    let catalog = FormCatalog::new(file.path());

    let summaries = catalog.list().unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].id, "plan-prevencion");
    assert_eq!(summaries[0].description, "Informe de plan de prevención.");
    assert_eq!(summaries[1].id, "otro-informe");
    assert_eq!(summaries[1].description, "");
}

#[test]
fn catalog_find_returns_matching_entry() {
    let file = catalog_file(CATALOG_JSON);
    let catalog = FormCatalog::new(file.path());

    let template = catalog.find("plan-prevencion").unwrap().unwrap();

    assert_eq!(
        template.get("name").and_then(|v| v.as_str()),
        Some("Plan de Prevención")
    );
}

#[test]
fn catalog_find_returns_none_for_absent_id() {
    let file = catalog_file(CATALOG_JSON);
    let catalog = FormCatalog::new(file.path());

    assert!(catalog.find("missing-id").unwrap().is_none());
}

#[test]
fn catalog_missing_file_is_a_distinct_error() {
    let catalog = FormCatalog::new("./definitely-not-here/form_templates.json");

    match catalog.load() {
        Err(CatalogError::Missing(path)) => {
            assert!(path.to_string_lossy().contains("form_templates.json"));
        }
        other => panic!("expected Missing error, got {other:?}"),
    }
}

#[test]
fn catalog_malformed_file_is_a_corrupt_error() {
    let file = catalog_file("{ not valid json ");
    let catalog = FormCatalog::new(file.path());

    assert!(matches!(catalog.load(), Err(CatalogError::Corrupt(_))));
}
