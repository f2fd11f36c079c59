use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use super::models::{TemplateDescriptor, TemplateSummary};
use super::CatalogError;
use crate::config::PdfMonkeyConfig;

pub const PREVENTION_PLAN_TEMPLATE: &str = "Plan de Prevención";

const DEFAULT_CATALOG_PATH: &str = "./data/form_templates.json";

/// In-process map from template display name to its PDFMonkey id.
///
/// Built once at startup and read-only afterwards; handlers receive it
/// through `AppState` so tests can inject their own bindings.
pub struct TemplateRegistry {
    templates: HashMap<String, TemplateDescriptor>,
    default_template_id: Option<String>,
}

impl TemplateRegistry {
    pub fn new(
        descriptors: Vec<TemplateDescriptor>,
        default_template_id: Option<String>,
    ) -> Self {
        let templates = descriptors
            .into_iter()
            .map(|descriptor| (descriptor.name.clone(), descriptor))
            .collect();
        Self {
            templates,
            default_template_id,
        }
    }

    /// Registry with the known templates bound to the configured ids.
    pub fn from_config(config: &PdfMonkeyConfig) -> Self {
        let mut descriptors = Vec::new();
        if let Some(id) = &config.default_template_id {
            descriptors.push(TemplateDescriptor {
                name: PREVENTION_PLAN_TEMPLATE.to_string(),
                template_id: id.clone(),
            });
        }
        Self::new(descriptors, config.default_template_id.clone())
    }

    pub fn resolve(&self, name: &str) -> Option<&TemplateDescriptor> {
        self.templates.get(name)
    }

    /// Descriptor for a display name, falling back to the configured
    /// default template id when the name itself is not registered.
    pub fn resolve_or_default(&self, name: &str) -> Option<TemplateDescriptor> {
        if let Some(descriptor) = self.resolve(name) {
            return Some(descriptor.clone());
        }
        self.default_template_id
            .as_ref()
            .map(|id| TemplateDescriptor {
                name: name.to_string(),
                template_id: id.clone(),
            })
    }
}

/// File-backed catalog of form definitions served to the frontend.
///
/// The file is read at request time, so edits are picked up without a
/// restart. Missing and malformed files map to distinct errors.
pub struct FormCatalog {
    path: PathBuf,
}

impl FormCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Self {
        let path = env::var("FORM_TEMPLATES_PATH")
            .unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string());
        Self::new(path)
    }

    pub fn load(&self) -> Result<Value, CatalogError> {
        if !self.path.exists() {
            return Err(CatalogError::Missing(self.path.clone()));
        }
        let raw = fs::read_to_string(&self.path).map_err(CatalogError::Io)?;
        serde_json::from_str(&raw).map_err(CatalogError::Corrupt)
    }

    pub fn list(&self) -> Result<Vec<TemplateSummary>, CatalogError> {
        let data = self.load()?;
        let summaries = data
            .get("templates")
            .and_then(Value::as_array)
            .map(|templates| {
                templates
                    .iter()
                    .filter_map(|template| {
                        Some(TemplateSummary {
                            id: template.get("id")?.as_str()?.to_string(),
                            name: template.get("name")?.as_str()?.to_string(),
                            description: template
                                .get("description")
                                .and_then(Value::as_str)
                                .unwrap_or_default()
                                .to_string(),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(summaries)
    }

    pub fn find(&self, id: &str) -> Result<Option<Value>, CatalogError> {
        let data = self.load()?;
        let found = data
            .get("templates")
            .and_then(Value::as_array)
            .and_then(|templates| {
                templates
                    .iter()
                    .find(|template| {
                        template.get("id").and_then(Value::as_str) == Some(id)
                    })
                    .cloned()
            });
        Ok(found)
    }
}
