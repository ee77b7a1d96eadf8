use std::collections::HashMap;

use async_trait::async_trait;

use crate::model::Template;

/// Where template bodies come from (a database, a channel API, a fixture
/// set). Only loading is in scope here; rendering is the renderer's job.
#[async_trait]
pub trait TemplateSource: Send + Sync {
    async fn load(&self, name: &str) -> anyhow::Result<Template>;
}

/// In-memory template source. Useful for tests and for deployments that
/// ship a fixed template set with the binary.
#[derive(Default)]
pub struct StaticTemplateSource {
    templates: HashMap<String, Template>,
}

impl StaticTemplateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.templates.insert(template.name.clone(), template);
        self
    }
}

#[async_trait]
impl TemplateSource for StaticTemplateSource {
    async fn load(&self, name: &str) -> anyhow::Result<Template> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("unknown template '{}'", name))
    }
}
