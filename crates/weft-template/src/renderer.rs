use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::TemplateCache;
use crate::error::{Result, TemplateError};
use crate::model::Template;
use crate::params::{value_to_string, TemplateParams};
use crate::source::TemplateSource;

/// Renders named templates into plain conversational text.
///
/// The renderer caches template *bodies* per name and substitutes `{{i}}`
/// placeholders with the i-th parameter on every call. Unmatched
/// placeholders are left verbatim. Non-empty component texts are joined
/// with a blank line and the result is trimmed.
pub struct TemplateRenderer {
    source: Arc<dyn TemplateSource>,
    cache: Arc<TemplateCache>,
}

impl TemplateRenderer {
    pub fn new(source: Arc<dyn TemplateSource>) -> Self {
        Self::with_cache(source, Arc::new(TemplateCache::new()))
    }

    /// Use an externally owned cache, e.g. one shared across renderers or
    /// one a test wants to inspect.
    pub fn with_cache(source: Arc<dyn TemplateSource>, cache: Arc<TemplateCache>) -> Self {
        Self { source, cache }
    }

    pub async fn render(&self, name: &str, params: &TemplateParams) -> Result<String> {
        if name.is_empty() {
            return Err(TemplateError::Render {
                template: String::new(),
                reason: "template name is empty".to_string(),
            });
        }

        let template = self.get_or_load(name).await?;
        Ok(substitute(&template, params))
    }

    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }

    pub fn cache(&self) -> &TemplateCache {
        &self.cache
    }

    async fn get_or_load(&self, name: &str) -> Result<Arc<Template>> {
        if let Some(template) = self.cache.get(name).await {
            debug!(template = name, "using cached template body");
            return Ok(template);
        }

        info!(template = name, "loading template body");
        let template = self
            .source
            .load(name)
            .await
            .map_err(|e| TemplateError::Load {
                template: name.to_string(),
                source: e.into(),
            })?;

        // Concurrent first loads of the same name may both get here;
        // last write wins, which is fine since bodies are immutable.
        Ok(self.cache.insert(template).await)
    }
}

fn substitute(template: &Template, params: &TemplateParams) -> String {
    let values = params.values();
    let mut parts: Vec<String> = Vec::new();

    for component in &template.components {
        let Some(text) = &component.text else {
            continue;
        };

        let mut rendered = text.clone();
        for (index, value) in values.iter().enumerate() {
            let placeholder = format!("{{{{{}}}}}", index + 1);
            if rendered.contains(&placeholder) {
                rendered = rendered.replace(&placeholder, &value_to_string(value));
            }
        }

        if !rendered.is_empty() {
            parts.push(rendered);
        }
    }

    parts.join("\n\n").trim().to_string()
}
