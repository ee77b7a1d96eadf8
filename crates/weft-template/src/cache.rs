use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::model::Template;

/// Shared cache of template bodies, keyed by template name only.
///
/// Bodies are immutable once named, so a stale entry cannot change meaning;
/// substitution is recomputed on every render, never cached. The map is
/// unbounded; `clear` is the administrative escape hatch after template
/// updates.
#[derive(Default)]
pub struct TemplateCache {
    entries: RwLock<HashMap<String, Arc<Template>>>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, name: &str) -> Option<Arc<Template>> {
        self.entries.read().await.get(name).cloned()
    }

    pub async fn insert(&self, template: Template) -> Arc<Template> {
        let template = Arc::new(template);
        self.entries
            .write()
            .await
            .insert(template.name.clone(), Arc::clone(&template));
        template
    }

    /// Empty the cache. Renders already holding a body keep using it.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
        tracing::info!("template cache cleared");
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
