use serde::{Deserialize, Serialize};

/// A named message template, structured the way channel APIs describe them:
/// an ordered list of components, each with an optional text fragment that
/// may contain 1-indexed `{{i}}` placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub components: Vec<TemplateComponent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateComponent {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComponentType {
    Header,
    Body,
    Footer,
    Buttons,
}

impl Template {
    pub fn new(name: impl Into<String>, components: Vec<TemplateComponent>) -> Self {
        Self {
            name: name.into(),
            components,
        }
    }
}

impl TemplateComponent {
    pub fn new(component_type: ComponentType, text: impl Into<String>) -> Self {
        Self {
            component_type,
            text: Some(text.into()),
        }
    }

    /// Component with no renderable text (e.g. button blocks).
    pub fn empty(component_type: ComponentType) -> Self {
        Self {
            component_type,
            text: None,
        }
    }
}
