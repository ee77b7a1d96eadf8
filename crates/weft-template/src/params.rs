use serde_json::Value;

/// Parameters for template substitution.
///
/// Either a positional sequence or a keyed mapping; keyed values are taken
/// in insertion order and treated positionally from then on, so `{{1}}`
/// always refers to the first value either way.
#[derive(Debug, Clone)]
pub enum TemplateParams {
    Positional(Vec<Value>),
    Keyed(Vec<(String, Value)>),
}

impl TemplateParams {
    pub fn values(&self) -> Vec<&Value> {
        match self {
            TemplateParams::Positional(values) => values.iter().collect(),
            TemplateParams::Keyed(entries) => entries.iter().map(|(_, v)| v).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TemplateParams::Positional(values) => values.len(),
            TemplateParams::Keyed(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TemplateParams {
    fn default() -> Self {
        TemplateParams::Positional(Vec::new())
    }
}

impl From<Vec<Value>> for TemplateParams {
    fn from(values: Vec<Value>) -> Self {
        TemplateParams::Positional(values)
    }
}

impl From<Vec<String>> for TemplateParams {
    fn from(values: Vec<String>) -> Self {
        TemplateParams::Positional(values.into_iter().map(Value::String).collect())
    }
}

impl From<Vec<&str>> for TemplateParams {
    fn from(values: Vec<&str>) -> Self {
        TemplateParams::Positional(
            values.into_iter().map(|v| Value::String(v.to_string())).collect(),
        )
    }
}

impl From<Vec<(String, Value)>> for TemplateParams {
    fn from(entries: Vec<(String, Value)>) -> Self {
        TemplateParams::Keyed(entries)
    }
}

/// String form used for substitution: strings go in unquoted, everything
/// else through its JSON representation.
pub(crate) fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
