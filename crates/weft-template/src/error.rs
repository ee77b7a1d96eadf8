use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to load template '{template}': {source}")]
    Load {
        template: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to render template '{template}': {reason}")]
    Render { template: String, reason: String },
}

pub type Result<T> = std::result::Result<T, TemplateError>;
