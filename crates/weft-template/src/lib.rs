pub mod cache;
pub mod error;
pub mod model;
pub mod params;
pub mod renderer;
pub mod source;

pub use cache::TemplateCache;
pub use error::TemplateError;
pub use model::{ComponentType, Template, TemplateComponent};
pub use params::TemplateParams;
pub use renderer::TemplateRenderer;
pub use source::{StaticTemplateSource, TemplateSource};
