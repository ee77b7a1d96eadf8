pub mod client;
pub mod error;
pub mod traits;
pub mod types;

pub use client::AssistantClient;
pub use error::AssistantError;
pub use traits::RemoteContextClient;
pub use types::{ListMessagesParams, RemoteContent, RemoteMessage, RemoteRole, RunHandle};
