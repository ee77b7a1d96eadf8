pub mod error;
pub mod locks;
pub mod service;

pub use error::SyncError;
pub use service::{ContextSync, ContextSyncRequest, ThreadContextService};
