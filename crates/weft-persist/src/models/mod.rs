pub mod message;
pub mod thread;

pub use message::ChannelMessage;
pub use thread::{Interlocutor, Thread};
