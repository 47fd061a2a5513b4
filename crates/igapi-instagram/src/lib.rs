pub mod client;
pub mod error;
pub mod feed;
pub mod source;
pub mod types;
pub mod wire;

pub use client::InstagramClient;
pub use error::SourceError;
pub use source::ProfileSource;
pub use types::{FeedCursor, Post, PostKind, Profile};
