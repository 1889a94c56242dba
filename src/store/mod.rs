//! Post storage.
//!
//! Posts live behind the [`PostStore`] trait so handlers receive an injected
//! repository instead of touching process-wide state. The only backend today
//! is [`MemoryPostStore`], which lives for the lifetime of the process.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use postbox_mcp::store::{MemoryPostStore, PostStore};
//!
//! let store: Arc<dyn PostStore> = Arc::new(MemoryPostStore::new());
//! let post = store.add("hello").unwrap();
//! assert_eq!(store.list().unwrap()[0].id, post.id);
//! ```

mod memory;

pub use memory::MemoryPostStore;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single text post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier, `{timestamp_ms}-{hex}`
    pub id: String,
    /// Text exactly as submitted
    pub content: String,
    /// Creation time in Unix milliseconds
    pub timestamp: i64,
}

/// Repository of posts, kept in insertion order.
pub trait PostStore: Send + Sync {
    /// Append a new post and return it.
    fn add(&self, content: &str) -> Result<Post>;

    /// All posts in insertion order.
    fn list(&self) -> Result<Vec<Post>>;

    /// Remove the post with `id`, returning it if it existed.
    fn delete(&self, id: &str) -> Result<Option<Post>>;

    /// Number of stored posts.
    fn len(&self) -> Result<usize>;

    /// Whether the store holds no posts.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
