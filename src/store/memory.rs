//! In-memory post store.
//!
//! A `Vec<Post>` behind an `RwLock`: any number of readers, one writer at a
//! time. Nothing is persisted; the list starts empty with the process.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;

use crate::error::Result;
use crate::id::{generate_post_id, now_ms};

use super::{Post, PostStore};

/// Process-lifetime post list
#[derive(Debug, Default)]
pub struct MemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl MemoryPostStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Post>> {
        self.posts.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Post>> {
        self.posts.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl PostStore for MemoryPostStore {
    fn add(&self, content: &str) -> Result<Post> {
        let mut posts = self.write();

        // IDs share a millisecond prefix under bursts; re-roll until unique
        let mut id = generate_post_id();
        while posts.iter().any(|p| p.id == id) {
            id = generate_post_id();
        }

        let post = Post {
            id,
            content: content.to_string(),
            timestamp: now_ms(),
        };
        posts.push(post.clone());
        debug!("Stored post {} ({} total)", post.id, posts.len());
        Ok(post)
    }

    fn list(&self) -> Result<Vec<Post>> {
        Ok(self.read().clone())
    }

    fn delete(&self, id: &str) -> Result<Option<Post>> {
        let mut posts = self.write();
        let Some(index) = posts.iter().position(|p| p.id == id) else {
            return Ok(None);
        };
        Ok(Some(posts.remove(index)))
    }

    fn len(&self) -> Result<usize> {
        Ok(self.read().len())
    }
}
