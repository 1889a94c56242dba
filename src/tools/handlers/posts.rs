//! Post tools: add_post, get_posts, delete_post
//!
//! All three share one injected [`PostStore`].

use std::sync::Arc;

use async_trait::async_trait;
use log::info;
use serde::Deserialize;

use crate::error::{McpError, Result};
use crate::store::PostStore;
use crate::tools::call::ToolCallResult;
use crate::tools::catalog::{ADD_POST, DELETE_POST, GET_POSTS};
use crate::tools::registry::ToolHandler;

/// Argument payload for tools that take none
#[derive(Debug, Default, Deserialize)]
pub struct NoArgs {}

#[derive(Debug, Deserialize)]
pub struct AddPostArgs {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct DeletePostArgs {
    pub id: String,
}

/// Appends a post and reports its new ID
pub struct AddPostHandler {
    store: Arc<dyn PostStore>,
}

impl AddPostHandler {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ToolHandler for AddPostHandler {
    type Args = AddPostArgs;

    fn name(&self) -> &'static str {
        ADD_POST
    }

    async fn call(&self, args: AddPostArgs) -> Result<ToolCallResult> {
        info!("Handling add_post request with content: \"{}\"", args.content);
        if args.content.trim().is_empty() {
            return Ok(ToolCallResult::error("Error: Post content cannot be empty."));
        }

        let post = self.store.add(&args.content)?;
        Ok(ToolCallResult::success(format!(
            "Success! Post added with ID: {}",
            post.id
        )))
    }
}

/// Returns every post as a pretty-printed JSON array
pub struct GetPostsHandler {
    store: Arc<dyn PostStore>,
}

impl GetPostsHandler {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ToolHandler for GetPostsHandler {
    type Args = NoArgs;

    fn name(&self) -> &'static str {
        GET_POSTS
    }

    async fn call(&self, _args: NoArgs) -> Result<ToolCallResult> {
        let posts = self.store.list()?;
        info!("Handling get_posts request, found {} posts", posts.len());
        Ok(ToolCallResult::success(serde_json::to_string_pretty(&posts)?))
    }
}

/// Removes one post by ID
pub struct DeletePostHandler {
    store: Arc<dyn PostStore>,
}

impl DeletePostHandler {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ToolHandler for DeletePostHandler {
    type Args = DeletePostArgs;

    fn name(&self) -> &'static str {
        DELETE_POST
    }

    async fn call(&self, args: DeletePostArgs) -> Result<ToolCallResult> {
        info!("Handling delete_post request for ID: {}", args.id);
        match self.store.delete(&args.id)? {
            Some(_) => Ok(ToolCallResult::success(format!(
                "Success! Post with ID: {} deleted.",
                args.id
            ))),
            None => Ok(ToolCallResult::error(format!(
                "Error: {}",
                McpError::PostNotFound(args.id)
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryPostStore, Post};

    fn store() -> Arc<dyn PostStore> {
        Arc::new(MemoryPostStore::new())
    }

    fn add_args(content: &str) -> AddPostArgs {
        AddPostArgs {
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_post_success() {
        let store = store();
        let handler = AddPostHandler::new(Arc::clone(&store));

        let result = handler.call(add_args("hello")).await.unwrap();
        assert!(!result.is_error);

        let posts = store.list().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(result.text(), format!("Success! Post added with ID: {}", posts[0].id));
    }

    #[tokio::test]
    async fn test_add_post_blank_rejected() {
        let store = store();
        let handler = AddPostHandler::new(Arc::clone(&store));

        let result = handler.call(add_args("  \t")).await.unwrap();
        assert!(result.is_error);
        assert_eq!(result.text(), "Error: Post content cannot be empty.");
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_get_posts_empty() {
        let handler = GetPostsHandler::new(store());
        let result = handler.call(NoArgs {}).await.unwrap();

        assert!(!result.is_error);
        let posts: Vec<Post> = serde_json::from_str(&result.text()).unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_get_posts_in_order() {
        let store = store();
        store.add("one").unwrap();
        store.add("two").unwrap();

        let result = GetPostsHandler::new(Arc::clone(&store)).call(NoArgs {}).await.unwrap();
        let posts: Vec<Post> = serde_json::from_str(&result.text()).unwrap();
        assert_eq!(posts, store.list().unwrap());
        assert_eq!(posts[0].content, "one");
        assert_eq!(posts[1].content, "two");
    }

    #[tokio::test]
    async fn test_delete_post_success() {
        let store = store();
        let post = store.add("bye").unwrap();

        let result = DeletePostHandler::new(Arc::clone(&store))
            .call(DeletePostArgs { id: post.id.clone() })
            .await
            .unwrap();

        assert!(!result.is_error);
        assert_eq!(result.text(), format!("Success! Post with ID: {} deleted.", post.id));
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_delete_post_missing() {
        let store = store();
        store.add("stay").unwrap();

        let result = DeletePostHandler::new(Arc::clone(&store))
            .call(DeletePostArgs {
                id: "missing".to_string(),
            })
            .await
            .unwrap();

        assert!(result.is_error);
        assert_eq!(result.text(), "Error: No post found with ID: missing");
        assert_eq!(store.len().unwrap(), 1);
    }
}
