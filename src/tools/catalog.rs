//! Tool catalog
//!
//! The ordered, static set of tool descriptors advertised to clients.

use crate::error::{McpError, Result};

use super::definition::{ParamSpec, ToolDescriptor};

pub const GET_WEATHER: &str = "get_weather";
pub const ADD_POST: &str = "add_post";
pub const GET_POSTS: &str = "get_posts";
pub const DELETE_POST: &str = "delete_post";

/// Catalog of tool descriptors in declaration order
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    tools: Vec<ToolDescriptor>,
}

impl ToolCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The four tools this server ships with
    pub fn standard() -> Self {
        let tools = vec![
            ToolDescriptor::new(GET_WEATHER, "Gets the current weather.").with_param(
                ParamSpec::string(
                    "location",
                    "The location to get weather for (city, address, etc.)",
                )
                .required(),
            ),
            ToolDescriptor::new(ADD_POST, "Adds a simple text post.").with_param(
                ParamSpec::string("content", "The text content of the post to add.")
                    .required()
                    .non_blank("Error: Post content cannot be empty."),
            ),
            ToolDescriptor::new(GET_POSTS, "Retrieves all posts."),
            ToolDescriptor::new(DELETE_POST, "Deletes a post by ID.")
                .with_param(ParamSpec::string("id", "The ID of the post to delete.").required()),
        ];
        Self { tools }
    }

    /// Add a descriptor; names must stay unique
    pub fn add(&mut self, tool: ToolDescriptor) -> Result<()> {
        if self.contains(&tool.name) {
            return Err(McpError::CatalogMismatch(format!(
                "duplicate tool name '{}'",
                tool.name
            )));
        }
        self.tools.push(tool);
        Ok(())
    }

    /// The full catalog, in declaration order
    pub fn list(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Tool names in declaration order
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_new_empty() {
        let catalog = ToolCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_standard_catalog_order() {
        let catalog = ToolCatalog::standard();
        assert_eq!(catalog.names(), vec![GET_WEATHER, ADD_POST, GET_POSTS, DELETE_POST]);
    }

    #[test]
    fn test_standard_catalog_entries_complete() {
        let catalog = ToolCatalog::standard();
        for tool in catalog.list() {
            assert!(!tool.name.is_empty());
            assert!(!tool.description.is_empty());
            assert_eq!(tool.input_schema.to_json_schema()["type"], "object");
        }
    }

    #[test]
    fn test_standard_required_params() {
        let catalog = ToolCatalog::standard();
        assert_eq!(catalog.get(GET_WEATHER).unwrap().input_schema.required(), vec!["location"]);
        assert_eq!(catalog.get(ADD_POST).unwrap().input_schema.required(), vec!["content"]);
        assert!(catalog.get(GET_POSTS).unwrap().input_schema.required().is_empty());
        assert_eq!(catalog.get(DELETE_POST).unwrap().input_schema.required(), vec!["id"]);
    }

    #[test]
    fn test_add_post_content_non_blank() {
        let catalog = ToolCatalog::standard();
        let content = catalog.get(ADD_POST).unwrap().input_schema.get("content").unwrap();
        assert_eq!(
            content.blank_message.as_deref(),
            Some("Error: Post content cannot be empty.")
        );
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = ToolCatalog::standard();
        assert!(catalog.get("nonexistent").is_none());
        assert!(!catalog.contains("nonexistent"));
    }

    #[test]
    fn test_catalog_add() {
        let mut catalog = ToolCatalog::new();
        catalog.add(ToolDescriptor::new("custom", "Custom tool")).unwrap();
        assert!(catalog.contains("custom"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_catalog_add_duplicate_rejected() {
        let mut catalog = ToolCatalog::standard();
        let result = catalog.add(ToolDescriptor::new(GET_POSTS, "again"));
        assert!(matches!(result, Err(McpError::CatalogMismatch(_))));
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_list_is_stable() {
        let catalog = ToolCatalog::standard();
        assert_eq!(catalog.list(), catalog.list());
    }
}
