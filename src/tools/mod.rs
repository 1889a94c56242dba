//! Tool System - descriptors, catalog, validation, handlers and dispatch

mod call;
mod catalog;
mod definition;
mod dispatcher;
pub mod handlers;
mod registry;
mod validation;

pub use call::{ContentBlock, ToolCallRequest, ToolCallResult};
pub use catalog::{ADD_POST, DELETE_POST, GET_POSTS, GET_WEATHER, ToolCatalog};
pub use definition::{ParamSpec, ParamType, SchemaShape, ToolDescriptor};
pub use dispatcher::Dispatcher;
pub use registry::{Handler, HandlerRegistry, ToolHandler};
pub use validation::{ValidatedArguments, ValidationError, validate};
