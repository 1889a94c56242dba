//! Built-in tool handlers

mod posts;
mod weather;

pub use posts::{AddPostArgs, AddPostHandler, DeletePostArgs, DeletePostHandler, GetPostsHandler, NoArgs};
pub use weather::{GetWeatherHandler, WeatherArgs};
