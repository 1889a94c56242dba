//! get_weather - canned weather report

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;

use crate::error::Result;
use crate::tools::call::ToolCallResult;
use crate::tools::catalog::GET_WEATHER;
use crate::tools::registry::ToolHandler;

#[derive(Debug, Deserialize)]
pub struct WeatherArgs {
    pub location: String,
}

/// Reports the same fixed forecast for any location
pub struct GetWeatherHandler;

#[async_trait]
impl ToolHandler for GetWeatherHandler {
    type Args = WeatherArgs;

    fn name(&self) -> &'static str {
        GET_WEATHER
    }

    async fn call(&self, args: WeatherArgs) -> Result<ToolCallResult> {
        debug!("Handling get_weather request for: {}", args.location);
        Ok(ToolCallResult::success(format!(
            "Weather in {}: Sunny, 75 degrees Fahrenheit.",
            args.location
        )))
    }
}
