/// Environment variable holding the OpenWeatherMap API key
pub const OPENWEATHER_API_KEY: &'static str = "OPENWEATHER_API_KEY";
/// Environment variable holding the DynamoDB table interactions are logged to
pub const LOGS_TABLE_NAME: &'static str = "LOGS_TABLE_NAME";

/// Optional override for the weather provider endpoint
pub const WEATHER_API_URL: &'static str = "WEATHER_API_URL";
/// Optional override for the joke provider endpoint
pub const JOKE_API_URL: &'static str = "JOKE_API_URL";

pub const DEFAULT_WEATHER_API_URL: &'static str =
    "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_JOKE_API_URL: &'static str = "https://icanhazdadjoke.com/";
