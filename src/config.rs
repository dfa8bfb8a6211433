use std::path::PathBuf;

/// Startup settings for the app
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Text placed on the wheel at startup
    pub initial_text: String,
    /// Fixed seed for reproducible shuffles
    pub seed: Option<u64>,
    /// JSON file with the `line-color` / `button-background` tokens
    pub theme_path: Option<PathBuf>,
}
