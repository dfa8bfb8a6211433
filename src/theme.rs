//! The two colors the wheel takes from its styling environment.
//!
//! Colors come from a small JSON file of CSS-like tokens:
//!
//! ```json
//! { "line-color": "#2f6fde", "button-background": "#f5b942" }
//! ```
//!
//! Each token falls back to its own default when it is missing or unusable.
use std::path::Path;

use egui::Color32;
use serde::Deserialize;

use crate::error::{ThemeError, ThemeResult};

pub const LINE_COLOR_TOKEN: &str = "line-color";
pub const BUTTON_BACKGROUND_TOKEN: &str = "button-background";

pub const DEFAULT_LINE_COLOR: Color32 = Color32::from_rgb(47, 111, 222);
pub const DEFAULT_BUTTON_BACKGROUND: Color32 = Color32::from_rgb(245, 185, 66);

/// Raw tokens as they appear in the theme file
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct StyleTokens {
    #[serde(rename = "line-color")]
    pub line_color: Option<String>,
    #[serde(rename = "button-background")]
    pub button_background: Option<String>,
}

impl StyleTokens {
    pub fn from_json(text: &str) -> ThemeResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> ThemeResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    /// Stroke for path segments and markers
    pub line: Color32,
    /// Fill for the shuffle button and used letters
    pub button_background: Color32,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            line: DEFAULT_LINE_COLOR,
            button_background: DEFAULT_BUTTON_BACKGROUND,
        }
    }
}

impl ThemeColors {
    pub fn from_tokens(tokens: &StyleTokens) -> Self {
        Self {
            line: lookup_color(LINE_COLOR_TOKEN, tokens.line_color.as_deref(), DEFAULT_LINE_COLOR),
            button_background: lookup_color(
                BUTTON_BACKGROUND_TOKEN,
                tokens.button_background.as_deref(),
                DEFAULT_BUTTON_BACKGROUND,
            ),
        }
    }

    /// Reads the theme at `path`, or the defaults when there is no path.
    ///
    /// Never fails: problems are logged and the defaults used instead.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match StyleTokens::from_file(path) {
            Ok(tokens) => {
                log::info!("Loaded theme from {}", path.display());
                Self::from_tokens(&tokens)
            }
            Err(err) => {
                log::warn!("Using default theme, {}: {}", path.display(), err);
                Self::default()
            }
        }
    }
}

/// Parses `#rrggbb` / `#rrggbbaa`, with or without the leading `#`.
pub fn parse_color(token: &'static str, value: &str) -> ThemeResult<Color32> {
    let trimmed = value.trim();
    let hex = if trimmed.starts_with('#') {
        trimmed.to_owned()
    } else {
        format!("#{trimmed}")
    };
    Color32::from_hex(&hex).map_err(|_| ThemeError::InvalidColor {
        token,
        value: value.to_owned(),
    })
}

fn lookup_color(token: &'static str, value: Option<&str>, fallback: Color32) -> Color32 {
    match value {
        Some(value) => parse_color(token, value).unwrap_or_else(|err| {
            log::warn!("{}, falling back to default", err);
            fallback
        }),
        None => fallback,
    }
}
