#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod panels;
pub mod placement;
pub mod renderer;
pub mod state;
pub mod theme;
pub mod token;
pub mod widgets;

pub use app::LetterWheelApp;
pub use config::AppConfig;
pub use error::ThemeError;
pub use geometry::{LayoutProvider, MeasuredLayout, PathGeometry};
pub use renderer::Renderer;
pub use state::{ClickOutcome, Session, WordState};
pub use theme::ThemeColors;
pub use token::{LetterToken, TokenId};
