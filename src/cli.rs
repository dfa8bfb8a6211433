use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;

/// Arrange letters around a wheel and build words from them
#[derive(Debug, Parser)]
#[command(name = "letter_wheel", version, about)]
pub struct Args {
    /// Letters to start with
    #[arg(short, long, default_value = "")]
    pub text: String,

    /// Seed for reproducible shuffles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Theme file with `line-color` and `button-background` tokens
    #[arg(long, value_name = "PATH")]
    pub theme: Option<PathBuf>,
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        Self {
            initial_text: args.text,
            seed: args.seed,
            theme_path: args.theme,
        }
    }
}
