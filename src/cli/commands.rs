use crate::ScreenConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "employerscreen",
    about = "Cross-reference best-employer lists with stock market data"
)]
pub struct Cli {
    /// Destination path for the xlsx workbook
    #[arg(long, default_value = "employer_stocks.xlsx")]
    pub output: PathBuf,

    /// Attempts per lookup before giving up
    #[arg(long, default_value = "3")]
    pub max_retries: u32,

    /// Lower bound of the randomized delay between retries (milliseconds)
    #[arg(long, default_value = "3000")]
    pub backoff_min_ms: u64,

    /// Upper bound of the randomized delay between retries (milliseconds)
    #[arg(long, default_value = "8000")]
    pub backoff_max_ms: u64,

    /// Lower bound of the politeness pause between lookups (milliseconds)
    #[arg(long, default_value = "3000")]
    pub pause_min_ms: u64,

    /// Upper bound of the politeness pause between lookups (milliseconds)
    #[arg(long, default_value = "8000")]
    pub pause_max_ms: u64,
}

impl Cli {
    pub fn config(&self) -> ScreenConfig {
        ScreenConfig {
            output: self.output.clone(),
            max_retries: self.max_retries,
            backoff_min_ms: self.backoff_min_ms,
            backoff_max_ms: self.backoff_max_ms,
            pause_min_ms: self.pause_min_ms,
            pause_max_ms: self.pause_max_ms,
        }
    }
}
