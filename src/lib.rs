pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod health;
pub mod mock;
pub mod stats;
pub mod summarizer;

pub use client::SummaryClient;
pub use error::{AppError, Result};
pub use summarizer::{summarize, LengthTier, SummaryResult};

/// Installs the global `tracing` subscriber, honouring `RUST_LOG` when set.
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("text_summarizer=info,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
}
