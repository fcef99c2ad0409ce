// Internsight - Internship feedback collection with sentiment insights
// Main entry point

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use internsight::config::load_config;
use internsight::model::SentimentModel;
use internsight::server::{self, AppState};
use internsight::store::FeedbackStore;

#[derive(Debug, Parser)]
#[command(name = "internsight", about = "Internship feedback collection with sentiment insights")]
struct Args {
    /// Path to a config file (defaults to ~/.internsight/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bind address, overriding the config file
    #[arg(long)]
    bind: Option<String>,

    /// Model artifacts directory, overriding the config file
    #[arg(long)]
    models_dir: Option<PathBuf>,

    /// Data directory for the feedback log, overriding the config file
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // Load configuration, then apply CLI overrides
    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind_address = bind;
    }
    if let Some(models_dir) = args.models_dir {
        config.models_dir = models_dir;
    }
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    config.validate()?;

    // Load model artifacts; a missing model disables prediction but the
    // server still comes up so the form and insights pages work.
    let model = SentimentModel::load(&config.models_dir)?;

    // Open the feedback log, creating it header-only on first run
    let store = FeedbackStore::open(&config.data_dir)?;

    let state = Arc::new(AppState::new(model, store));
    server::serve(state, &config.bind_address).await
}
