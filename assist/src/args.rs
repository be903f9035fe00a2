use std::path::PathBuf;

use clap::Parser;

/// Assist streaming chat gateway
#[derive(Debug, Parser)]
#[command(name = "assist", about = "Streaming chat gateway for Solar and Gemini")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "assist.toml", env = "ASSIST_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "ASSIST_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
