use std::path::PathBuf;

use clap::Parser;

/// Demo server for fallible HTTP handlers
#[derive(Debug, Parser)]
#[command(name = "httpwr-demo", about = "Serve example handlers that return errors instead of writing them")]
pub struct Args {
    /// Path to configuration file; defaults apply when omitted
    #[arg(short, long, env = "HTTPWR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the listen address
    #[arg(long, env = "HTTPWR_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
