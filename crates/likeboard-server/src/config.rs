//! Server configuration

use clap::Parser;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3333";

/// Command-line options, each with an environment fallback
#[derive(Debug, Clone, Parser)]
#[command(name = "likeboard-server", version, about = "In-memory repository catalog over HTTP")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind_address: SocketAddr,

    /// Log filter directive (e.g. `info`, `likeboard_server=debug`)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}
