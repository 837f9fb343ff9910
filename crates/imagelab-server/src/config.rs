//! Command line and environment configuration.

use std::net::SocketAddr;

use clap::Parser;
use imagelab_core::DEFAULT_JPEG_QUALITY;

/// Settings for one server process. Every flag can also come from the
/// environment.
#[derive(Parser, Debug, Clone)]
#[command(name = "imagelab", version, about = "Image transformation service")]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, env = "IMAGELAB_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "IMAGELAB_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Quality of the JPEG returned for every request (1-100).
    #[arg(long, env = "IMAGELAB_JPEG_QUALITY", default_value_t = DEFAULT_JPEG_QUALITY,
          value_parser = clap::value_parser!(u8).range(1..=100))]
    pub jpeg_quality: u8,

    /// Largest accepted request body in bytes.
    #[arg(long, env = "IMAGELAB_MAX_UPLOAD_BYTES", default_value_t = 20 * 1024 * 1024)]
    pub max_upload_bytes: usize,

    /// Tokio worker threads; defaults to the number of CPUs.
    #[arg(long, env = "IMAGELAB_WORKERS")]
    pub workers: Option<usize>,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("invalid bind address {addr}: {e}"))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            max_upload_bytes: 20 * 1024 * 1024,
            workers: None,
        }
    }
}
