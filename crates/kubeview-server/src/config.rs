use std::net::SocketAddr;
use std::path::PathBuf;

/// Port the listing service binds to
pub const DEFAULT_PORT: u16 = 8080;

/// Static page served for every unmatched path
pub const DEFAULT_INDEX_FILE: &str = "index.html";

/// Server parameters
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,

    /// File served by the fallback route, relative to the working directory
    pub index_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            index_file: PathBuf::from(DEFAULT_INDEX_FILE),
        }
    }
}
