//! Server configuration.

use std::net::SocketAddr;

/// Listener configuration.
///
/// The shipped binary runs on the defaults below; there are no flags, no
/// environment variables, and no configuration file. Callers embedding the
/// library can override the fields in code.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The read buffer size for request heads.
    pub read_buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            read_buffer_size: 8192,
        }
    }
}
