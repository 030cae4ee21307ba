//! TCP listener and per-connection dispatch.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::http::{parse_head, Response, StatusCode};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::router::Router;

/// An HTTP server: a listener plus the route table it dispatches on.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    /// The route table, shared across connection tasks.
    router: Arc<Router>,
}

impl HttpServer {
    /// Create a server from a configuration and a fully built router.
    pub fn new(config: ServerConfig, router: Router) -> Self {
        Self {
            config,
            router: Arc::new(router),
        }
    }

    /// Bind the listener and serve connections until the process exits.
    pub async fn start(&self) -> Result<(), Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("listening on http://{addr}", addr = self.config.addr);
        for path in self.router.paths() {
            info!("registered route: {path}");
        }

        loop {
            match listener.accept().await {
                Ok((mut socket, addr)) => {
                    debug!("connection from {addr}");

                    let router = self.router.clone();
                    let read_buffer_size = self.config.read_buffer_size;

                    tokio::spawn(async move {
                        if let Err(e) =
                            Self::handle_connection(&mut socket, &router, read_buffer_size).await
                        {
                            error!("error handling connection from {addr}: {e}");
                        }
                    });
                }
                Err(e) => {
                    error!("error accepting connection: {e}");
                    tokio::time::sleep(Duration::from_millis(100)).await;
                }
            }
        }
    }

    /// Handle a single connection: one request head in, one response out.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        router: &Router,
        read_buffer_size: usize,
    ) -> Result<(), Error> {
        let mut buf = vec![0; read_buffer_size];

        // Read data from the socket
        let n = socket.read(&mut buf).await?;
        if n == 0 {
            return Ok(()); // Connection closed
        }

        // Parse the HTTP request head
        let request = match parse_head(&buf[..n]) {
            Ok(request) => request,
            Err(e) => {
                let response = Response::new(StatusCode::BadRequest)
                    .with_content_type("text/plain")
                    .with_body(format!("Bad request: {e}"));
                socket.write_all(&response.to_bytes()).await?;
                return Err(Error::Parse(e));
            }
        };

        match router.lookup(&request.path) {
            Some(handler) => {
                let response = match (handler)(request).await {
                    Ok(response) => response,
                    Err(e) => {
                        let response = Response::new(StatusCode::InternalServerError)
                            .with_content_type("text/plain")
                            .with_body("Internal server error");
                        socket.write_all(&response.to_bytes()).await?;
                        return Err(e);
                    }
                };

                socket.write_all(&response.to_bytes()).await?;
            }
            None => {
                // Listener-default not found: status and headers only,
                // empty body. A miss is not an application error.
                debug!("no route for {path}", path = request.path);
                let response = Response::new(StatusCode::NotFound).with_body("");
                socket.write_all(&response.to_bytes()).await?;
            }
        }

        Ok(())
    }
}
