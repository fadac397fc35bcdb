//! HTTP server implementation.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::signal;
use tokio::sync::{mpsc, RwLock, Semaphore};
use tokio::task::{JoinHandle, JoinSet};
use log::{debug, error, info, warn};

use crate::parser::{parse_request, Error as ParserError, HttpRequest, Method};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::handler::{HandlerFuture, Route};
use crate::server::response::{HttpResponse, StatusCode};

/// An HTTP server.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    /// The routes, tried in registration order.
    pub routes: Arc<RwLock<Vec<Route>>>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            routes: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Add a route to the server.
    pub async fn add_route<F, Fut>(&self, path: impl Into<String>, methods: Vec<Method>, handler: F)
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        let handler = Arc::new(move |req: HttpRequest| -> HandlerFuture { Box::pin(handler(req)) });

        let route = Route {
            path: path.into(),
            methods,
            handler,
        };

        self.routes.write().await.push(route);
    }

    /// Display the server banner and registered endpoints.
    async fn display_server_info(&self) {
        let banner = include_str!("../banner.txt");
        info!("\n{banner}");

        let routes = self.routes.read().await;
        info!("Registered endpoints on {addr}:", addr = self.config.addr);
        for route in routes.iter() {
            let methods = route.methods.iter()
                .map(Method::as_str)
                .collect::<Vec<&str>>()
                .join(", ");
            info!("  {methods} {}", route.path);
        }
    }

    /// Set up the TCP listener.
    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Server listening on http://{addr}", addr = listener.local_addr()?);
        Ok(listener)
    }

    /// Set up a Ctrl+C handler for graceful shutdown.
    fn setup_ctrl_c_handler(shutdown_tx: mpsc::Sender<()>) -> JoinHandle<()> {
        tokio::spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C, initiating graceful shutdown");
                    let _ = shutdown_tx.send(()).await;
                }
                Err(e) => {
                    error!("Error setting up Ctrl+C handler: {e}");
                }
            }
        })
    }

    /// Hand an accepted connection to its own task, or turn it away when
    /// every connection slot is taken.
    async fn handle_new_connection(
        mut socket: TcpStream,
        addr: SocketAddr,
        semaphore: Arc<Semaphore>,
        routes: Arc<RwLock<Vec<Route>>>,
        read_buffer_size: usize,
        tasks: &mut JoinSet<()>,
    ) {
        let permit = match semaphore.try_acquire_owned() {
            Ok(permit) => permit,
            Err(_) => {
                warn!("Connection limit reached, rejecting connection from {addr}");
                let response = HttpResponse::new(StatusCode::ServiceUnavailable)
                    .with_content_type("text/plain")
                    .with_body_string("Server is at capacity, please try again later");
                let _ = socket.write_all(&response.to_bytes()).await;
                return;
            }
        };

        debug!("Connection from {addr}");

        tasks.spawn(async move {
            // The permit is dropped when the task completes, releasing the semaphore slot
            let _permit = permit;

            if let Err(e) = Self::handle_connection(&mut socket, routes, read_buffer_size).await {
                match e {
                    Error::IoError(e) => error!("I/O error on connection from {addr}: {e}"),
                    e => debug!("Request from {addr} answered with {status}: {e}", status = e.status_code().as_u16()),
                }
            }
        });
    }

    /// Handle connection errors. Returns true when the accept loop should stop.
    async fn handle_accept_error(e: std::io::Error) -> bool {
        error!("Error accepting connection: {e}");

        if e.kind() == std::io::ErrorKind::BrokenPipe {
            error!("Critical error accepting connection, shutting down");
            return true;
        }

        // Usually descriptor exhaustion; give in-flight connections a moment
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
        false
    }

    /// Perform graceful shutdown.
    async fn perform_shutdown(tasks: &mut JoinSet<()>) {
        info!("Waiting for {len} active connections to complete...", len = tasks.len());
        let shutdown_timeout = tokio::time::Duration::from_secs(30);
        let _ = tokio::time::timeout(shutdown_timeout, async {
            while let Some(res) = tasks.join_next().await {
                if let Err(e) = res {
                    error!("Task failed during shutdown: {e}");
                }
            }
        }).await;

        info!("Server shutdown complete");
    }

    /// Bind the configured address and serve until Ctrl+C.
    pub async fn start(&self) -> Result<(), Error> {
        let listener = self.setup_listener().await?;
        self.serve(listener).await
    }

    /// Serve connections from an already bound listener until Ctrl+C.
    pub async fn serve(&self, listener: TcpListener) -> Result<(), Error> {
        self.display_server_info().await;

        let semaphore = Arc::new(Semaphore::new(self.config.max_connections));

        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let mut tasks = JoinSet::new();

        let ctrl_c = Self::setup_ctrl_c_handler(shutdown_tx);

        loop {
            tokio::select! {
                Some(()) = shutdown_rx.recv() => {
                    info!("Shutting down server on {addr}...", addr = self.config.addr);
                    break;
                }

                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, addr)) => {
                            Self::handle_new_connection(
                                socket,
                                addr,
                                semaphore.clone(),
                                self.routes.clone(),
                                self.config.read_buffer_size,
                                &mut tasks,
                            ).await;
                        },
                        Err(e) => {
                            if Self::handle_accept_error(e).await {
                                break;
                            }
                        }
                    }
                }
            }
        }

        ctrl_c.abort();
        Self::perform_shutdown(&mut tasks).await;

        Ok(())
    }

    /// Render an error as the plain-text response the client receives.
    pub fn error_response(error: &Error) -> HttpResponse {
        let response = HttpResponse::new(error.status_code()).with_content_type("text/plain");

        match error {
            Error::ParseError(e) => response.with_body_string(format!("Error parsing request: {e}")),
            Error::IoError(_) | Error::InternalError(_) => response.with_body_string("Internal server error"),
            e => response.with_body_string(e.to_string()),
        }
    }

    /// Read until the blank line ending the request head, EOF, or a full
    /// buffer. Returns the bytes read; empty means the client closed
    /// without sending anything.
    async fn read_request_head(
        socket: &mut (impl AsyncRead + Unpin),
        read_buffer_size: usize,
    ) -> Result<Vec<u8>, Error> {
        let mut buf = vec![0; read_buffer_size];
        let mut filled = 0;

        while filled < buf.len() {
            let n = socket.read(&mut buf[filled..]).await?;
            if n == 0 {
                break;
            }

            // Only the newly read bytes and the three before them can complete a terminator
            let scan_from = filled.saturating_sub(3);
            filled += n;
            if Self::ends_head(&buf[scan_from..filled]) {
                buf.truncate(filled);
                return Ok(buf);
            }
        }

        if filled == buf.len() {
            return Err(Error::ParseError(ParserError::HeadTooLarge(read_buffer_size)));
        }

        buf.truncate(filled);
        Ok(buf)
    }

    fn ends_head(bytes: &[u8]) -> bool {
        bytes.windows(4).any(|w| w == b"\r\n\r\n") || bytes.windows(2).any(|w| w == b"\n\n")
    }

    /// Handle a single connection: read one request, dispatch it and write
    /// the response.
    ///
    /// Returns the error a request was answered with, after the error
    /// response has been written.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        routes: Arc<RwLock<Vec<Route>>>,
        read_buffer_size: usize,
    ) -> Result<(), Error> {
        let (outcome, head_only) = match Self::read_request_head(socket, read_buffer_size).await {
            Ok(head) if head.is_empty() => return Ok(()), // Connection closed
            Ok(head) => match parse_request(&head) {
                Ok(request) => {
                    let head_only = request.method == Method::HEAD;
                    (Self::dispatch(request, &routes).await, head_only)
                }
                Err(e) => (Err(Error::ParseError(e)), false),
            },
            Err(Error::IoError(e)) => return Err(Error::IoError(e)),
            Err(e) => (Err(e), false),
        };

        let (response, result) = match outcome {
            Ok(response) => (response, Ok(())),
            Err(e) => {
                let mut response = Self::error_response(&e);
                if let Error::MethodNotAllowed(_, path) = &e {
                    response = response.with_header("Allow", Self::allowed_methods(&routes, path).await);
                }
                (response, Err(e))
            }
        };

        let bytes = if head_only { response.head_bytes() } else { response.to_bytes() };
        socket.write_all(&bytes).await?;
        socket.flush().await?;
        result
    }

    /// Find the route for a request and run its handler.
    async fn dispatch(request: HttpRequest, routes: &RwLock<Vec<Route>>) -> Result<HttpResponse, Error> {
        // Clone the handler out so the lock is not held while it runs
        let handler = {
            let routes_guard = routes.read().await;
            let mut matching_routes = routes_guard
                .iter()
                .filter(|route| route.matches_path(&request.path))
                .peekable();

            if matching_routes.peek().is_none() {
                return Err(Error::NotFound(request.path.clone()));
            }

            let handler = match matching_routes.find(|route| route.methods.contains(&request.method)) {
                Some(route) => route.handler.clone(),
                None => return Err(Error::MethodNotAllowed(request.method, request.path.clone())),
            };
            handler
        };

        handler(request).await
    }

    async fn allowed_methods(routes: &RwLock<Vec<Route>>, path: &str) -> String {
        routes.read().await
            .iter()
            .filter(|route| route.matches_path(path))
            .flat_map(|route| route.methods.iter().map(Method::as_str))
            .collect::<Vec<&str>>()
            .join(", ")
    }
}
