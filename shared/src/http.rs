use http_body_util::combinators::BoxBody;
use hyper::body::{Bytes, Incoming};
use hyper::service::Service;
use hyper::{Request, Response};
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// A bound listener not yet serving. Binding and serving are separate so
/// the caller can log the actual address, which matters when port 0 hands
/// out an ephemeral one.
pub struct HttpServer {
    listener: TcpListener,
}

impl HttpServer {
    pub async fn bind(host: &str, port: u16) -> std::io::Result<Self> {
        let listener = TcpListener::bind(format!("{host}:{port}")).await?;
        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Drives `service` over every accepted connection. Each connection
    /// gets its own task; h1/h2 is auto-detected per socket. Runs until
    /// the listener itself fails.
    pub async fn serve<S, E>(self, service: S) -> Result<(), E>
    where
        S: Service<Request<Incoming>, Response = Response<BoxBody<Bytes, E>>, Error = E>
            + Send
            + Sync
            + 'static,
        S::Future: Send + 'static,
        E: From<std::io::Error> + std::error::Error + Send + Sync + 'static,
    {
        let service = Arc::new(service);
        loop {
            let (stream, peer_addr) = self.listener.accept().await?;
            let _ = stream.set_nodelay(true);
            let io = TokioIo::new(stream);
            let svc = service.clone();

            tokio::spawn(async move {
                if let Err(err) = Builder::new(TokioExecutor::new())
                    .serve_connection(io, svc)
                    .await
                {
                    tracing::debug!(%peer_addr, error = %err, "connection closed with error");
                }
            });
        }
    }
}
