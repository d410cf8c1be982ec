//! Local slow HTTP endpoint for the I/O-bound benchmark
//!
//! Every request is answered with `200 OK` and a JSON body
//! `{"message": ...}` after a fixed delay. Handlers are async, so the delay
//! overlaps when clients fan out.

use crate::error::{Error, Result};
use actix_web::dev::Server;
use actix_web::{rt, web, App, HttpResponse, HttpServer};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

/// Address the `slow_api` binary listens on by default
pub const DEFAULT_ADDR: &str = "127.0.0.1:5001";

/// Worker threads of a background server
const BACKGROUND_WORKERS: usize = 2;

/// Response behaviour of the server
#[derive(Debug, Clone)]
pub struct SlowApiConfig {
    /// Time spent before answering each request
    pub delay: Duration,
    /// Value of the `message` field
    pub message: String,
}

impl Default for SlowApiConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
            message: "Hello from the slow API!".to_string(),
        }
    }
}

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

/// Handler for every route: sleep, then answer with the configured message
async fn respond(config: web::Data<SlowApiConfig>) -> HttpResponse {
    debug!("request received, sleeping {:?}", config.delay);
    rt::time::sleep(config.delay).await;
    HttpResponse::Ok().json(MessageBody {
        message: &config.message,
    })
}

/// Bind `addr` and build the server; returns it with the bound address
fn build_server(
    addr: SocketAddr,
    config: SlowApiConfig,
    workers: Option<usize>,
) -> Result<(Server, SocketAddr)> {
    let data = web::Data::new(config);
    let mut http = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .default_service(web::to(respond))
    });
    if let Some(workers) = workers {
        http = http.workers(workers).disable_signals();
    }

    let http = http.bind(addr)?;
    let bound = http
        .addrs()
        .first()
        .copied()
        .ok_or_else(|| Error::server("listener bound no address"))?;
    Ok((http.run(), bound))
}

/// Handle to a server running on a background thread
///
/// Dropping the handle stops the server and joins its thread.
pub struct SlowApiServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl SlowApiServer {
    /// Bind `addr` and start serving on a dedicated actix system thread
    ///
    /// Returns once the listener is bound; pass port `0` to pick a free port
    /// and read it back with [`SlowApiServer::local_addr`].
    pub fn spawn(addr: SocketAddr, config: SlowApiConfig) -> Result<Self> {
        let (ready_tx, ready_rx) = mpsc::channel::<Result<SocketAddr>>();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let thread = std::thread::Builder::new()
            .name("slow-api".to_string())
            .spawn(move || {
                rt::System::new().block_on(async move {
                    let (server, bound) =
                        match build_server(addr, config, Some(BACKGROUND_WORKERS)) {
                            Ok(built) => built,
                            Err(e) => {
                                let _ = ready_tx.send(Err(e));
                                return;
                            }
                        };
                    let _ = ready_tx.send(Ok(bound));

                    let handle = server.handle();
                    rt::spawn(async move {
                        let _ = shutdown_rx.await;
                        handle.stop(false).await;
                    });
                    if let Err(e) = server.await {
                        warn!("slow API stopped with error: {}", e);
                    }
                });
            })?;

        let addr = ready_rx
            .recv()
            .map_err(|_| Error::server("server thread exited before binding"))??;
        info!("Slow API listening on http://{}", addr);

        Ok(Self {
            addr,
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
        })
    }

    /// Address the listener is bound to
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL clients should request
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for SlowApiServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("slow API thread panicked");
            }
        }
    }
}

/// Serve on `addr` in the foreground until Ctrl-C
pub fn run(addr: SocketAddr, config: SlowApiConfig) -> Result<()> {
    rt::System::new().block_on(async move {
        let delay = config.delay;
        let (server, bound) = build_server(addr, config, None)?;
        info!("Slow API listening on http://{} (delay {:?})", bound, delay);
        server.await?;
        info!("Slow API stopped");
        Ok::<(), Error>(())
    })
}
