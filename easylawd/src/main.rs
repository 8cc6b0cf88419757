use easylawd::{config::ServerConfig, proto, router, services};

use anyhow::{Context, Result};
use dotenv::dotenv;
use easylaw_es::{EsClient, EsConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::{io::AsyncWriteExt, net::TcpListener};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_tracing();

    let server_cfg = ServerConfig::from_env();
    let es_cfg = EsConfig::from_env();
    info!(
        target: "easylawd",
        host = %es_cfg.redacted_host(),
        verify_certs = es_cfg.verify_certs,
        timeout_secs = es_cfg.timeout_secs,
        "elasticsearch configuration loaded"
    );
    let client = EsClient::new(&es_cfg).context("elasticsearch client setup failed")?;
    services::init(services::Services::new(Arc::new(client), server_cfg.max_per_page))?;

    let listener = TcpListener::bind(&server_cfg.addr)
        .await
        .with_context(|| format!("bind {}", server_cfg.addr))?;
    info!(target: "easylawd", addr = %server_cfg.addr, "easylawd listening");

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(a) => a,
                    Err(e) => {
                        warn!(target: "easylawd", "accept failed: {e}");
                        continue;
                    }
                };
                tokio::spawn(async move {
                    if let Err(err) = handle_conn(stream, peer).await {
                        debug!(target: "easylawd", %peer, "connection error: {err:#}");
                    }
                });
            }
            _ = tokio::signal::ctrl_c() => {
                info!(target: "easylawd", "shutting down");
                return Ok(());
            }
        }
    }
}

fn init_tracing() {
    let filter = std::env::var("EASYLAW_LOG")
        .ok()
        .and_then(|s| EnvFilter::try_new(s).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn handle_conn(mut tcp: tokio::net::TcpStream, peer: SocketAddr) -> Result<()> {
    let started = Instant::now();
    let req = match proto::http::read_request(&mut tcp).await {
        Ok(r) => r,
        Err(code) => {
            debug!(target: "easylawd", %peer, status = code.as_u16(), "unreadable request");
            let resp = proto::http::make_empty_response(code);
            tcp.write_all(resp.as_bytes()).await?;
            let _ = tcp.shutdown().await;
            return Ok(());
        }
    };
    let method = req.method.clone();
    let path = req.route().to_string();

    let response = match router::handle(req).await {
        Ok(r) => r,
        Err(e) => {
            error!(target: "easylawd", %method, %path, "handler failed: {e:#}");
            proto::http::Response::empty(easylaw_api::status::StatusCode::InternalServerError)
        }
    };
    debug!(
        target: "easylawd",
        %peer,
        %method,
        %path,
        status = response.code.as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request served"
    );
    tcp.write_all(&response.into_bytes()).await?;
    let _ = tcp.shutdown().await;
    Ok(())
}
