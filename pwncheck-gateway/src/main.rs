use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use pwncheck_client::{API_KEY_ENV, AccountChecker, Credential};
use pwncheck_gateway::Gateway;
use tokio::net::TcpListener;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pwncheck-gateway")]
#[command(about = "Serve the breached-account lookup endpoint")]
struct Args {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// HIBP API key; falls back to HIBP_API_KEY. Demo mode when unset.
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    let raw_key = args.api_key.clone().or_else(|| std::env::var(API_KEY_ENV).ok());
    let credential = Credential::resolve(raw_key.as_deref());
    if credential == Credential::Demo {
        info!("no usable API key configured; serving demo data");
    }

    let gateway = Arc::new(Gateway::new(AccountChecker::from_credential(credential)));

    let listener = TcpListener::bind(args.bind).await?;
    info!(addr = %args.bind, "listening");

    loop {
        let (stream, peer) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let gateway = Arc::clone(&gateway);

        tokio::spawn(async move {
            let service = service_fn(move |req| {
                let gateway = Arc::clone(&gateway);
                async move { Ok::<_, std::convert::Infallible>(gateway.handle(req).await) }
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                debug!(%peer, error = %err, "connection error");
            }
        });
    }
}
