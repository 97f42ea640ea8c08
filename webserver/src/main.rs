//! WebServer process entry point

use clap::Parser;
use shared::{logging, ProcessId};
use std::net::SocketAddr;
use tokio::signal;

use webserver::{WebServer, WebServerError, WebServerResult, WebServerState};

/// HTTP API for forecast-driven budget allocation
#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "Serves the resource optimizer API")]
struct Args {
    /// Interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for HTTP server
    #[arg(long, default_value = "8000")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    let _ = dotenv::dotenv();
    let args = Args::parse();

    ProcessId::init_webserver();
    logging::init_tracing_with_level(Some(&args.log_level));

    let http_addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| WebServerError::config(format!("Invalid address: {}", e)))?;

    logging::log_startup(ProcessId::current(), &format!("webserver on {http_addr}"));

    let webserver = WebServer::new(WebServerState::with_defaults());

    let shutdown = async {
        if let Err(err) = signal::ctrl_c().await {
            logging::log_error(ProcessId::current(), "Signal handling", &err);
            // Without a signal handler, serve until killed
            std::future::pending::<()>().await;
        }
        logging::log_shutdown(ProcessId::current(), "Received Ctrl+C signal");
    };

    webserver.run(http_addr, shutdown).await?;

    logging::log_success(ProcessId::current(), "WebServer stopped gracefully");
    Ok(())
}
