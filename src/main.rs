use std::net::SocketAddr;
use std::sync::Arc;

use hello_server::logger::{self, Logger, StdLogger};
use hello_server::server;

/// Fixed listen address; there is no configuration surface.
const LISTEN_ADDR: &str = "0.0.0.0:8080";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("======================================");
    println!("Application started successfully!");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = LISTEN_ADDR.parse()?;
    let logger: Arc<dyn Logger> = Arc::new(StdLogger);

    // A bind failure (e.g. address already in use) aborts startup; there
    // is no retry and no fallback port.
    let listener = match server::bind_listener(addr) {
        Ok(listener) => listener,
        Err(e) => {
            logger::log_bind_failed(logger.as_ref(), &addr, &e);
            return Err(e.into());
        }
    };

    logger::log_server_start(logger.as_ref(), &addr);

    server::run(listener, logger).await;
    Ok(())
}
