//! Graceful shutdown on Ctrl-C or SIGTERM.

use std::{future::Future, io};

use tracing::{error, info};

/// Resolves when the process is asked to stop.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!(error = %err, "unable to install sigterm handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    wait_for_either(tokio::signal::ctrl_c(), terminate).await;
}

/// Wait for the first of `ctrl_c` and `terminate`. A `ctrl_c` listener that
/// fails to install never fires.
async fn wait_for_either<C, T>(ctrl_c: C, terminate: T)
where
    C: Future<Output = io::Result<()>>,
    T: Future<Output = ()>,
{
    let ctrl_c = async {
        if let Err(err) = ctrl_c.await {
            error!(error = %err, "unable to install ctrl+c handler");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutting down");
}
