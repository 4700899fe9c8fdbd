use std::sync::Arc;
use std::thread;

use anyhow::{Context, Result};

use chat_logger::config::LoggerConfig;
use chat_logger::log_info;
use chat_logger::logging::{self, Logger};

const WORKERS: usize = 5;
const MESSAGES_PER_WORKER: usize = 3;

fn main() -> Result<()> {
    let logger = Arc::new(Logger::new(LoggerConfig::default()));
    if logging::install_global(Arc::clone(&logger)).is_err() {
        anyhow::bail!("process-wide logger already installed");
    }

    // Route tracing events from dependencies into the same session file
    logging::init_tracing(Arc::clone(logging::global()))?;

    logger.info("Chat Server starting up...");
    logger.debug("Debug: Server configuration loaded");
    logger.warn("Warning: This is a test warning message");
    logger.error("Error: This is a test error message");

    logger.info("Server initialized successfully");
    logger.debug("Database connection established");

    logger.info("Testing thread safety with multiple threads...");
    let handles: Vec<_> = (0..WORKERS)
        .map(|i| {
            let logger = Arc::clone(&logger);
            thread::Builder::new()
                .name(format!("worker-{}", i))
                .spawn(move || {
                    for j in 0..MESSAGES_PER_WORKER {
                        if j % 2 == 0 {
                            logger.info(&format!("Thread {} logging message {}", i, j));
                        } else {
                            log_info!("Thread {} logging message {}", i, j);
                        }
                    }
                })
                .context("Failed to spawn worker thread")
        })
        .collect::<Result<_>>()?;

    for handle in handles {
        if handle.join().is_err() {
            tracing::error!("worker thread panicked");
        }
    }

    if let Some(path) = logger.session_path() {
        tracing::info!("Logging to: {}", path.display());
    }
    logger.info("Chat Server shutdown complete");

    Ok(())
}
