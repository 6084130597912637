//! Unified error type.

use thiserror::Error;

use crate::bootstrap::BootstrapError;
use crate::config::ConfigError;

/// Startup and infrastructure failures.
///
/// Request-level failures (400, 404, 409, 500) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// what stops the process: bad configuration, a failed schema bootstrap, or
/// a listener that cannot bind.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("bootstrap: {0}")]
    Bootstrap(#[from] BootstrapError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
