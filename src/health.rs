//! Health-check handlers.
//!
//! | Check | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? |
//! | **Readiness** | `/readyz` | Can the store be reached right now? |

use std::sync::Arc;

use tracing::warn;

use crate::response::{IntoResponse, Response};
use crate::status::Status;
use crate::store::AnimalStore;
use crate::Request;

/// Always `200 OK` with body `"ok"`. No dependencies.
pub async fn liveness(_req: Request) -> Response {
    Response::text("ok")
}

/// `200 OK` with body `"ready"` when the store answers a ping, `503` otherwise.
pub async fn readiness(store: Arc<dyn AnimalStore>, _req: Request) -> Response {
    match store.ping().await {
        Ok(()) => Response::text("ready"),
        Err(e) => {
            warn!("readiness check failed: {e}");
            (Status::ServiceUnavailable, "database unavailable").into_response()
        }
    }
}
