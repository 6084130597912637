//! # anekazoo
//!
//! A small HTTP service that stores animals in MySQL.
//!
//! Every response is plain text. The service provisions its own database
//! and table on first start, so an operator only configures credentials.
//!
//! ## Endpoints
//!
//! | Route | Methods |
//! |-------|---------|
//! | `/` | any, answers a fixed welcome |
//! | `/animal` | GET (list), POST (create), PUT (update or insert), DELETE |
//! | `/animal/{id}` | GET, HEAD |
//! | `/healthz`, `/readyz` | GET |
//!
//! ## Wiring
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use anekazoo::{app, bootstrap, Config, Migrations, MySqlAnimalStore, Server};
//!
//! # async fn run() -> Result<(), anekazoo::Error> {
//! let config = Config::from_env()?;
//! let migrations = Migrations::load(&config.migration_dir)?;
//! let pool = bootstrap(&config.database_url, &config.database_root_url, &migrations).await?;
//!
//! Server::bind(config.bind_addr)
//!     .serve(app(Arc::new(MySqlAnimalStore::new(pool))))
//!     .await
//! # }
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod animal;
pub mod bootstrap;
pub mod config;
pub mod health;
pub mod routes;
pub mod store;

pub use bootstrap::{bootstrap, BootstrapError};
pub use config::{Config, ConfigError, Migrations};
pub use error::Error;
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use routes::app;
pub use server::Server;
pub use status::Status;
pub use store::{Animal, AnimalId, AnimalStore, MemoryAnimalStore, MySqlAnimalStore, StoreError};
