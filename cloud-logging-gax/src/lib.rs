// The proto docs are copied from the google proto files and are not valid rustdoc.
#![allow(
    rustdoc::bare_urls,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_rust_codeblocks
)]

//! Mapping-based gateways over the Google Cloud Logging v2 API.
//!
//! Callers work with the loosely keyed structs in [`mapping`]; the gateways
//! convert them to and from the protocol messages and issue exactly one RPC per
//! operation.
//!
//! ```no_run
//! use cloud_logging_gax::{ClientBuilder, LogEntryMapping};
//!
//! # async fn run() -> Result<(), cloud_logging_gax::Error> {
//! let (entries, sinks) = ClientBuilder::default().build()?;
//!
//! let entry = LogEntryMapping {
//!     text_payload: Some("hello".into()),
//!     ..Default::default()
//! };
//! entries
//!     .write_entries(&[entry], Some("projects/p1/logs/app"), None, None)
//!     .await?;
//!
//! let (page, next) = sinks.list_sinks("p1", 0, None).await?;
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

#[macro_use]
mod logging;

mod client;
mod config;
mod gateway;
pub mod mapping;
mod paging;
pub mod proto;
mod transform;

pub use client::{ConfigApi, ConfigServiceClient, LoggingApi, LoggingServiceClient, Page};
pub use config::{
    ClientBuilder, ENV_ENDPOINT, ENV_HEADERS, ENV_TIMEOUT, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT,
};
pub use gateway::{LogEntriesGateway, SinksGateway};
pub use mapping::{
    HttpRequestMapping, LogEntryMapping, MonitoredResourceMapping, OperationMapping, Severity,
    SinkMapping,
};
pub use paging::{build_paging_options, CallOptions, PageToken};

/// Errors returned by the gateways and the client builder.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A sink with this path already exists.
    #[error("sink already exists: {0}")]
    Conflict(String),
    /// The addressed resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// Any RPC failure not translated into a domain error.
    #[error("rpc failed: {0}")]
    Rpc(#[from] tonic::Status),
    #[error("unknown severity name: {0}")]
    UnknownSeverity(String),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid proto payload: {0}")]
    ProtoPayload(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("invalid configuration for {name}: {reason}")]
    InvalidConfig { name: &'static str, reason: String },
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}
