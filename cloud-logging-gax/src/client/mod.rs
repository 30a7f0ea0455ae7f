//! The RPC surface the gateways call into.
//!
//! [`LoggingApi`] and [`ConfigApi`] describe the generated client methods the
//! gateways rely on. [`tonic`] provides implementations backed by a gRPC
//! channel; tests and callers with their own transport can provide others.

use async_trait::async_trait;

use crate::paging::CallOptions;
use crate::proto::logging::v2::{
    CreateSinkRequest, DeleteLogRequest, DeleteSinkRequest, GetSinkRequest, ListLogEntriesRequest,
    ListSinksRequest, LogEntry, LogSink, UpdateSinkRequest, WriteLogEntriesRequest,
};

pub mod tonic;

pub use self::tonic::{ConfigServiceClient, LoggingServiceClient};

/// One page of a list call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Empty when there are no more pages.
    pub next_page_token: String,
}

/// Log entry operations of `google.logging.v2.LoggingServiceV2`.
///
/// For list calls the page token is taken from `options`; the `page_token`
/// field of the request is overwritten.
#[async_trait]
pub trait LoggingApi: Send + Sync {
    async fn list_log_entries(
        &self,
        request: ListLogEntriesRequest,
        options: CallOptions,
    ) -> Result<Page<LogEntry>, ::tonic::Status>;

    async fn write_log_entries(
        &self,
        request: WriteLogEntriesRequest,
        options: CallOptions,
    ) -> Result<(), ::tonic::Status>;

    async fn delete_log(
        &self,
        request: DeleteLogRequest,
        options: CallOptions,
    ) -> Result<(), ::tonic::Status>;
}

/// Sink operations of `google.logging.v2.ConfigServiceV2`.
#[async_trait]
pub trait ConfigApi: Send + Sync {
    async fn list_sinks(
        &self,
        request: ListSinksRequest,
        options: CallOptions,
    ) -> Result<Page<LogSink>, ::tonic::Status>;

    async fn create_sink(
        &self,
        request: CreateSinkRequest,
        options: CallOptions,
    ) -> Result<LogSink, ::tonic::Status>;

    async fn get_sink(
        &self,
        request: GetSinkRequest,
        options: CallOptions,
    ) -> Result<LogSink, ::tonic::Status>;

    async fn update_sink(
        &self,
        request: UpdateSinkRequest,
        options: CallOptions,
    ) -> Result<LogSink, ::tonic::Status>;

    async fn delete_sink(
        &self,
        request: DeleteSinkRequest,
        options: CallOptions,
    ) -> Result<(), ::tonic::Status>;
}
