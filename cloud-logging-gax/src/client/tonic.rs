use std::fmt;

use async_trait::async_trait;
use tonic::metadata::MetadataMap;
use tonic::transport::Channel;
use tonic::Request;

use super::{ConfigApi, LoggingApi, Page};
use crate::paging::CallOptions;
use crate::proto::logging::v2::{
    config_service_v2_client::ConfigServiceV2Client,
    logging_service_v2_client::LoggingServiceV2Client, CreateSinkRequest, DeleteLogRequest,
    DeleteSinkRequest, GetSinkRequest, ListLogEntriesRequest, ListSinksRequest, LogEntry, LogSink,
    UpdateSinkRequest, WriteLogEntriesRequest,
};

/// Metadata attached to every outgoing request.
#[derive(Clone, Default)]
pub(crate) struct RequestContext {
    metadata: MetadataMap,
}

impl RequestContext {
    pub(crate) fn new(metadata: MetadataMap) -> Self {
        RequestContext { metadata }
    }

    fn request<T>(&self, message: T) -> Request<T> {
        let mut request = Request::new(message);
        *request.metadata_mut() = self.metadata.clone();
        request
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Metadata usually carries credentials.
        f.debug_struct("RequestContext")
            .field("metadata", &format_args!("({} entries)", self.metadata.len()))
            .finish()
    }
}

// Only the code is logged; messages and details may carry sensitive data.
fn log_failure(method: &'static str, status: tonic::Status) -> tonic::Status {
    gax_debug!(
        name: "CloudLogging.RpcFailed",
        method = method,
        grpc_code = format!("{:?}", status.code()),
    );
    status
}

/// Overwrites a request's page token with the one carried by `options`.
/// The first page goes out as an empty token.
fn apply_page_token(page_token: &mut String, options: &CallOptions) {
    if let Some(token) = &options.page_token {
        *page_token = token.as_wire_str().to_owned();
    }
}

/// [`LoggingApi`] over a tonic channel.
#[derive(Clone, Debug)]
pub struct LoggingServiceClient {
    client: LoggingServiceV2Client<Channel>,
    context: RequestContext,
}

impl LoggingServiceClient {
    /// Wraps a channel. Use [`ClientBuilder`](crate::ClientBuilder) to get one
    /// configured from code and environment.
    pub fn new(channel: Channel) -> Self {
        Self::with_context(channel, RequestContext::default())
    }

    pub(crate) fn with_context(channel: Channel, context: RequestContext) -> Self {
        LoggingServiceClient {
            client: LoggingServiceV2Client::new(channel),
            context,
        }
    }
}

#[async_trait]
impl LoggingApi for LoggingServiceClient {
    async fn list_log_entries(
        &self,
        mut request: ListLogEntriesRequest,
        options: CallOptions,
    ) -> Result<Page<LogEntry>, tonic::Status> {
        apply_page_token(&mut request.page_token, &options);
        let mut client = self.client.clone();
        let response = client
            .list_log_entries(self.context.request(request))
            .await
            .map_err(|status| log_failure("ListLogEntries", status))?
            .into_inner();
        Ok(Page {
            items: response.entries,
            next_page_token: response.next_page_token,
        })
    }

    async fn write_log_entries(
        &self,
        request: WriteLogEntriesRequest,
        _options: CallOptions,
    ) -> Result<(), tonic::Status> {
        let mut client = self.client.clone();
        client
            .write_log_entries(self.context.request(request))
            .await
            .map_err(|status| log_failure("WriteLogEntries", status))?;
        Ok(())
    }

    async fn delete_log(
        &self,
        request: DeleteLogRequest,
        _options: CallOptions,
    ) -> Result<(), tonic::Status> {
        let mut client = self.client.clone();
        client
            .delete_log(self.context.request(request))
            .await
            .map_err(|status| log_failure("DeleteLog", status))?;
        Ok(())
    }
}

/// [`ConfigApi`] over a tonic channel.
#[derive(Clone, Debug)]
pub struct ConfigServiceClient {
    client: ConfigServiceV2Client<Channel>,
    context: RequestContext,
}

impl ConfigServiceClient {
    pub fn new(channel: Channel) -> Self {
        Self::with_context(channel, RequestContext::default())
    }

    pub(crate) fn with_context(channel: Channel, context: RequestContext) -> Self {
        ConfigServiceClient {
            client: ConfigServiceV2Client::new(channel),
            context,
        }
    }
}

#[async_trait]
impl ConfigApi for ConfigServiceClient {
    async fn list_sinks(
        &self,
        mut request: ListSinksRequest,
        options: CallOptions,
    ) -> Result<Page<LogSink>, tonic::Status> {
        apply_page_token(&mut request.page_token, &options);
        let mut client = self.client.clone();
        let response = client
            .list_sinks(self.context.request(request))
            .await
            .map_err(|status| log_failure("ListSinks", status))?
            .into_inner();
        Ok(Page {
            items: response.sinks,
            next_page_token: response.next_page_token,
        })
    }

    async fn create_sink(
        &self,
        request: CreateSinkRequest,
        _options: CallOptions,
    ) -> Result<LogSink, tonic::Status> {
        let mut client = self.client.clone();
        let sink = client
            .create_sink(self.context.request(request))
            .await
            .map_err(|status| log_failure("CreateSink", status))?
            .into_inner();
        Ok(sink)
    }

    async fn get_sink(
        &self,
        request: GetSinkRequest,
        _options: CallOptions,
    ) -> Result<LogSink, tonic::Status> {
        let mut client = self.client.clone();
        let sink = client
            .get_sink(self.context.request(request))
            .await
            .map_err(|status| log_failure("GetSink", status))?
            .into_inner();
        Ok(sink)
    }

    async fn update_sink(
        &self,
        request: UpdateSinkRequest,
        _options: CallOptions,
    ) -> Result<LogSink, tonic::Status> {
        let mut client = self.client.clone();
        let sink = client
            .update_sink(self.context.request(request))
            .await
            .map_err(|status| log_failure("UpdateSink", status))?
            .into_inner();
        Ok(sink)
    }

    async fn delete_sink(
        &self,
        request: DeleteSinkRequest,
        _options: CallOptions,
    ) -> Result<(), tonic::Status> {
        let mut client = self.client.clone();
        client
            .delete_sink(self.context.request(request))
            .await
            .map_err(|status| log_failure("DeleteSink", status))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paging::{build_paging_options, PageToken};
    use tonic::metadata::MetadataValue;

    #[test]
    fn page_token_from_options_overwrites_request() {
        let mut page_token = "stale".to_owned();
        apply_page_token(&mut page_token, &build_paging_options(Some("abc")));
        assert_eq!(page_token, "abc");
    }

    #[test]
    fn first_page_is_sent_as_empty_token() {
        let mut page_token = "stale".to_owned();
        apply_page_token(&mut page_token, &build_paging_options(None));
        assert_eq!(page_token, "");
        assert_eq!(PageToken::InitialPage.as_wire_str(), page_token);
    }

    #[test]
    fn options_without_paging_leave_request_alone() {
        let mut page_token = "kept".to_owned();
        apply_page_token(&mut page_token, &CallOptions::default());
        assert_eq!(page_token, "kept");
    }

    #[test]
    fn request_carries_context_metadata() {
        let mut metadata = MetadataMap::new();
        metadata.insert("authorization", MetadataValue::from_static("Bearer token"));
        let context = RequestContext::new(metadata);

        let request = context.request(GetSinkRequest {
            sink_name: "projects/p1/sinks/s1".into(),
        });

        assert_eq!(
            request.metadata().get("authorization").unwrap(),
            "Bearer token"
        );
        assert_eq!(request.get_ref().sink_name, "projects/p1/sinks/s1");
    }

    #[test]
    fn debug_output_hides_metadata_values() {
        let mut metadata = MetadataMap::new();
        metadata.insert("authorization", MetadataValue::from_static("Bearer secret"));
        let rendered = format!("{:?}", RequestContext::new(metadata));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("1 entries"));
    }
}
