use std::collections::HashMap;

use super::{logger_path, project_path};
use crate::client::LoggingApi;
use crate::mapping::{LogEntryMapping, MonitoredResourceMapping};
use crate::paging::{build_paging_options, next_page_token, CallOptions};
use crate::proto::logging::v2::{
    DeleteLogRequest, ListLogEntriesRequest, LogEntry, WriteLogEntriesRequest,
};
use crate::Error;

/// Lists, writes and deletes log entries in mapping form.
#[derive(Clone, Debug)]
pub struct LogEntriesGateway<C> {
    client: C,
}

impl<C: LoggingApi> LogEntriesGateway<C> {
    pub fn new(client: C) -> Self {
        LogEntriesGateway { client }
    }

    /// The underlying RPC client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Lists one page of entries across `project_ids`.
    ///
    /// `page_size` of zero lets the server pick. Returns the converted entries
    /// and the token for the next page, `None` when there are no more pages.
    pub async fn list_entries(
        &self,
        project_ids: &[String],
        filter: &str,
        order_by: &str,
        page_size: i32,
        page_token: Option<&str>,
    ) -> Result<(Vec<LogEntryMapping>, Option<String>), Error> {
        let request = ListLogEntriesRequest {
            resource_names: project_ids.iter().map(|id| project_path(id)).collect(),
            filter: filter.to_owned(),
            order_by: order_by.to_owned(),
            page_size,
            page_token: String::new(),
        };
        gax_debug!(
            name: "LogEntriesGateway.ListEntries",
            projects = project_ids.len(),
            page_size = page_size,
            continued = page_token.is_some(),
        );

        let page = self
            .client
            .list_log_entries(request, build_paging_options(page_token))
            .await?;

        let entries = page
            .items
            .into_iter()
            .map(LogEntryMapping::from)
            .collect();
        Ok((entries, next_page_token(page.next_page_token)))
    }

    /// Writes `entries` in a single call.
    ///
    /// `logger_name`, `resource` and `labels` are defaults applied by the
    /// service to entries that do not set their own. Every entry is converted
    /// before anything is sent, so a malformed entry fails the whole batch
    /// without a call being made.
    pub async fn write_entries(
        &self,
        entries: &[LogEntryMapping],
        logger_name: Option<&str>,
        resource: Option<&MonitoredResourceMapping>,
        labels: Option<&HashMap<String, String>>,
    ) -> Result<(), Error> {
        let entries = entries
            .iter()
            .map(LogEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let request = WriteLogEntriesRequest {
            log_name: logger_name.map(str::to_owned).unwrap_or_default(),
            resource: resource.map(Into::into),
            labels: labels.cloned().unwrap_or_default(),
            entries,
            partial_success: false,
            dry_run: false,
        };
        gax_debug!(
            name: "LogEntriesGateway.WriteEntries",
            entries = request.entries.len(),
        );

        self.client
            .write_log_entries(request, CallOptions::default())
            .await?;
        Ok(())
    }

    /// Deletes every entry written under `logger_name` in `project`.
    pub async fn logger_delete(&self, project: &str, logger_name: &str) -> Result<(), Error> {
        let log_name = logger_path(project, logger_name);
        gax_debug!(name: "LogEntriesGateway.DeleteLogger", log_name = log_name.as_str());

        self.client
            .delete_log(DeleteLogRequest { log_name }, CallOptions::default())
            .await?;
        Ok(())
    }
}
