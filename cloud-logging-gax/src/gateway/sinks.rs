use super::{conflict, not_found, project_path, sink_path};
use crate::client::ConfigApi;
use crate::mapping::SinkMapping;
use crate::paging::{build_paging_options, next_page_token, CallOptions};
use crate::proto::logging::v2::{
    CreateSinkRequest, DeleteSinkRequest, GetSinkRequest, ListSinksRequest, LogSink,
    UpdateSinkRequest,
};
use crate::Error;

/// Manages sinks in mapping form.
///
/// Sinks are addressed as `projects/<project>/sinks/<sink_name>`; that path is
/// what [`Error::Conflict`] and [`Error::NotFound`] carry.
#[derive(Clone, Debug)]
pub struct SinksGateway<C> {
    client: C,
}

impl<C: ConfigApi> SinksGateway<C> {
    pub fn new(client: C) -> Self {
        SinksGateway { client }
    }

    /// The underlying RPC client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Lists one page of the sinks in `project`.
    pub async fn list_sinks(
        &self,
        project: &str,
        page_size: i32,
        page_token: Option<&str>,
    ) -> Result<(Vec<SinkMapping>, Option<String>), Error> {
        let request = ListSinksRequest {
            parent: project_path(project),
            page_token: String::new(),
            page_size,
        };
        gax_debug!(
            name: "SinksGateway.ListSinks",
            parent = request.parent.as_str(),
            page_size = page_size,
            continued = page_token.is_some(),
        );

        let page = self
            .client
            .list_sinks(request, build_paging_options(page_token))
            .await?;

        let sinks = page.items.into_iter().map(SinkMapping::from).collect();
        Ok((sinks, next_page_token(page.next_page_token)))
    }

    /// Creates a sink. Fails with [`Error::Conflict`] if it already exists.
    pub async fn sink_create(
        &self,
        project: &str,
        sink_name: &str,
        filter: &str,
        destination: &str,
    ) -> Result<(), Error> {
        let path = sink_path(project, sink_name);
        let request = CreateSinkRequest {
            parent: project_path(project),
            sink: Some(new_sink(&path, filter, destination)),
            unique_writer_identity: false,
        };
        gax_debug!(name: "SinksGateway.CreateSink", sink_name = path.as_str());

        self.client
            .create_sink(request, CallOptions::default())
            .await
            .map_err(|status| conflict(&path, status))?;
        Ok(())
    }

    /// Fetches a sink. Fails with [`Error::NotFound`] if it does not exist.
    pub async fn sink_get(&self, project: &str, sink_name: &str) -> Result<SinkMapping, Error> {
        let path = sink_path(project, sink_name);
        gax_debug!(name: "SinksGateway.GetSink", sink_name = path.as_str());

        let sink = self
            .client
            .get_sink(
                GetSinkRequest {
                    sink_name: path.clone(),
                },
                CallOptions::default(),
            )
            .await
            .map_err(|status| not_found(&path, status))?;
        Ok(sink.into())
    }

    /// Replaces the filter and destination of an existing sink.
    ///
    /// Returns the sink as sent, not as stored by the service, so fields the
    /// service fills in (writer identity, timestamps) are not reflected.
    pub async fn sink_update(
        &self,
        project: &str,
        sink_name: &str,
        filter: &str,
        destination: &str,
    ) -> Result<SinkMapping, Error> {
        let path = sink_path(project, sink_name);
        let sink = new_sink(&path, filter, destination);
        let request = UpdateSinkRequest {
            sink_name: path.clone(),
            sink: Some(sink.clone()),
            unique_writer_identity: false,
            update_mask: None,
        };
        gax_debug!(name: "SinksGateway.UpdateSink", sink_name = path.as_str());

        self.client
            .update_sink(request, CallOptions::default())
            .await
            .map_err(|status| not_found(&path, status))?;
        Ok(sink.into())
    }

    /// Deletes a sink. Fails with [`Error::NotFound`] if it does not exist.
    pub async fn sink_delete(&self, project: &str, sink_name: &str) -> Result<(), Error> {
        let path = sink_path(project, sink_name);
        gax_debug!(name: "SinksGateway.DeleteSink", sink_name = path.as_str());

        self.client
            .delete_sink(
                DeleteSinkRequest {
                    sink_name: path.clone(),
                },
                CallOptions::default(),
            )
            .await
            .map_err(|status| not_found(&path, status))?;
        Ok(())
    }
}

fn new_sink(path: &str, filter: &str, destination: &str) -> LogSink {
    LogSink::from(&SinkMapping {
        name: path.to_owned(),
        destination: destination.to_owned(),
        filter: filter.to_owned(),
    })
}
