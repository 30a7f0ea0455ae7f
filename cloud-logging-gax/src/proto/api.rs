/// An object representing a resource that can be used for monitoring, logging,
/// billing, or other purposes.
///
/// For example, the monitored resource for a Compute Engine VM instance is
/// `{ "type": "gce_instance", "labels": { "instance_id": "12345678901234", "zone": "us-central1-a" }}`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MonitoredResource {
    /// Required. The monitored resource type, for example `"gce_instance"`.
    #[prost(string, tag = "1")]
    pub r#type: ::prost::alloc::string::String,
    /// Required. Values for all of the labels listed in the associated monitored
    /// resource descriptor.
    #[prost(map = "string, string", tag = "2")]
    pub labels:
        ::std::collections::HashMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
}
