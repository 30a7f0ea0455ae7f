//! Client configuration from code and environment.

use std::env;
use std::time::Duration;

use tonic::metadata::{Ascii, MetadataKey, MetadataMap, MetadataValue};
#[cfg(feature = "tls")]
use tonic::transport::ClientTlsConfig;
use tonic::transport::Channel;

use crate::client::tonic::RequestContext;
use crate::client::{ConfigServiceClient, LoggingServiceClient};
use crate::gateway::{LogEntriesGateway, SinksGateway};
use crate::Error;

/// Address of the Cloud Logging API, defaults to [`DEFAULT_ENDPOINT`].
pub const ENV_ENDPOINT: &str = "GOOGLE_CLOUD_LOGGING_ENDPOINT";
/// Per-call deadline in milliseconds, defaults to [`DEFAULT_TIMEOUT`].
pub const ENV_TIMEOUT: &str = "GOOGLE_CLOUD_LOGGING_TIMEOUT";
/// Extra request metadata as `k1=v1,k2=v2`. Values may be URL-encoded.
pub const ENV_HEADERS: &str = "GOOGLE_CLOUD_LOGGING_HEADERS";

pub const DEFAULT_ENDPOINT: &str = "https://logging.googleapis.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const API_CLIENT_HEADER: &str = "x-goog-api-client";

/// Builds the two gateways over a shared gRPC channel.
///
/// Values set here override the `GOOGLE_CLOUD_LOGGING_*` environment
/// variables, which in turn override the defaults.
///
/// Credentials are not acquired by this crate; pass an `authorization` entry
/// through [`with_metadata`](Self::with_metadata) or supply a channel that
/// authenticates on its own.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
    metadata: Option<MetadataMap>,
    channel: Option<Channel>,
    #[cfg(feature = "tls")]
    tls_config: Option<ClientTlsConfig>,
}

impl ClientBuilder {
    pub fn with_endpoint<T: Into<String>>(mut self, endpoint: T) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Metadata sent with every request. Entries here win over
    /// [`ENV_HEADERS`] entries with the same key.
    pub fn with_metadata(mut self, metadata: MetadataMap) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Uses an existing channel. Endpoint, timeout and TLS settings are then
    /// ignored; metadata still applies.
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = Some(channel);
        self
    }

    #[cfg(feature = "tls")]
    pub fn with_tls_config(mut self, tls_config: ClientTlsConfig) -> Self {
        self.tls_config = Some(tls_config);
        self
    }

    /// Builds both gateways. The channel connects on first use, so this does
    /// not touch the network, but it must be called within a tokio runtime.
    pub fn build(
        self,
    ) -> Result<
        (
            LogEntriesGateway<LoggingServiceClient>,
            SinksGateway<ConfigServiceClient>,
        ),
        Error,
    > {
        let metadata = resolve_metadata(self.metadata.unwrap_or_default())?;
        let context = RequestContext::new(metadata);

        let channel = match self.channel {
            Some(channel) => channel,
            None => {
                let endpoint = resolve_endpoint(self.endpoint);
                let timeout = resolve_timeout(self.timeout);
                let builder =
                    Channel::from_shared(endpoint.clone()).map_err(|e| Error::InvalidConfig {
                        name: "endpoint",
                        reason: format!("{endpoint}: {e}"),
                    })?;

                #[cfg(feature = "tls")]
                let tls_config = match self.tls_config {
                    Some(tls_config) => Some(tls_config),
                    None if endpoint.starts_with("https") => {
                        Some(ClientTlsConfig::new().with_enabled_roots())
                    }
                    None => None,
                };
                #[cfg(feature = "tls")]
                let builder = match tls_config {
                    Some(tls_config) => builder
                        .tls_config(tls_config)
                        .map_err(|e| Error::Transport(e.into()))?,
                    None => builder,
                };

                gax_debug!(
                    name: "ClientBuilder.ChannelBuilt",
                    endpoint = endpoint.as_str(),
                    timeout_in_millisecs = timeout.as_millis() as u64,
                );
                builder.timeout(timeout).connect_lazy()
            }
        };

        Ok((
            LogEntriesGateway::new(LoggingServiceClient::with_context(
                channel.clone(),
                context.clone(),
            )),
            SinksGateway::new(ConfigServiceClient::with_context(channel, context)),
        ))
    }
}

fn resolve_endpoint(provided_endpoint: Option<String>) -> String {
    // programmatic configuration overrides any value set via environment variables
    provided_endpoint
        .or_else(|| env::var(ENV_ENDPOINT).ok().filter(|val| !val.is_empty()))
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned())
}

fn resolve_timeout(provided_timeout: Option<Duration>) -> Duration {
    if let Some(timeout) = provided_timeout {
        timeout
    } else if let Some(millis) = env::var(ENV_TIMEOUT)
        .ok()
        .and_then(|val| val.trim().parse().ok())
    {
        Duration::from_millis(millis)
    } else {
        DEFAULT_TIMEOUT
    }
}

/// Merges [`ENV_HEADERS`] into `metadata` without replacing existing keys and
/// adds the default client identification header.
fn resolve_metadata(mut metadata: MetadataMap) -> Result<MetadataMap, Error> {
    if let Ok(input) = env::var(ENV_HEADERS) {
        for (key, value) in parse_header_string(&input) {
            let key = MetadataKey::<Ascii>::from_bytes(key.to_ascii_lowercase().as_bytes())
                .map_err(|e| Error::InvalidConfig {
                    name: ENV_HEADERS,
                    reason: format!("header name {key:?}: {e}"),
                })?;
            if metadata.contains_key(&key) {
                continue;
            }
            let value: MetadataValue<Ascii> =
                value.parse().map_err(|e| Error::InvalidConfig {
                    name: ENV_HEADERS,
                    reason: format!("value of {}: {e}", key.as_str()),
                })?;
            metadata.insert(key, value);
        }
    }

    if !metadata.contains_key(API_CLIENT_HEADER) {
        let client = format!("gl-rust/{}", env!("CARGO_PKG_VERSION"));
        if let Ok(value) = client.parse() {
            metadata.insert(API_CLIENT_HEADER, value);
        }
    }
    Ok(metadata)
}

fn parse_header_string(value: &str) -> impl Iterator<Item = (&str, String)> {
    value
        .split_terminator(',')
        .map(str::trim)
        .filter_map(parse_header_key_value_string)
}

fn parse_header_key_value_string(key_value_string: &str) -> Option<(&str, String)> {
    key_value_string
        .split_once('=')
        .map(|(key, value)| {
            (
                key.trim(),
                url_decode(value.trim()).unwrap_or_else(|| value.to_owned()),
            )
        })
        .filter(|(key, value)| !key.is_empty() && !value.is_empty())
}

/// Decodes `%XX` escapes. Returns `None` on a malformed escape or if the
/// decoded bytes are not UTF-8.
fn url_decode(value: &str) -> Option<String> {
    let mut bytes = Vec::with_capacity(value.len());
    let mut input = value.bytes();
    while let Some(byte) = input.next() {
        if byte == b'%' {
            let high = (input.next()? as char).to_digit(16)?;
            let low = (input.next()? as char).to_digit(16)?;
            bytes.push((high * 16 + low) as u8);
        } else {
            bytes.push(byte);
        }
    }
    String::from_utf8(bytes).ok()
}
