//! Internal debug events.
//!
//! Events are emitted through `tracing` when the `internal-logs` feature is
//! enabled and compiled out otherwise. The crate never installs a subscriber.

/// Emits a named debug event, with the crate name as target.
///
/// ```ignore
/// gax_debug!(name: "SinksGateway.GetSink", sink_name = path.as_str());
/// ```
macro_rules! gax_debug {
    (name: $name:expr $(, $key:ident = $value:expr)* $(,)?) => {
        #[cfg(feature = "internal-logs")]
        {
            tracing::debug!(name: $name, target: env!("CARGO_PKG_NAME"), name = $name $(, $key = $value)*);
        }

        #[cfg(not(feature = "internal-logs"))]
        {
            let _ = $name;
            $(let _ = &$value;)*
        }
    };
}
