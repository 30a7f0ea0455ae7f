//! Protocol messages and service stubs for the subset of the Cloud Logging v2
//! API used by this crate.
//!
//! The modules mirror the proto package layout (`google.api`,
//! `google.logging.type`, `google.logging.v2`) so that cross-package references
//! read the same way as in prost-generated code.

pub mod api;

pub mod logging {
    pub mod r#type;
    pub mod v2;
}
