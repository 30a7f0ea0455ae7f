//! Mapping-based operations over the RPC clients.

use tonic::Code;

use crate::Error;

mod entries;
mod sinks;

pub use entries::LogEntriesGateway;
pub use sinks::SinksGateway;

fn project_path(project: &str) -> String {
    format!("projects/{project}")
}

fn sink_path(project: &str, sink_name: &str) -> String {
    format!("projects/{project}/sinks/{sink_name}")
}

fn logger_path(project: &str, logger_name: &str) -> String {
    format!("projects/{project}/logs/{logger_name}")
}

/// Translates `status` into `Error::NotFound(path)` when it carries NOT_FOUND.
fn not_found(path: &str, status: tonic::Status) -> Error {
    match status.code() {
        Code::NotFound => Error::NotFound(path.to_owned()),
        _ => Error::Rpc(status),
    }
}

/// Translates `status` into `Error::Conflict(path)` when it carries
/// FAILED_PRECONDITION, which the service uses for an existing sink.
fn conflict(path: &str, status: tonic::Status) -> Error {
    match status.code() {
        Code::FailedPrecondition => Error::Conflict(path.to_owned()),
        _ => Error::Rpc(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(project_path("p1"), "projects/p1");
        assert_eq!(sink_path("p1", "s1"), "projects/p1/sinks/s1");
        assert_eq!(logger_path("p1", "app"), "projects/p1/logs/app");
    }

    #[test]
    fn not_found_is_translated() {
        let err = not_found("projects/p1/sinks/s1", tonic::Status::not_found("gone"));
        assert!(matches!(err, Error::NotFound(path) if path == "projects/p1/sinks/s1"));
    }

    #[test]
    fn failed_precondition_is_a_conflict() {
        let err = conflict(
            "projects/p1/sinks/s1",
            tonic::Status::failed_precondition("exists"),
        );
        assert!(matches!(err, Error::Conflict(path) if path == "projects/p1/sinks/s1"));
    }

    #[test]
    fn other_codes_pass_through_unchanged() {
        let err = not_found("projects/p1/sinks/s1", tonic::Status::permission_denied("no"));
        match err {
            Error::Rpc(status) => {
                assert_eq!(status.code(), Code::PermissionDenied);
                assert_eq!(status.message(), "no");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        // Conflict translation only applies to FAILED_PRECONDITION.
        let err = conflict("projects/p1/sinks/s1", tonic::Status::not_found("gone"));
        assert!(matches!(err, Error::Rpc(status) if status.code() == Code::NotFound));
    }
}
