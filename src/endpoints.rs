//! Wrapper for the node's GRPC API. The return values are parsed and wrapped in
//! structured values.
use thiserror::Error;
use tonic::metadata::errors::InvalidMetadataValue;
pub use tonic::transport::{Endpoint, Error};

#[derive(Error, Debug)]
/// Authentication, connection, or response parsing error.
pub enum RPCError {
    #[error("Call failed: {0}")]
    CallError(#[from] tonic::Status),
    #[error("Could not connect: {0}")]
    Connection(#[from] tonic::transport::Error),
    #[error(transparent)]
    InvalidMetadata(#[from] InvalidMetadataValue),
    #[error("Error parsing JSON result: {0}")]
    ParseError(#[from] anyhow::Error),
}

impl From<serde_json::Error> for RPCError {
    fn from(x: serde_json::Error) -> Self { Self::ParseError(x.into()) }
}

impl From<semver::Error> for RPCError {
    fn from(x: semver::Error) -> Self { Self::ParseError(x.into()) }
}

impl RPCError {
    /// Return whether the node rejected the authentication token.
    /// Retrying a request with the same token will not succeed.
    pub fn is_unauthenticated(&self) -> bool {
        match self {
            RPCError::CallError(e) => matches!(e.code(), tonic::Code::Unauthenticated),
            RPCError::Connection(_) => false,
            RPCError::InvalidMetadata(_) => false,
            RPCError::ParseError(_) => false,
        }
    }
}

#[derive(Error, Debug)]
/// Errors that can occur when making queries. This can either be a general
/// connection/authentication error, or the requested item is not found.
pub enum QueryError {
    #[error("RPC error: {0}")]
    /// A general RPC error occurred.
    RPCError(#[from] RPCError),
    #[error("Requested object not found.")]
    /// The requested item was not found.
    NotFound,
}

impl QueryError {
    /// Whether this error indicates an object was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            QueryError::RPCError(c) => {
                if let RPCError::CallError(ce) = c {
                    ce.code() == tonic::Code::NotFound
                } else {
                    false
                }
            }
            QueryError::NotFound => true,
        }
    }
}

impl From<tonic::Status> for QueryError {
    fn from(s: tonic::Status) -> Self { Self::RPCError(s.into()) }
}

impl From<serde_json::Error> for QueryError {
    fn from(s: serde_json::Error) -> Self { Self::RPCError(s.into()) }
}

/// Result a GRPC query. This is a simple alias for [std::Result](https://doc.rust-lang.org/std/result/enum.Result.html)
/// that fixes the error type to be [RPCError].
pub type RPCResult<A> = Result<A, RPCError>;

/// Result a GRPC query where the item lookup might fail.
/// This is a simple alias for [std::Result](https://doc.rust-lang.org/std/result/enum.Result.html) that fixes the error type to be [`QueryError`].
pub type QueryResult<A> = Result<A, QueryError>;

/// Turn a [`QueryResult`] into an [`RPCResult`] of an optional value, mapping
/// [`QueryError::NotFound`] and a `NOT_FOUND` status to [`None`].
pub fn not_found_to_none<A>(result: QueryResult<A>) -> RPCResult<Option<A>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(QueryError::RPCError(e)) => Err(e),
        Err(QueryError::NotFound) => Ok(None),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_unauthenticated() {
        let err = RPCError::from(tonic::Status::unauthenticated("bad token"));
        assert!(err.is_unauthenticated());
        let err = RPCError::from(tonic::Status::invalid_argument("bad hash"));
        assert!(!err.is_unauthenticated());
        let err = RPCError::from(anyhow::anyhow!("oops"));
        assert!(!err.is_unauthenticated());
    }

    #[test]
    fn test_not_found_to_none() {
        assert_eq!(not_found_to_none(Ok(3u8)).ok(), Some(Some(3)));
        assert_eq!(not_found_to_none::<u8>(Err(QueryError::NotFound)).ok(), Some(None));
        let status = QueryError::from(tonic::Status::not_found("no such account"));
        assert_eq!(not_found_to_none::<u8>(Err(status)).ok(), Some(None));
        let status = QueryError::from(tonic::Status::internal("boom"));
        assert!(not_found_to_none::<u8>(Err(status)).is_err());
    }
}
