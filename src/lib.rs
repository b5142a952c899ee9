//! A library for monitoring a Concordium node through its administrative gRPC
//! interface. The library is structured around multiple modules.
//!
//! - [`v1`] contains the main entrypoint to the library. In particular it
//!   contains the [`Client`](v1::Client) struct which maintains a connection to
//!   the node, and supports queries and node manipulation (banning peers). This
//!   client uses gRPC API version 1 of the Concordium node.
//! - [`types`] contains the type definitions that model the responses.
//! - [`estimates`] contains the quantities that are derived from consensus
//!   parameters, such as epoch boundaries and expected block production.
//! - [`monitor`] composes the queries into the fetch graphs of a polling
//!   cycle.
//! - [`health`] and [`format`] turn the fetched records into health checks
//!   and display strings.

/// Various constants that apply to the chain and to monitoring a node.
pub mod constants;
/// Error and result types of the node's GRPC API.
pub mod endpoints;
pub mod estimates;
pub mod format;
pub mod health;
mod internal;
pub mod monitor;
pub mod token_cache;
/// Type definitions used throughout the rest of the library.
pub mod types;

/// A [client](v1::Client) for the concordium node gRPC API version 1.
pub mod v1;
