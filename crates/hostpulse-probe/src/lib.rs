//! hostpulse-probe: Metrics probes and aggregation
//!
//! A fixed set of shell one-liners sampled over a [`RemoteExecutor`], joined
//! into a single `Metrics` value. Aggregation is all-or-nothing: one failed
//! or unparseable probe fails the whole collection.
//!
//! [`RemoteExecutor`]: hostpulse_exec::RemoteExecutor

pub mod collector;
pub mod commands;
pub mod error;
mod parse;
pub mod types;

pub use collector::MetricsCollector;
pub use error::ProbeError;
pub use types::{DiskUsage, Metrics, NetIo};
