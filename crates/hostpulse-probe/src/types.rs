//! Metrics types returned by the aggregator

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One full metrics sample from the target host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Metrics {
    /// CPU usage percent over the probe's sample window
    pub cpu_percent: f64,
    /// 1/5/15 minute load averages
    pub load_avg: Vec<f64>,
    /// Memory usage percent (used = total - available)
    pub mem_percent: f64,
    /// Total memory in bytes
    pub mem_total_bytes: u64,
    /// Used memory in bytes
    pub mem_used_bytes: u64,
    /// Available memory in bytes
    pub mem_available_bytes: u64,
    /// Root filesystem usage
    pub disk: DiskUsage,
    /// Cumulative network counters
    pub net_io: NetIo,
    /// Seconds since boot
    pub uptime_seconds: u64,
    /// Target hostname
    pub hostname: String,
}

/// Usage figures for a single filesystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiskUsage {
    /// Mount point
    pub mount: String,
    /// Total size in bytes
    pub total_bytes: u64,
    /// Used bytes
    pub used_bytes: u64,
    /// Free bytes
    pub free_bytes: u64,
    /// Usage percent
    pub percent: f64,
}

/// Cumulative network I/O counters since boot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NetIo {
    /// Bytes transmitted
    pub bytes_sent: u64,
    /// Bytes received
    pub bytes_recv: u64,
}
