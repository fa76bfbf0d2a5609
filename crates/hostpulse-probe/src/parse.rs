//! Parsers for probe output
//!
//! One parser per probe. A probe whose output does not match its expected
//! shape is a collection failure, never a silent zero.

use crate::error::ProbeError;
use crate::types::{DiskUsage, NetIo};

pub(crate) struct MemorySample {
    pub percent: f64,
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
}

fn field<T: std::str::FromStr>(raw: &str, value: &str, probe: &str) -> Result<T, ProbeError> {
    value
        .parse()
        .map_err(|_| ProbeError::Parse(format!("{probe}: {raw:?}")))
}

pub(crate) fn cpu_percent(raw: &str) -> Result<f64, ProbeError> {
    field(raw, raw.trim(), "cpu")
}

pub(crate) fn memory(raw: &str) -> Result<MemorySample, ProbeError> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    let [percent, total, used, available] = fields[..] else {
        return Err(ProbeError::Parse(format!("memory: {raw:?}")));
    };

    Ok(MemorySample {
        percent: field(raw, percent, "memory")?,
        total_bytes: field(raw, total, "memory")?,
        used_bytes: field(raw, used, "memory")?,
        available_bytes: field(raw, available, "memory")?,
    })
}

pub(crate) fn disk(raw: &str) -> Result<DiskUsage, ProbeError> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    let [percent, total, used, free, mount] = fields[..] else {
        return Err(ProbeError::Parse(format!("disk: {raw:?}")));
    };

    Ok(DiskUsage {
        mount: mount.to_string(),
        total_bytes: field(raw, total, "disk")?,
        used_bytes: field(raw, used, "disk")?,
        free_bytes: field(raw, free, "disk")?,
        percent: field(raw, percent, "disk")?,
    })
}

pub(crate) fn load_avg(raw: &str) -> Result<Vec<f64>, ProbeError> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(ProbeError::Parse(format!("loadavg: {raw:?}")));
    }

    fields
        .into_iter()
        .map(|v| field(raw, v, "loadavg"))
        .collect()
}

pub(crate) fn uptime(raw: &str) -> Result<u64, ProbeError> {
    field(raw, raw.trim(), "uptime")
}

pub(crate) fn hostname(raw: &str) -> Result<String, ProbeError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ProbeError::Parse("hostname: empty output".to_string()));
    }
    Ok(name.to_string())
}

pub(crate) fn net_io(raw: &str) -> Result<NetIo, ProbeError> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    let [tx, rx] = fields[..] else {
        return Err(ProbeError::Parse(format!("netio: {raw:?}")));
    };

    Ok(NetIo {
        bytes_sent: field(raw, tx, "netio")?,
        bytes_recv: field(raw, rx, "netio")?,
    })
}
