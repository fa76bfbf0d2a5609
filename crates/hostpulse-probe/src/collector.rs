//! Metrics aggregation over a remote executor

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument};

use hostpulse_exec::RemoteExecutor;

use crate::commands;
use crate::error::ProbeError;
use crate::parse;
use crate::types::Metrics;

/// Metrics collector
///
/// Issues every probe as its own executor invocation, all concurrently,
/// and waits for all of them to settle before looking at any result.
/// All-or-nothing: one failed or unparseable probe fails the collection.
pub struct MetricsCollector {
    executor: Arc<dyn RemoteExecutor>,
    timeout: Duration,
}

impl MetricsCollector {
    /// Create a collector with a per-probe timeout
    pub fn new(executor: Arc<dyn RemoteExecutor>, timeout: Duration) -> Self {
        Self { executor, timeout }
    }

    /// Collect one full metrics sample
    ///
    /// # Errors
    /// Returns the first probe failure, or a `Parse` error when a probe's
    /// output does not match its expected shape.
    #[instrument(skip(self))]
    pub async fn collect(&self) -> Result<Metrics, ProbeError> {
        debug!("collecting metrics");

        let (cpu, mem, disk, load, uptime, hostname, net) = tokio::join!(
            self.run(commands::CPU_PERCENT),
            self.run(commands::MEMORY),
            self.run(commands::DISK),
            self.run(commands::LOAD_AVG),
            self.run(commands::UPTIME),
            self.run(commands::HOSTNAME),
            self.run(commands::NET_IO),
        );

        let mem = parse::memory(&mem?)?;

        let metrics = Metrics {
            cpu_percent: parse::cpu_percent(&cpu?)?,
            load_avg: parse::load_avg(&load?)?,
            mem_percent: mem.percent,
            mem_total_bytes: mem.total_bytes,
            mem_used_bytes: mem.used_bytes,
            mem_available_bytes: mem.available_bytes,
            disk: parse::disk(&disk?)?,
            net_io: parse::net_io(&net?)?,
            uptime_seconds: parse::uptime(&uptime?)?,
            hostname: parse::hostname(&hostname?)?,
        };

        info!(
            host = %metrics.hostname,
            cpu = metrics.cpu_percent,
            mem = metrics.mem_percent,
            "metrics collected"
        );

        Ok(metrics)
    }

    async fn run(&self, cmd: &str) -> Result<String, ProbeError> {
        let output = self.executor.execute(cmd, self.timeout).await?;
        Ok(output.stdout)
    }
}
