use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use hostpulse_exec::{ExecError, ExecOutput, LocalExecutor, RemoteExecutor};
use hostpulse_probe::{MetricsCollector, ProbeError, commands};

const DEADLINE: Duration = Duration::from_millis(8000);

fn ok(stdout: &str) -> Result<ExecOutput, ExecError> {
    Ok(ExecOutput {
        status: 0,
        stdout: stdout.to_string(),
        stderr: String::new(),
    })
}

/// Fake executor replaying a canned output (or failure) per command.
struct ScriptedExecutor {
    outputs: HashMap<&'static str, Result<ExecOutput, ExecError>>,
    invocations: AtomicUsize,
}

impl ScriptedExecutor {
    fn healthy() -> Self {
        let mut outputs = HashMap::new();
        outputs.insert(commands::CPU_PERCENT, ok("12.5"));
        outputs.insert(commands::MEMORY, ok("43.2 8000000000 3456000000 4544000000"));
        outputs.insert(commands::DISK, ok("61 100000000000 61000000000 39000000000 /"));
        outputs.insert(commands::LOAD_AVG, ok("0.42 0.36 0.30"));
        outputs.insert(commands::UPTIME, ok("123456"));
        outputs.insert(commands::HOSTNAME, ok("web01"));
        outputs.insert(commands::NET_IO, ok("123456789 987654321"));
        Self {
            outputs,
            invocations: AtomicUsize::new(0),
        }
    }

    fn with_failure(cmd: &'static str, err: ExecError) -> Self {
        let mut scripted = Self::healthy();
        scripted.outputs.insert(cmd, Err(err));
        scripted
    }
}

#[async_trait]
impl RemoteExecutor for ScriptedExecutor {
    async fn execute(&self, cmd: &str, _timeout: Duration) -> Result<ExecOutput, ExecError> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        match self.outputs.get(cmd) {
            Some(res) => res.clone(),
            None => Err(ExecError::Protocol(format!("unscripted command: {cmd}"))),
        }
    }
}

#[tokio::test]
async fn collect_joins_all_probes_into_metrics() {
    let executor = Arc::new(ScriptedExecutor::healthy());
    let collector = MetricsCollector::new(executor.clone(), DEADLINE);

    let metrics = collector.collect().await.unwrap();

    assert_eq!(metrics.cpu_percent, 12.5);
    assert_eq!(metrics.load_avg, vec![0.42, 0.36, 0.30]);
    assert_eq!(metrics.mem_percent, 43.2);
    assert_eq!(metrics.mem_total_bytes, 8_000_000_000);
    assert_eq!(metrics.mem_used_bytes, 3_456_000_000);
    assert_eq!(metrics.mem_available_bytes, 4_544_000_000);
    assert_eq!(metrics.disk.mount, "/");
    assert_eq!(metrics.disk.percent, 61.0);
    assert_eq!(metrics.net_io.bytes_sent, 123_456_789);
    assert_eq!(metrics.uptime_seconds, 123_456);
    assert_eq!(metrics.hostname, "web01");
    assert_eq!(executor.invocations.load(Ordering::SeqCst), 7);
}

#[tokio::test]
async fn one_timed_out_probe_fails_the_whole_collection() {
    let executor = Arc::new(ScriptedExecutor::with_failure(
        commands::CPU_PERCENT,
        ExecError::Timeout {
            timeout: Duration::from_millis(50),
        },
    ));
    let collector = MetricsCollector::new(executor.clone(), DEADLINE);

    let err = collector.collect().await.unwrap_err();

    assert!(matches!(err, ProbeError::Exec(ExecError::Timeout { .. })));
    // join-all, not join-any: every probe still ran to a settlement
    assert_eq!(executor.invocations.load(Ordering::SeqCst), 7);
}

#[tokio::test]
async fn one_failed_probe_yields_no_partial_metrics() {
    let executor = Arc::new(ScriptedExecutor::with_failure(
        commands::DISK,
        ExecError::CommandFailed {
            status: 1,
            stderr: "df: /: No such file or directory".to_string(),
        },
    ));
    let collector = MetricsCollector::new(executor, DEADLINE);

    let err = collector.collect().await.unwrap_err();

    assert!(matches!(
        err,
        ProbeError::Exec(ExecError::CommandFailed { status: 1, .. })
    ));
}

#[tokio::test]
async fn garbled_probe_output_is_a_parse_failure() {
    let mut executor = ScriptedExecutor::healthy();
    executor.outputs.insert(commands::LOAD_AVG, ok("not a load average"));
    let collector = MetricsCollector::new(Arc::new(executor), DEADLINE);

    let err = collector.collect().await.unwrap_err();

    assert!(matches!(err, ProbeError::Parse(_)));
}

/// Fake transport where a transport error and the deadline are armed at the
/// same instant, so either may win the race on any given invocation.
struct RacingExecutor {
    settlements: AtomicUsize,
}

#[async_trait]
impl RemoteExecutor for RacingExecutor {
    async fn execute(&self, _cmd: &str, _timeout: Duration) -> Result<ExecOutput, ExecError> {
        let fuse = Duration::from_millis(5);
        let transport_event = async {
            tokio::time::sleep(fuse).await;
            Err(ExecError::ConnectionFailed("connection reset".to_string()))
        };

        let outcome = match tokio::time::timeout(fuse, transport_event).await {
            Ok(res) => res,
            Err(_) => Err(ExecError::Timeout { timeout: fuse }),
        };

        // one settlement per invocation, whichever signal fired first
        self.settlements.fetch_add(1, Ordering::SeqCst);
        outcome
    }
}

#[tokio::test]
async fn racing_signals_settle_exactly_once_per_invocation() {
    let executor = Arc::new(RacingExecutor {
        settlements: AtomicUsize::new(0),
    });
    let collector = MetricsCollector::new(executor.clone(), DEADLINE);

    let err = collector.collect().await.unwrap_err();

    match err {
        ProbeError::Exec(e) => assert!(e.is_transport() || matches!(e, ExecError::Timeout { .. })),
        other => panic!("expected an exec failure, got {other}"),
    }
    // every probe resolved exactly once: never zero, never double
    assert_eq!(executor.settlements.load(Ordering::SeqCst), 7);
}

// Runs the real probe one-liners against the local machine. Linux-only by
// nature of the probes themselves.
#[tokio::test]
#[cfg(target_os = "linux")]
async fn probe_set_runs_against_a_real_shell() {
    let collector = MetricsCollector::new(Arc::new(LocalExecutor::new()), DEADLINE);

    let metrics = collector.collect().await.unwrap();

    assert!(metrics.cpu_percent >= 0.0);
    assert!(metrics.mem_total_bytes > 0);
    assert!(metrics.mem_percent > 0.0 && metrics.mem_percent < 100.0);
    assert_eq!(metrics.load_avg.len(), 3);
    assert!(metrics.uptime_seconds > 0);
    assert!(!metrics.hostname.is_empty());
    assert_eq!(metrics.disk.mount, "/");
}
