//! Probe command strings
//!
//! POSIX sh + awk over `/proc`, so they run against any Linux target's
//! default shell. The executor treats them as opaque strings.

/// CPU usage percent: two samples of the cumulative `/proc/stat` counters
/// 0.2s apart, percentage from the busy/total delta.
pub const CPU_PERCENT: &str = "s1=$(head -n1 /proc/stat); sleep 0.2; s2=$(head -n1 /proc/stat); \
     printf '%s\\n%s\\n' \"$s1\" \"$s2\" | \
     awk '{u[NR]=$2+$3+$4+$7+$8+$9; t[NR]=$2+$3+$4+$5+$6+$7+$8+$9} \
     END {d=t[2]-t[1]; if (d>0) printf \"%.1f\", (u[2]-u[1])*100/d; else printf \"0.0\"}'";

/// Memory: `percent total used available` in bytes, used = total - available.
/// Byte figures print as %.0f: mawk's %d is a 32-bit int.
pub const MEMORY: &str = "awk '/^MemTotal:/ {t=$2*1024} /^MemAvailable:/ {a=$2*1024} \
     END {u=t-a; printf \"%.1f %.0f %.0f %.0f\", u*100/t, t, u, a}' /proc/meminfo";

/// Root filesystem: `percent total used free mount` (bytes).
pub const DISK: &str = "df -Pk / | awk 'NR==2 {gsub(/%/,\"\",$5); \
     printf \"%s %.0f %.0f %.0f %s\", $5, $2*1024, $3*1024, $4*1024, $6}'";

/// The three load-average figures.
pub const LOAD_AVG: &str = "awk '{printf \"%s %s %s\", $1, $2, $3}' /proc/loadavg";

/// Uptime in whole seconds.
pub const UPTIME: &str = "awk '{printf \"%d\", $1}' /proc/uptime";

/// Target hostname.
pub const HOSTNAME: &str = "hostname";

/// Cumulative network counters summed over all interfaces: `tx rx` bytes.
pub const NET_IO: &str = "awk -F: 'NR>2 {split($2,f,\" \"); rx+=f[1]; tx+=f[9]} \
     END {printf \"%.0f %.0f\", tx, rx}' /proc/net/dev";
