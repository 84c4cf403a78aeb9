//! Process and runtime introspection.
//!
//! Everything the handlers report about the running process lives here: the
//! start time and uptime formatting, host name lookup, build target identity,
//! async task count and memory usage. All reads are in-process and
//! non-blocking.

use std::ffi::OsString;
use std::io;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Compiler version captured by the build script
pub const RUNTIME_VERSION: &str = env!("K8S_DEMO_RUSTC_VERSION");

/// Process start time, captured once before the listener starts.
///
/// The value is `Copy` and never mutated, so every request reads it without
/// synchronization.
#[derive(Debug, Clone, Copy)]
pub struct StartTime {
    instant: Instant,
    wall: DateTime<Utc>,
}

impl StartTime {
    /// Capture the current instant as the process start.
    pub fn now() -> Self {
        Self {
            instant: Instant::now(),
            wall: Utc::now(),
        }
    }

    /// A start time that lies `elapsed` in the past.
    ///
    /// Falls back to the current instant if the monotonic clock cannot go back
    /// that far.
    pub fn elapsed_ago(elapsed: Duration) -> Self {
        let now = Self::now();
        let wall_elapsed =
            chrono::Duration::from_std(elapsed).unwrap_or_else(|_| chrono::Duration::zero());
        match now.instant.checked_sub(elapsed) {
            Some(instant) => Self {
                instant,
                wall: now.wall - wall_elapsed,
            },
            None => now,
        }
    }

    /// Wall clock time the process started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.wall
    }

    /// Elapsed time since start. Monotonic, never negative.
    pub fn uptime(&self) -> Duration {
        self.instant.elapsed()
    }

    /// Uptime rounded to whole seconds, e.g. `1m5s`.
    pub fn uptime_display(&self) -> String {
        format_uptime(self.uptime())
    }
}

/// Render a duration rounded to the nearest second as `XhYmZs`.
///
/// Leading zero units are dropped (`5s`, `1m5s`) but inner ones are kept
/// (`1h0m3s`). A zero duration renders as `0s`.
pub fn format_uptime(elapsed: Duration) -> String {
    let mut secs = elapsed.as_secs();
    if elapsed.subsec_nanos() >= 500_000_000 {
        secs += 1;
    }

    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Host name of the machine (the pod name under Kubernetes).
///
/// Lookup failures yield an empty string.
pub fn hostname() -> String {
    hostname_or_empty(hostname::get())
}

/// Host name from a lookup result; a failed lookup becomes `""` and non UTF-8
/// bytes are replaced rather than dropping the whole name.
fn hostname_or_empty(lookup: io::Result<OsString>) -> String {
    lookup
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Operating system the binary was built for, e.g. `linux`.
pub fn os() -> &'static str {
    std::env::consts::OS
}

/// CPU architecture the binary was built for, e.g. `x86_64`.
pub fn architecture() -> &'static str {
    std::env::consts::ARCH
}

/// Number of live tasks on the current tokio runtime, 0 outside a runtime.
pub fn task_count() -> usize {
    tokio::runtime::Handle::try_current()
        .map(|handle| handle.metrics().num_alive_tasks())
        .unwrap_or(0)
}

/// Live heap bytes as reported by jemalloc.
///
/// Only meaningful when the binary installs `tikv_jemallocator::Jemalloc` as
/// its global allocator; reports 0 on targets without jemalloc or if the
/// statistics cannot be read.
#[cfg(not(target_env = "msvc"))]
pub fn allocated_bytes() -> u64 {
    use tikv_jemalloc_ctl::{epoch, stats};

    // Statistics are cached until the epoch advances
    if epoch::advance().is_err() {
        return 0;
    }
    stats::allocated::read().map(|bytes| bytes as u64).unwrap_or(0)
}

#[cfg(target_env = "msvc")]
pub fn allocated_bytes() -> u64 {
    0
}

/// Resident set size of the process, 0 where the platform does not expose it.
pub fn system_bytes() -> u64 {
    memory_stats::memory_stats()
        .map(|stats| stats.physical_mem as u64)
        .unwrap_or(0)
}

/// Whole mebibytes, truncated.
pub fn to_mib(bytes: u64) -> u64 {
    bytes / BYTES_PER_MIB
}
