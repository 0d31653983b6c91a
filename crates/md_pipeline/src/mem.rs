//! Advisory memory guard. Local models can push a small machine into swap;
//! past a fixed high-water mark the whole process is taken down rather than
//! letting the OOM killer pick a victim.

use std::time::Duration;
use sysinfo::System;
use tracing::error;

pub const RAM_THRESHOLD_PERCENT: f64 = 80.0;
const CHECK_INTERVAL: Duration = Duration::from_secs(1);

fn memory_usage_percent(system: &System) -> f64 {
    let total = system.total_memory();
    if total == 0 {
        return 0.0;
    }
    system.used_memory() as f64 / total as f64 * 100.0
}

/// Spawns the guard task. Samples system memory once a second and exits the
/// process when usage crosses the threshold.
pub fn spawn_memory_guard() -> tokio::task::JoinHandle<()> {
    tokio::spawn(async {
        let mut system = System::new();
        loop {
            system.refresh_memory();
            let used = memory_usage_percent(&system);
            if used >= RAM_THRESHOLD_PERCENT {
                error!(
                    "Critical: RAM usage at {:.1}% exceeded {}% threshold, terminating",
                    used, RAM_THRESHOLD_PERCENT
                );
                std::process::exit(1);
            }
            tokio::time::sleep(CHECK_INTERVAL).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_usage_percent_in_range() {
        let mut system = System::new();
        system.refresh_memory();
        let used = memory_usage_percent(&system);
        assert!((0.0..=100.0).contains(&used));
    }
}
