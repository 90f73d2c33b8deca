//! Mock database calls that stand in for slow work.

use std::thread;

use call_timer::time_scope;
use tracing::info;

use crate::config::DemoConfig;

fn simulate_database_call(config: &DemoConfig) {
    info!("Starting the mock database call");
    thread::sleep(config.workload_delay());
    info!("Ending the mock database call");
}

/// Times itself with a scope timer declared at the top of the body.
pub fn mock_database_call(config: &DemoConfig) {
    time_scope!();
    simulate_database_call(config);
}

pub fn another_mock_database_call(config: &DemoConfig) {
    simulate_database_call(config);
}

pub fn yet_another_mock_database_call(config: &DemoConfig) -> i32 {
    simulate_database_call(config);
    config.result_value
}

#[cfg(test)]
mod tests {
    use super::*;
    use call_timer::{timeit_with_to, MemorySink, Timestamp};
    use std::time::Duration;

    fn quick_config() -> DemoConfig {
        DemoConfig {
            workload_delay_ms: 5,
            result_value: 10,
        }
    }

    #[test]
    fn test_workloads_block_for_configured_delay() {
        let config = quick_config();
        let start = Timestamp::now();

        mock_database_call(&config);
        another_mock_database_call(&config);
        let value = yet_another_mock_database_call(&config);

        assert_eq!(value, 10);
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn test_value_workload_through_wrapper() {
        let sink = MemorySink::new();
        let config = DemoConfig {
            workload_delay_ms: 5,
            result_value: 99,
        };

        let value = timeit_with_to(&sink, yet_another_mock_database_call, (&config,));

        assert_eq!(value, 99);
        assert!(sink.reported_millis()[0] >= 5);
    }
}
