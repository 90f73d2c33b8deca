use call_timer::timeit;
use tracing::info;
use tracing_subscriber::EnvFilter;

use timing_practice::config::DemoConfig;
use timing_practice::workloads::{
    another_mock_database_call, mock_database_call, yet_another_mock_database_call,
};
use timing_practice::{NAME, VERSION};

const CONFIG_PATH: &str = "timing-practice.toml";

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout only carries the timing reports
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting {} v{}", NAME, VERSION);

    let config = DemoConfig::load_or_default(CONFIG_PATH)?;
    info!(delay_ms = config.workload_delay_ms, "Loaded demo configuration");

    // Method 1: a scope timer placed inside the function body
    mock_database_call(&config);

    // Method 2: wrap the call from the outside
    timeit!(another_mock_database_call, &config);
    let value = timeit!(yet_another_mock_database_call, &config);
    info!(value, "Value-returning call finished");

    Ok(())
}
