use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

use deals_config::CONFIG;

#[tokio::main]
async fn main() -> ExitCode {
    init_logger();
    match deals_app::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("deals stopped: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logger() {
    let subscriber = SubscriberBuilder::default()
        .with_env_filter(EnvFilter::new(CONFIG.logging.levels()))
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Setting default subscriber failed");
}
