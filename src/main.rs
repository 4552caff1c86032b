mod startup;

use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting meeting suggester");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json_output = startup::parse_args(&args)?;

    // Load configuration
    let config = startup::load_config()?;

    startup::run(config, json_output).await
}
