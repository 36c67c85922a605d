use clap::Parser;
use portfolio_lib::bootstrap::tracing::init_tracing_subscriber;
use portfolio_lib::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is the normal case.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing_subscriber(cli.verbose)?;

    let output = portfolio_lib::run(cli).await?;
    println!("{output}");
    Ok(())
}
