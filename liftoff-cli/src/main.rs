mod employees;
mod products;
mod sales;

use clap::{Parser, Subcommand};
use liftoff_core::{config, report, ApiClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "liftoff",
    about = "Administration client for the LiftOff sales backend"
)]
struct Cli {
    /// Backend base URL. Falls back to LIFTOFF_API_URL, then the compose-network default.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage employee records.
    #[command(subcommand)]
    Employees(employees::EmployeeCommand),
    /// Manage the product catalog.
    #[command(subcommand)]
    Products(products::ProductCommand),
    /// Manage sales records.
    #[command(subcommand)]
    Sales(sales::SaleCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let client = ApiClient::new(config::resolve_base_url(cli.base_url))?;

    let outcome = match cli.command {
        Commands::Employees(cmd) => employees::run(cmd, &client).await,
        Commands::Products(cmd) => products::run(cmd, &client).await,
        Commands::Sales(cmd) => sales::run(cmd, &client).await,
    };

    if let Err(err) = outcome {
        eprintln!("{}", report::describe(&err));
        std::process::exit(1);
    }
    Ok(())
}
