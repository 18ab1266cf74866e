use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "somnia", about = "Sleep-efficiency self-assessment service")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the somnia server
    Serve(commands::serve::ServeArgs),
    /// Seed the question catalog
    Seed(commands::seed::SeedArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "somnia=info,info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Serve(args) => commands::serve::run(args).await,
        Commands::Seed(args) => commands::seed::run(args),
    }
}
