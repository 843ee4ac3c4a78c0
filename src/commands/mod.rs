pub mod init;
pub mod migrations;
pub mod serve;
pub mod tasks;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Run the task API server")]
    Serve(serve::ServeArgs),
    #[command(about = "List tasks stored in the SQLite database")]
    Tasks(tasks::TasksArgs),
    #[command(about = "Inspect and apply database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::Tasks(args) => tasks::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
