use crate::browse::{
    run_company, run_job, run_saved_list, run_saved_toggle, run_search, CompanyArgs, JobArgs,
    SavedListArgs, SavedToggleArgs, SearchArgs,
};
use crate::infra::{parse_date, parse_page_size};
use crate::server;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use ghostcheck::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ghostcheck",
    about = "Browse job listings with ghost-job risk scores, or serve them over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Filter listings and print one page of results
    Search(SearchArgs),
    /// Show a company profile with hiring metrics
    Company(CompanyArgs),
    /// Show a single listing
    Job(JobArgs),
    /// Inspect or change saved listings
    Saved {
        #[command(subcommand)]
        command: SavedCommand,
    },
}

#[derive(Subcommand, Debug)]
enum SavedCommand {
    /// List saved listings in save order
    List(SavedListArgs),
    /// Save a listing, or remove it if already saved
    Toggle(SavedToggleArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured page size
    #[arg(long, value_parser = parse_page_size)]
    pub(crate) page_size: Option<usize>,
    /// Company CSV export (requires --jobs-csv)
    #[arg(long, requires = "jobs_csv")]
    pub(crate) companies_csv: Option<PathBuf>,
    /// Job CSV export (requires --companies-csv)
    #[arg(long, requires = "companies_csv")]
    pub(crate) jobs_csv: Option<PathBuf>,
    /// Reference date for `Posted On` columns (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Search(args) => run_search(args),
        Command::Company(args) => run_company(args),
        Command::Job(args) => run_job(args),
        Command::Saved {
            command: SavedCommand::List(args),
        } => run_saved_list(args),
        Command::Saved {
            command: SavedCommand::Toggle(args),
        } => run_saved_toggle(args),
    }
}
