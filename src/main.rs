use anyhow::Result;
use clap::Parser;
use tower_planner::cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let env = env_logger::Env::default().default_filter_or(cli.log_level.as_str());
    env_logger::Builder::from_env(env).init();

    cli::run(cli).map(|_| ())
}
