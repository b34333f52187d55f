mod api;
mod chat;
mod models;
mod pages;
mod utils;

use clap::Parser;
use colored::Colorize;
use eyre::Result;
use log::{debug, info};

use crate::api::{ApiClient, CandidateService, CompanyService, JobsService};
use crate::pages::{applications, candidate, company, interview, landing};
use crate::utils::cli::{Args, Command};
use crate::utils::config::{Config, config};
use crate::utils::log::Logger;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    info!(
        "starting recruitia {}",
        format!("v{}", env!("CARGO_PKG_VERSION")).magenta()
    );

    let config: Config = config(args.config, args.api_url)?;
    let client = ApiClient::new(&config.api)?;
    info!("using RecruitIA API at {}", client.base_url());

    let candidates = CandidateService::new(client.clone());
    let jobs = JobsService::new(client.clone());
    let companies = CompanyService::new(client);

    let command = args.command.unwrap_or(Command::Home);
    debug!("running {:?}", command);

    match command {
        Command::Home => landing::show(),
        Command::Jobs(filters) => candidate::run(&candidates, &jobs, &filters, &config).await?,
        Command::Apply { vacante, cv } => {
            interview::run(
                &candidates,
                &jobs,
                &vacante,
                cv,
                config.chat.question_delay(),
            )
            .await?
        }
        Command::Company => company::run(&companies).await?,
        Command::Applications { empresa } => applications::run(&companies, &empresa).await?,
    }

    Ok(())
}
