use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "recruitia")]
#[command(about = "Browse RecruitIA vacancies, apply through the interview assistant, or publish a vacancy", long_about = None)]
pub struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config.toml", global = true)]
    pub config: PathBuf,

    /// Origin of the RecruitIA API (overrides RECRUITIA_API_URL and the config file)
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Sets the logger's verbosity level
    #[arg(
        short,
        long,
        value_name = "VERBOSITY",
        default_value_t = LevelFilter::Warn,
        global = true
    )]
    pub verbosity: LevelFilter,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the landing page
    Home,

    /// Browse published vacancies and apply to one of them
    Jobs(JobFilterArgs),

    /// Start the interview assistant for a known vacancy
    Apply {
        /// Vacancy identifier
        #[arg(long, value_name = "ID")]
        vacante: String,

        /// CV to attach (PDF)
        #[arg(long, value_name = "FILE")]
        cv: Option<PathBuf>,
    },

    /// Register a company and publish a vacancy
    Company,

    /// List the applications a company has received
    Applications {
        /// Company identifier
        #[arg(long, value_name = "ID")]
        empresa: String,
    },
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct JobFilterArgs {
    /// Only vacancies in this city
    #[arg(long)]
    pub ciudad: Option<String>,

    /// Only vacancies for this role
    #[arg(long)]
    pub cargo: Option<String>,

    /// Only vacancies with this modality (remoto, presencial, híbrido)
    #[arg(long)]
    pub modalidad: Option<String>,

    /// Page size
    #[arg(long, default_value_t = 10)]
    pub limit: u32,

    /// Number of vacancies to skip
    #[arg(long, default_value_t = 0)]
    pub offset: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_landing_page() {
        let args = Args::try_parse_from(["recruitia"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.config, PathBuf::from("config.toml"));
        assert_eq!(args.verbosity, LevelFilter::Warn);
    }

    #[test]
    fn parses_job_filters_and_global_flags() {
        let args = Args::try_parse_from([
            "recruitia",
            "jobs",
            "--ciudad",
            "Bogotá",
            "--limit",
            "5",
            "--api-url",
            "http://api.local",
        ])
        .unwrap();

        assert_eq!(args.api_url.as_deref(), Some("http://api.local"));
        match args.command {
            Some(Command::Jobs(filters)) => {
                assert_eq!(filters.ciudad.as_deref(), Some("Bogotá"));
                assert_eq!(filters.limit, 5);
                assert_eq!(filters.offset, 0);
                assert!(filters.cargo.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn apply_requires_a_vacancy() {
        assert!(Args::try_parse_from(["recruitia", "apply"]).is_err());
        let args = Args::try_parse_from(["recruitia", "apply", "--vacante", "v-1"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Command::Apply { ref vacante, cv: None }) if vacante == "v-1"
        ));
    }
}
