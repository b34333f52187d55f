use colored::Colorize;
use eyre::Result;
use log::info;

use super::shell;
use crate::api::CompanyApi;
use crate::models::company::CompanyApplication;
use crate::utils::toast::{self, Toast};

fn percent(value: Option<f64>, suffix: &str) -> String {
    value
        .map(|v| format!("{v}{suffix}"))
        .unwrap_or_else(|| "pendiente".to_string())
}

pub fn render(applications: &[CompanyApplication]) -> String {
    if applications.is_empty() {
        return "Aún no hay aplicaciones para esta empresa.".yellow().to_string();
    }

    applications
        .iter()
        .map(|application| {
            let mut line = format!(
                "{} {} {}\n   {} · puntuación {} · compatibilidad {} · {}",
                "•".cyan(),
                application.candidate_name.bold(),
                format!("({})", application.application_id).dimmed(),
                application.vacancy_title,
                percent(application.score, "/100"),
                percent(application.compatibility, "%"),
                application.status
            );
            if let Some(date) = application.applied_at.as_deref() {
                line.push_str(&format!("\n   {}", date.dimmed()));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `recruitia applications --empresa <id>`.
pub async fn run<A: CompanyApi>(api: &A, company_id: &str) -> Result<()> {
    println!("{}", shell::banner());
    println!(
        "{}",
        shell::heading("Aplicaciones recibidas", &format!("Empresa {company_id}"))
    );

    match api.applications(company_id).await {
        Ok(response) => {
            info!(
                "company {} has {} applications",
                company_id,
                response.applications.len()
            );
            println!("{}", render(&response.applications));
        }
        Err(error) => {
            let message = error
                .user_message()
                .unwrap_or("No se pudieron cargar las aplicaciones")
                .to_string();
            toast::show([Toast::error(message)]);
            return Err(error.into());
        }
    }

    println!("\n{}", shell::footer());
    Ok(())
}
