use colored::Colorize;
use eyre::Result;
use log::{debug, info, warn};

use super::{interview, shell};
use crate::api::{CandidateApi, ClientError, JobsApi};
use crate::models::job::{JobDetail, JobFilters, JobPage, JobSummary, salary_range};
use crate::utils::cli::JobFilterArgs;
use crate::utils::config::Config;
use crate::utils::prompt;
use crate::utils::toast::{self, Toast};

const LOAD_FAILED: &str = "No se pudieron cargar las vacantes";
const DETAIL_FAILED: &str = "No se pudo cargar la vacante";

impl From<&JobFilterArgs> for JobFilters {
    fn from(args: &JobFilterArgs) -> Self {
        Self {
            city: args.ciudad.clone(),
            role: args.cargo.clone(),
            modality: args.modalidad.clone(),
            limit: Some(args.limit),
            offset: Some(args.offset),
        }
    }
}

/// The published vacancy listing plus whichever vacancy is open.
pub struct JobBoard<'a, J> {
    jobs: &'a J,
    filters: JobFilters,
    page: Option<JobPage>,
    selected: Option<JobDetail>,
    toasts: Vec<Toast>,
}

impl<'a, J: JobsApi> JobBoard<'a, J> {
    pub fn new(jobs: &'a J, filters: JobFilters) -> Self {
        Self {
            jobs,
            filters,
            page: None,
            selected: None,
            toasts: Vec::new(),
        }
    }

    pub fn filters(&self) -> &JobFilters {
        &self.filters
    }

    pub fn page(&self) -> Option<&JobPage> {
        self.page.as_ref()
    }

    pub fn selected(&self) -> Option<&JobDetail> {
        self.selected.as_ref()
    }

    pub fn take_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    fn page_size(&self) -> u32 {
        self.filters.limit.filter(|limit| *limit > 0).unwrap_or(10)
    }

    /// Fetches the listing for the current filters. The previous page is kept
    /// when the call fails.
    pub async fn refresh(&mut self) -> bool {
        match self.jobs.published(&self.filters).await {
            Ok(page) => {
                info!("loaded {} of {} vacancies", page.jobs.len(), page.total);
                self.page = Some(page);
                true
            }
            Err(error) => {
                warn!("could not list vacancies: {}", error);
                self.notify_failure(&error, LOAD_FAILED);
                false
            }
        }
    }

    pub async fn next_page(&mut self) -> bool {
        if !self.page.as_ref().is_some_and(JobPage::has_next) {
            return false;
        }
        let offset = self.filters.offset.unwrap_or(0) + self.page_size();
        self.filters.offset = Some(offset);
        self.refresh().await
    }

    pub async fn previous_page(&mut self) -> bool {
        if !self.page.as_ref().is_some_and(JobPage::has_previous) {
            return false;
        }
        let offset = self.filters.offset.unwrap_or(0);
        self.filters.offset = Some(offset.saturating_sub(self.page_size()));
        self.refresh().await
    }

    /// Replaces the filters and starts again from the first page.
    pub async fn set_filters(&mut self, filters: JobFilters) -> bool {
        self.filters = JobFilters {
            offset: Some(0),
            limit: filters.limit.or(self.filters.limit),
            ..filters
        };
        self.refresh().await
    }

    /// Opens the vacancy at `index` on the current page (zero-based).
    pub async fn select(&mut self, index: usize) -> bool {
        let Some(vacancy_id) = self
            .page
            .as_ref()
            .and_then(|page| page.jobs.get(index))
            .map(|job| job.id.clone())
        else {
            return false;
        };
        debug!("opening vacancy {}", vacancy_id);

        match self.jobs.detail(&vacancy_id).await {
            Ok(detail) => {
                self.selected = Some(detail);
                true
            }
            Err(error) => {
                warn!("could not load vacancy {}: {}", vacancy_id, error);
                self.notify_failure(&error, DETAIL_FAILED);
                false
            }
        }
    }

    /// Back to the listing.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    fn notify_failure(&mut self, error: &ClientError, fallback: &str) {
        self.toasts
            .push(Toast::error(error.user_message().unwrap_or(fallback)));
    }
}

pub fn render_summary(position: usize, job: &JobSummary) -> String {
    let mut out = format!(
        "{} {}\n   {} · {} · {}\n   {} {}",
        format!("[{position}]").yellow(),
        job.title.bold(),
        job.company_name,
        job.city,
        job.modality,
        "💰".dimmed(),
        salary_range(job.salary_min, job.salary_max)
    );

    let skills: Vec<&str> = job.skills.iter().take(3).map(String::as_str).collect();
    if !skills.is_empty() {
        out.push_str(&format!("\n   ✓ {}", skills.join(", ")));
    }
    if let Some(published) = job.published_at.as_deref() {
        out.push_str(&format!("\n   {}", format!("Publicada: {published}").dimmed()));
    }
    out
}

pub fn render_page(page: &JobPage) -> String {
    if page.jobs.is_empty() {
        return "No hay vacantes publicadas con estos filtros.".yellow().to_string();
    }

    let mut out: Vec<String> = page
        .jobs
        .iter()
        .enumerate()
        .map(|(i, job)| render_summary(i + 1, job))
        .collect();
    out.push(
        format!(
            "Mostrando {}-{} de {}",
            page.offset + 1,
            page.offset + page.jobs.len() as u64,
            page.total
        )
        .dimmed()
        .to_string(),
    );
    out.join("\n\n")
}

pub fn render_detail(detail: &JobDetail) -> String {
    let vacancy = &detail.vacancy;
    let company = &detail.company;
    let mut out = format!(
        "{}\n{} • {}\n\n{}\n{}\n",
        vacancy.title.cyan().bold(),
        company.name,
        vacancy.city,
        "Sobre la vacante".bold(),
        vacancy.description
    );
    if !vacancy.role.is_empty() {
        out.push_str(&format!("{} {}\n", "Cargo:".bold(), vacancy.role));
    }

    if !vacancy.skills.is_empty() {
        out.push_str(&format!("\n{}\n", "Requisitos completos:".bold()));
        for skill in &vacancy.skills {
            out.push_str(&format!("  ✓ {skill}\n"));
        }
    }

    out.push_str(&format!(
        "\n{} {}\n{} {}\n{} {}\n",
        "Tipo de contrato:".bold(),
        vacancy.contract_type,
        "Modalidad:".bold(),
        vacancy.modality,
        "Rango salarial:".bold(),
        salary_range(vacancy.salary_min, vacancy.salary_max)
    ));
    if let (Some(min), Some(max)) = (vacancy.experience_min, vacancy.experience_max) {
        out.push_str(&format!("{} {min} a {max} años\n", "Experiencia:".bold()));
    }
    if let Some(openings) = vacancy.openings {
        out.push_str(&format!("{} {openings}\n", "Vacantes:".bold()));
    }
    if !vacancy.benefits.is_empty() {
        out.push_str(&format!("{} {}\n", "Beneficios:".bold(), vacancy.benefits.join(", ")));
    }
    for (label, date) in [
        ("Publicada:", &vacancy.published_at),
        ("Cierra:", &vacancy.closes_at),
    ] {
        if let Some(date) = date {
            out.push_str(&format!("{} {date}\n", label.bold()));
        }
    }

    out.push_str(&format!(
        "\n{}\n{} · {} · {}\n{}\n",
        "Sobre la empresa".bold(),
        company.industry,
        company.size,
        company.city,
        company.description
    ));
    out.push_str(&format!(
        "\n{} {}\n{} {}",
        "Preguntas de entrevista:".bold(),
        detail.questions.len(),
        "Aplicaciones recibidas:".bold(),
        detail.applications
    ));
    out
}

/// `recruitia jobs`: browse, open a vacancy, apply through the interview.
pub async fn run<C: CandidateApi, J: JobsApi>(
    candidates: &C,
    jobs: &J,
    args: &JobFilterArgs,
    config: &Config,
) -> Result<()> {
    println!("{}", shell::banner());
    println!(
        "{}",
        shell::heading(
            "Vacantes Disponibles",
            "Explora oportunidades laborales y postula con nuestro asistente inteligente que te guiará en el proceso."
        )
    );

    let mut board = JobBoard::new(jobs, JobFilters::from(args));
    board.refresh().await;
    toast::show(board.take_toasts());

    loop {
        if let Some(page) = board.page() {
            println!("\n{}\n", render_page(page));
        }

        let Some(choice) =
            prompt::ask("Número de vacante, [n]ext, [p]rev, [f]iltros, [r]ecargar o [q]uit")?
        else {
            break;
        };

        match choice.trim().to_lowercase().as_str() {
            "q" | "quit" | "salir" => break,
            "n" | "next" => {
                if !board.next_page().await {
                    println!("{}", "No hay más páginas.".yellow());
                }
            }
            "p" | "prev" => {
                if !board.previous_page().await {
                    println!("{}", "Ya estás en la primera página.".yellow());
                }
            }
            "r" => {
                board.refresh().await;
            }
            "f" => {
                let filters = ask_filters(board.filters())?;
                board.set_filters(filters).await;
            }
            other => match other.parse::<usize>() {
                Ok(position) if position > 0 => {
                    if !board.select(position - 1).await {
                        if board.page().is_none_or(|page| position > page.jobs.len()) {
                            println!("{}", "Esa vacante no está en esta página.".yellow());
                        }
                    } else if let Some(detail) = board.selected() {
                        println!("\n{}\n", render_detail(detail));
                        let vacancy_id = detail.vacancy.id.clone();
                        if prompt::confirm("¿Postular con el chatbot?")? {
                            interview::run(
                                candidates,
                                jobs,
                                &vacancy_id,
                                None,
                                config.chat.question_delay(),
                            )
                            .await?;
                        }
                        board.clear();
                    }
                }
                _ => println!("{}", "Opción no válida.".red()),
            },
        }

        toast::show(board.take_toasts());
    }

    println!("{}", shell::footer());
    Ok(())
}

fn ask_filters(current: &JobFilters) -> Result<JobFilters> {
    let ask = |label: &str, value: &Option<String>| -> Result<Option<String>> {
        let shown = value.as_deref().unwrap_or("");
        let answer = prompt::ask(&format!("{label} [{shown}]"))?.unwrap_or_default();
        Ok(match answer.trim() {
            "" => value.clone(),
            "-" => None,
            text => Some(text.to_string()),
        })
    };

    Ok(JobFilters {
        city: ask("Ciudad", &current.city)?,
        role: ask("Cargo", &current.role)?,
        modality: ask("Modalidad", &current.modality)?,
        limit: current.limit,
        offset: Some(0),
    })
}
