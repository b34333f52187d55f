//! The company portal: register the company, describe the vacancy, review the
//! questions the backend suggests, publish.
//!
//! Going back never calls the API. Submitting the vacancy step again creates a
//! new vacancy; submitting an unchanged company step does not register the
//! company twice.

use std::fmt;

use colored::Colorize;
use eyre::Result;
use log::{debug, info, warn};

use super::shell;
use crate::api::{ClientError, CompanyApi};
use crate::models::company::{
    ApproveQuestionsRequest, CreateVacancyRequest, CreateVacancyResponse, QuestionApproval,
    RegisterCompanyRequest, SuggestedQuestion,
};
use crate::utils::prompt;
use crate::utils::toast::{self, Toast};

const REGISTER_FAILED: &str = "No se pudo registrar la empresa";
const CREATE_FAILED: &str = "No se pudo crear la vacante";
const PUBLISH_FAILED: &str = "No se pudo publicar la convocatoria";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Info,
    Job,
    Questions,
    Success,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Step::Info => "Info Empresa",
            Step::Job => "Vacante",
            Step::Questions => "Preguntas IA",
            Step::Success => "Publicada",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("El campo \"{0}\" es obligatorio")]
    MissingField(&'static str),
    #[error("El campo \"{0}\" debe ser un número entero")]
    NotANumber(&'static str),
    #[error("El mínimo de {0} no puede ser mayor que el máximo")]
    InvertedRange(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("not allowed on the {0} step")]
    WrongStep(Step),

    #[error(transparent)]
    Remote(#[from] ClientError),
}

fn required(fields: &[(&'static str, &str)]) -> Result<(), FormError> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((label, _)) => Err(FormError::MissingField(*label)),
        None => Ok(()),
    }
}

pub fn company_fields(form: &mut RegisterCompanyRequest) -> [(&'static str, &mut String); 7] {
    [
        ("Nombre de la empresa", &mut form.name),
        ("NIT", &mut form.tax_id),
        ("Industria", &mut form.industry),
        ("Tamaño de la empresa", &mut form.size),
        ("Descripción de la empresa", &mut form.description),
        ("Ciudad", &mut form.city),
        ("Email", &mut form.email),
    ]
}

fn validate_company(form: &RegisterCompanyRequest) -> Result<(), FormError> {
    required(&[
        ("Nombre de la empresa", &form.name),
        ("NIT", &form.tax_id),
        ("Industria", &form.industry),
        ("Tamaño de la empresa", &form.size),
        ("Descripción de la empresa", &form.description),
        ("Ciudad", &form.city),
        ("Email", &form.email),
    ])
}

/// The vacancy step as typed. Numbers stay text until submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobForm {
    pub title: String,
    pub description: String,
    pub role: String,
    pub contract_type: String,
    pub modality: String,
    /// Comma separated.
    pub skills: String,
    pub experience_min: String,
    pub experience_max: String,
    pub salary_min: String,
    pub salary_max: String,
    pub city: String,
}

impl JobForm {
    pub fn fields(&mut self) -> [(&'static str, &mut String); 11] {
        [
            ("Título del puesto", &mut self.title),
            ("Descripción del puesto", &mut self.description),
            ("Cargo", &mut self.role),
            ("Tipo de contrato", &mut self.contract_type),
            ("Modalidad", &mut self.modality),
            ("Habilidades (separadas por comas)", &mut self.skills),
            ("Experiencia mínima (años)", &mut self.experience_min),
            ("Experiencia máxima (años)", &mut self.experience_max),
            ("Salario mínimo", &mut self.salary_min),
            ("Salario máximo", &mut self.salary_max),
            ("Ciudad", &mut self.city),
        ]
    }

    pub fn skill_list(&self) -> Vec<String> {
        self.skills
            .split(',')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn to_request(&self, empresa_id: &str) -> Result<CreateVacancyRequest, FormError> {
        required(&[
            ("Título del puesto", &self.title),
            ("Descripción del puesto", &self.description),
            ("Cargo", &self.role),
            ("Tipo de contrato", &self.contract_type),
            ("Modalidad", &self.modality),
            ("Ciudad", &self.city),
        ])?;

        let skills = self.skill_list();
        if skills.is_empty() {
            return Err(FormError::MissingField("Habilidades"));
        }

        let (experience_min, experience_max) = bounds(
            "experiencia",
            ("Experiencia mínima", &self.experience_min),
            ("Experiencia máxima", &self.experience_max),
        )?;
        let (salary_min, salary_max) = bounds(
            "salario",
            ("Salario mínimo", &self.salary_min),
            ("Salario máximo", &self.salary_max),
        )?;

        Ok(CreateVacancyRequest {
            empresa_id: empresa_id.to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            role: self.role.trim().to_string(),
            contract_type: self.contract_type.trim().to_string(),
            modality: self.modality.trim().to_string(),
            skills,
            experience_min,
            experience_max,
            salary_min,
            salary_max,
            city: self.city.trim().to_string(),
        })
    }
}

fn bounds<T: std::str::FromStr + PartialOrd>(
    range: &'static str,
    min: (&'static str, &str),
    max: (&'static str, &str),
) -> Result<(T, T), FormError> {
    let parse = |(label, text): (&'static str, &str)| -> Result<T, FormError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(FormError::MissingField(label));
        }
        text.parse().map_err(|_| FormError::NotANumber(label))
    };

    let (min, max) = (parse(min)?, parse(max)?);
    if min > max {
        return Err(FormError::InvertedRange(range));
    }
    Ok((min, max))
}

/// What a publish call sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub vacante_id: String,
    pub approved: usize,
    pub rejected: usize,
    pub skipped: usize,
}

pub struct CompanyWizard<'a, A> {
    api: &'a A,
    step: Step,
    company: RegisterCompanyRequest,
    registered: Option<(RegisterCompanyRequest, String)>,
    job: JobForm,
    vacancy: Option<CreateVacancyResponse>,
    approvals: Vec<bool>,
    toasts: Vec<Toast>,
}

impl<'a, A: CompanyApi> CompanyWizard<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            step: Step::Info,
            company: RegisterCompanyRequest::default(),
            registered: None,
            job: JobForm::default(),
            vacancy: None,
            approvals: Vec::new(),
            toasts: Vec::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn company(&self) -> &RegisterCompanyRequest {
        &self.company
    }

    pub fn company_mut(&mut self) -> &mut RegisterCompanyRequest {
        &mut self.company
    }

    pub fn company_id(&self) -> Option<&str> {
        self.registered.as_ref().map(|(_, id)| id.as_str())
    }

    pub fn job(&self) -> &JobForm {
        &self.job
    }

    pub fn job_mut(&mut self) -> &mut JobForm {
        &mut self.job
    }

    pub fn vacancy(&self) -> Option<&CreateVacancyResponse> {
        self.vacancy.as_ref()
    }

    pub fn suggested(&self) -> &[SuggestedQuestion] {
        self.vacancy
            .as_ref()
            .map(|vacancy| vacancy.suggested_questions.as_slice())
            .unwrap_or_default()
    }

    pub fn approvals(&self) -> &[bool] {
        &self.approvals
    }

    pub fn take_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    fn ensure_step(&self, expected: Step) -> Result<(), WizardError> {
        if self.step != expected {
            return Err(WizardError::WrongStep(self.step));
        }
        Ok(())
    }

    fn reject(&mut self, error: FormError) -> WizardError {
        self.toasts.push(Toast::error(error.to_string()));
        error.into()
    }

    fn remote_failure(&mut self, error: ClientError, fallback: &str) -> WizardError {
        self.toasts
            .push(Toast::error(error.user_message().unwrap_or(fallback)));
        error.into()
    }

    pub async fn submit_company(&mut self) -> Result<(), WizardError> {
        self.ensure_step(Step::Info)?;
        if let Err(error) = validate_company(&self.company) {
            return Err(self.reject(error));
        }

        let unchanged = self
            .registered
            .as_ref()
            .is_some_and(|(form, _)| *form == self.company);
        if !unchanged {
            let response = match self.api.register(&self.company).await {
                Ok(response) => response,
                Err(error) => {
                    warn!("could not register {}: {}", self.company.name, error);
                    return Err(self.remote_failure(error, REGISTER_FAILED));
                }
            };
            info!(
                "company {} registered as {}: {}",
                self.company.name, response.empresa_id, response.message
            );
            self.registered = Some((self.company.clone(), response.empresa_id));
        } else {
            debug!("company unchanged, skipping registration");
        }

        self.toasts.push(Toast::info(
            "Información registrada",
            "La IA ha clasificado tu empresa exitosamente.",
        ));
        self.step = Step::Job;
        Ok(())
    }

    pub async fn submit_job(&mut self) -> Result<(), WizardError> {
        self.ensure_step(Step::Job)?;
        let company_id = self
            .company_id()
            .ok_or(WizardError::WrongStep(self.step))?
            .to_string();
        let request = match self.job.to_request(&company_id) {
            Ok(request) => request,
            Err(error) => return Err(self.reject(error)),
        };

        let response = match self.api.create_vacancy(&request).await {
            Ok(response) => response,
            Err(error) => {
                warn!("could not create vacancy {}: {}", request.title, error);
                return Err(self.remote_failure(error, CREATE_FAILED));
            }
        };

        info!(
            "vacancy {} created with {} suggested questions",
            response.vacante_id,
            response.suggested_questions.len()
        );
        self.approvals = vec![true; response.suggested_questions.len()];
        self.vacancy = Some(response);
        self.toasts.push(Toast::info(
            "Preguntas generadas",
            "La IA ha creado preguntas personalizadas para evaluar candidatos.",
        ));
        self.step = Step::Questions;
        Ok(())
    }

    /// Flips the approval of the question at `index`, returning the new value.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        if self.step != Step::Questions {
            return None;
        }
        let approved = self.approvals.get_mut(index)?;
        *approved = !*approved;
        Some(*approved)
    }

    /// The approve call for the current choices. Questions without an
    /// identifier cannot be approved and are left out.
    pub fn approval_request(&self) -> Option<(ApproveQuestionsRequest, usize)> {
        let vacancy = self.vacancy.as_ref()?;
        let mut skipped = 0;
        let approvals = vacancy
            .suggested_questions
            .iter()
            .zip(&self.approvals)
            .filter_map(|(question, approved)| match &question.question_id {
                Some(id) => Some(QuestionApproval {
                    question_id: id.clone(),
                    approved: *approved,
                }),
                None => {
                    skipped += 1;
                    None
                }
            })
            .collect();

        Some((
            ApproveQuestionsRequest {
                vacante_id: vacancy.vacante_id.clone(),
                approvals,
            },
            skipped,
        ))
    }

    pub async fn publish(&mut self) -> Result<Published, WizardError> {
        self.ensure_step(Step::Questions)?;
        let (request, skipped) = self
            .approval_request()
            .ok_or(WizardError::WrongStep(self.step))?;

        let response = match self.api.approve_questions(&request).await {
            Ok(response) => response,
            Err(error) => {
                warn!("could not publish vacancy {}: {}", request.vacante_id, error);
                return Err(self.remote_failure(error, PUBLISH_FAILED));
            }
        };
        debug!("vacancy {} approved: {}", response.vacante_id, response.message);

        let approved = request.approvals.iter().filter(|a| a.approved).count();
        let published = Published {
            vacante_id: request.vacante_id,
            approved,
            rejected: request.approvals.len() - approved,
            skipped,
        };
        info!("vacancy {} published", published.vacante_id);

        if skipped > 0 {
            self.toasts.push(Toast::info(
                "Preguntas omitidas",
                format!("{skipped} preguntas sin identificador no se pudieron aprobar."),
            ));
        }
        self.toasts.push(Toast::info(
            "¡Convocatoria publicada!",
            "Tu vacante está ahora disponible para candidatos.",
        ));
        self.step = Step::Success;
        Ok(published)
    }

    /// One step back, without calling the API.
    pub fn back(&mut self) -> bool {
        self.step = match self.step {
            Step::Job => Step::Info,
            Step::Questions => Step::Job,
            Step::Info | Step::Success => return false,
        };
        true
    }

    /// Starts over for another vacancy, keeping nothing.
    pub fn restart(&mut self) {
        *self = Self::new(self.api);
    }
}

fn progress(step: Step) -> String {
    [Step::Info, Step::Job, Step::Questions]
        .iter()
        .map(|s| {
            if *s == step {
                s.to_string().cyan().bold().to_string()
            } else {
                s.to_string().dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" → ")
}

fn render_questions(questions: &[SuggestedQuestion], approvals: &[bool]) -> String {
    questions
        .iter()
        .zip(approvals)
        .enumerate()
        .map(|(i, (question, approved))| {
            let mark = match (question.question_id.is_some(), approved) {
                (false, _) => "[-]".dimmed(),
                (true, true) => "[x]".green(),
                (true, false) => "[ ]".red(),
            };
            let kind = question
                .kind
                .as_deref()
                .map(|kind| format!(" ({kind})").dimmed().to_string())
                .unwrap_or_default();
            format!("{mark} Pregunta {}{kind}\n    {}", i + 1, question.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `recruitia company`: the wizard in the terminal.
pub async fn run<A: CompanyApi>(api: &A) -> Result<()> {
    println!("{}", shell::banner());
    println!(
        "{}",
        shell::heading(
            "Portal de Empresas",
            "Encuentra el talento perfecto con ayuda de inteligencia artificial"
        )
    );

    let mut wizard = CompanyWizard::new(api);
    loop {
        if wizard.step() != Step::Success {
            println!("\n{}\n", progress(wizard.step()));
        }

        match wizard.step() {
            Step::Info => {
                println!("{}", "Información de la Empresa".bold());
                for (label, field) in company_fields(wizard.company_mut()) {
                    if !prompt::edit(label, field)? {
                        return Ok(());
                    }
                }
                if let Err(error) = wizard.submit_company().await {
                    debug!("company step failed: {}", error);
                    toast::show(wizard.take_toasts());
                    if !prompt::confirm("¿Intentar de nuevo?")? {
                        return Ok(());
                    }
                }
            }
            Step::Job => {
                println!("{}", "Detalles de la Vacante".bold());
                for (label, field) in wizard.job_mut().fields() {
                    if !prompt::edit(label, field)? {
                        return Ok(());
                    }
                }
                let Some(choice) = prompt::ask("[g]enerar preguntas con IA, [a]trás o [q]uit")?
                else {
                    return Ok(());
                };
                match choice.trim().to_lowercase().as_str() {
                    "a" => {
                        wizard.back();
                    }
                    "q" => return Ok(()),
                    _ => {
                        println!("{}", "Generando preguntas...".dimmed());
                        if let Err(error) = wizard.submit_job().await {
                            debug!("job step failed: {}", error);
                        }
                    }
                }
            }
            Step::Questions => {
                println!("{}", "Preguntas Generadas por IA".bold());
                println!("{}\n", render_questions(wizard.suggested(), wizard.approvals()));
                let Some(choice) =
                    prompt::ask("Número para aprobar/rechazar, [p]ublicar, [a]trás o [q]uit")?
                else {
                    return Ok(());
                };
                match choice.trim().to_lowercase().as_str() {
                    "p" => match wizard.publish().await {
                        Ok(published) => println!(
                            "{}",
                            format!(
                                "{} aprobadas, {} rechazadas, {} omitidas",
                                published.approved, published.rejected, published.skipped
                            )
                            .dimmed()
                        ),
                        Err(error) => debug!("publish failed: {}", error),
                    },
                    "a" => {
                        wizard.back();
                    }
                    "q" => return Ok(()),
                    other => match other.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
                        Some(index) if wizard.toggle(index).is_some() => {}
                        _ => println!("{}", "Opción no válida.".red()),
                    },
                }
            }
            Step::Success => {
                println!(
                    "\n{}\nTu vacante para {} está ahora disponible para candidatos. Recibirás notificaciones cuando empiecen a postular.\n",
                    "¡Convocatoria Publicada!".green().bold(),
                    wizard.job().title.bold()
                );
                if let Some(vacancy) = wizard.vacancy() {
                    println!(
                        "{}",
                        format!(
                            "Empresa: {} · Vacante: {} · Consulta las aplicaciones con `recruitia applications --empresa {}`",
                            wizard.company().name,
                            vacancy.vacante_id,
                            wizard.company_id().unwrap_or_default()
                        )
                        .dimmed()
                    );
                }
                if !prompt::confirm("¿Publicar otra vacante?")? {
                    break;
                }
                wizard.restart();
            }
        }

        toast::show(wizard.take_toasts());
    }

    toast::show(wizard.take_toasts());
    println!("{}", shell::footer());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::api::ApiError;
    use crate::models::company::{
        ApplicationsResponse, ApproveQuestionsResponse, RegisterCompanyResponse,
    };

    #[derive(Default)]
    struct FakeCompany {
        registrations: Mutex<Vec<RegisterCompanyRequest>>,
        vacancies: Mutex<Vec<CreateVacancyRequest>>,
        approvals: Mutex<Vec<ApproveQuestionsRequest>>,
        fail_register: bool,
    }

    impl CompanyApi for FakeCompany {
        async fn register(
            &self,
            request: &RegisterCompanyRequest,
        ) -> Result<RegisterCompanyResponse, ClientError> {
            if self.fail_register {
                return Err(ApiError::new(409, "El NIT ya está registrado").into());
            }
            let mut registrations = self.registrations.lock().unwrap();
            registrations.push(request.clone());
            Ok(RegisterCompanyResponse {
                empresa_id: format!("e{}", registrations.len()),
                message: "Empresa registrada".into(),
            })
        }

        async fn create_vacancy(
            &self,
            request: &CreateVacancyRequest,
        ) -> Result<CreateVacancyResponse, ClientError> {
            let mut vacancies = self.vacancies.lock().unwrap();
            vacancies.push(request.clone());
            Ok(CreateVacancyResponse {
                vacante_id: format!("v{}", vacancies.len()),
                suggested_questions: vec![
                    SuggestedQuestion {
                        question_id: Some("p1".into()),
                        text: "¿Experiencia con React?".into(),
                        kind: Some("tecnica".into()),
                    },
                    SuggestedQuestion {
                        question_id: None,
                        text: "¿Por qué nosotros?".into(),
                        kind: None,
                    },
                    SuggestedQuestion {
                        question_id: Some("p3".into()),
                        text: "Describe un proyecto difícil".into(),
                        kind: Some("comportamental".into()),
                    },
                ],
            })
        }

        async fn approve_questions(
            &self,
            request: &ApproveQuestionsRequest,
        ) -> Result<ApproveQuestionsResponse, ClientError> {
            self.approvals.lock().unwrap().push(request.clone());
            Ok(ApproveQuestionsResponse {
                message: "Vacante publicada".into(),
                vacante_id: request.vacante_id.clone(),
            })
        }

        async fn applications(
            &self,
            _company_id: &str,
        ) -> Result<ApplicationsResponse, ClientError> {
            Ok(ApplicationsResponse {
                applications: Vec::new(),
            })
        }
    }

    fn fill_company(form: &mut RegisterCompanyRequest) {
        for (label, field) in company_fields(form) {
            *field = format!("valor {label}");
        }
        form.email = "rh@tech.co".into();
    }

    fn job_form() -> JobForm {
        JobForm {
            title: "Desarrollador Full Stack Senior".into(),
            description: "Construir el portal".into(),
            role: "Desarrollador".into(),
            contract_type: "Tiempo completo".into(),
            modality: "remoto".into(),
            skills: "React, Node.js, , TypeScript".into(),
            experience_min: "3".into(),
            experience_max: "5".into(),
            salary_min: "2000".into(),
            salary_max: "3000".into(),
            city: "Bogotá".into(),
        }
    }

    #[test]
    fn job_form_builds_the_vacancy() {
        let request = job_form().to_request("e1").unwrap();
        assert_eq!(request.empresa_id, "e1");
        assert_eq!(request.skills, vec!["React", "Node.js", "TypeScript"]);
        assert_eq!((request.experience_min, request.experience_max), (3, 5));
        assert_eq!((request.salary_min, request.salary_max), (2000, 3000));
    }

    #[test]
    fn job_form_rejects_bad_bounds() {
        let mut form = job_form();
        form.experience_min = "6".into();
        assert_eq!(
            form.to_request("e1"),
            Err(FormError::InvertedRange("experiencia"))
        );

        let mut form = job_form();
        form.salary_max = "mucho".into();
        assert_eq!(
            form.to_request("e1"),
            Err(FormError::NotANumber("Salario máximo"))
        );

        let mut form = job_form();
        form.skills = " , ".into();
        assert_eq!(
            form.to_request("e1"),
            Err(FormError::MissingField("Habilidades"))
        );
    }

    #[tokio::test]
    async fn wizard_walks_every_step() {
        let api = FakeCompany::default();
        let mut wizard = CompanyWizard::new(&api);
        fill_company(wizard.company_mut());

        wizard.submit_company().await.unwrap();
        assert_eq!(wizard.step(), Step::Job);
        assert_eq!(wizard.company_id(), Some("e1"));
        assert_eq!(wizard.take_toasts()[0].title, "Información registrada");

        *wizard.job_mut() = job_form();
        wizard.submit_job().await.unwrap();
        assert_eq!(wizard.step(), Step::Questions);
        assert_eq!(wizard.approvals(), [true, true, true]);
        assert_eq!(wizard.take_toasts()[0].title, "Preguntas generadas");
        assert_eq!(api.vacancies.lock().unwrap()[0].empresa_id, "e1");

        assert_eq!(wizard.toggle(2), Some(false));
        assert_eq!(wizard.toggle(9), None);

        let published = wizard.publish().await.unwrap();
        assert_eq!(
            published,
            Published {
                vacante_id: "v1".into(),
                approved: 1,
                rejected: 1,
                skipped: 1,
            }
        );
        assert_eq!(wizard.step(), Step::Success);

        let sent = api.approvals.lock().unwrap()[0].clone();
        assert_eq!(
            sent.approvals,
            vec![
                QuestionApproval { question_id: "p1".into(), approved: true },
                QuestionApproval { question_id: "p3".into(), approved: false },
            ]
        );
        let titles: Vec<String> = wizard.take_toasts().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, ["Preguntas omitidas", "¡Convocatoria publicada!"]);

        wizard.restart();
        assert_eq!(wizard.step(), Step::Info);
        assert!(wizard.company().name.is_empty());
        assert!(wizard.vacancy().is_none());
    }

    #[tokio::test]
    async fn going_back_makes_no_calls() {
        let api = FakeCompany::default();
        let mut wizard = CompanyWizard::new(&api);
        fill_company(wizard.company_mut());
        wizard.submit_company().await.unwrap();
        *wizard.job_mut() = job_form();
        wizard.submit_job().await.unwrap();

        assert!(wizard.back());
        assert_eq!(wizard.step(), Step::Job);
        assert!(wizard.back());
        assert_eq!(wizard.step(), Step::Info);
        assert!(!wizard.back());

        wizard.submit_company().await.unwrap();
        assert_eq!(api.registrations.lock().unwrap().len(), 1);

        wizard.submit_job().await.unwrap();
        assert_eq!(api.vacancies.lock().unwrap().len(), 2);
        assert_eq!(wizard.vacancy().unwrap().vacante_id, "v2");
    }

    #[tokio::test]
    async fn invalid_forms_never_reach_the_api() {
        let api = FakeCompany::default();
        let mut wizard = CompanyWizard::new(&api);

        let error = wizard.submit_company().await.unwrap_err();
        assert!(matches!(
            error,
            WizardError::Form(FormError::MissingField("Nombre de la empresa"))
        ));
        assert!(wizard.take_toasts()[0].is_error());
        assert!(api.registrations.lock().unwrap().is_empty());

        let early = wizard.publish().await.unwrap_err();
        assert!(matches!(early, WizardError::WrongStep(Step::Info)));
    }

    #[tokio::test]
    async fn registration_failure_stays_on_info() {
        let api = FakeCompany {
            fail_register: true,
            ..Default::default()
        };
        let mut wizard = CompanyWizard::new(&api);
        fill_company(wizard.company_mut());

        let error = wizard.submit_company().await.unwrap_err();
        assert!(matches!(error, WizardError::Remote(_)));
        assert_eq!(wizard.step(), Step::Info);
        assert_eq!(wizard.take_toasts()[0].description, "El NIT ya está registrado");
    }
}
