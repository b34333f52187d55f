//! The application and interview flow for one vacancy.
//!
//! A candidate fills in the profile form and attaches a CV, the backend
//! answers with the interview questions, the candidate answers them one by
//! one, and the last answer sends everything for scoring:
//!
//! ```text
//! Form --submit_profile--> Questions --submit_answer (last)--> Complete
//! ```
//!
//! Every transition takes `&mut self` and checks the phase and the loading
//! flag before any request is sent, so at most one request is in flight per
//! chatbot. Failed steps leave the phase where it was and raise a
//! notification; nothing is retried automatically.

use std::fmt;
use std::time::Duration;

use log::{debug, info, warn};

use super::draft::{ApplicationDraft, ValidationError};
use super::message::{Message, Role, Transcript};
use super::session::InterviewSession;
use crate::api::{CandidateApi, ClientError, JobsApi};
use crate::models::candidate::{AnswersResponse, CvDocument};
use crate::models::job::JobDetail;
use crate::utils::toast::Toast;

const PROFILE_RECEIVED: &str = "¡Perfecto! He analizado tu CV. Ahora me gustaría hacerte algunas preguntas para conocerte mejor.";
const LOAD_FAILED: &str = "No se pudo cargar la vacante";
const APPLY_FAILED: &str = "No se pudo enviar la aplicación";
const ANSWER_FAILED: &str = "No se pudo enviar la respuesta";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Form,
    Questions,
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Form => "form",
            Phase::Questions => "questions",
            Phase::Complete => "complete",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("a request is already in flight")]
    Busy,

    #[error("not allowed during the {0} phase")]
    WrongPhase(Phase),

    #[error("the interview still has open questions")]
    Unanswered,

    #[error(transparent)]
    Remote(#[from] ClientError),
}

fn greeting(title: &str) -> String {
    format!(
        "¡Hola! Estoy aquí para ayudarte con tu postulación para {title}. Por favor completa el formulario para comenzar."
    )
}

fn closing(outcome: &AnswersResponse) -> String {
    format!(
        "¡Muchas gracias por completar la entrevista! Tu postulación ha sido registrada exitosamente con una puntuación de {}/100 y {}% de compatibilidad. El equipo de recursos humanos revisará tu perfil y se pondrá en contacto contigo pronto. ¡Mucha suerte! 🎉",
        outcome.score, outcome.compatibility
    )
}

pub struct Chatbot<'a, C, J> {
    candidates: &'a C,
    jobs: &'a J,
    vacancy_id: String,
    detail: Option<JobDetail>,
    transcript: Transcript<'a>,
    phase: Phase,
    loading: bool,
    draft: ApplicationDraft,
    session: Option<InterviewSession>,
    outcome: Option<AnswersResponse>,
    input: String,
    question_delay: Duration,
    toasts: Vec<Toast>,
}

impl<'a, C: CandidateApi, J: JobsApi> Chatbot<'a, C, J> {
    /// Loads the vacancy and greets the candidate. A vacancy that cannot be
    /// loaded is reported as a notification; the form stays usable.
    pub async fn mount(
        candidates: &'a C,
        jobs: &'a J,
        vacancy_id: impl Into<String>,
        question_delay: Duration,
    ) -> Self {
        let mut chatbot = Self {
            candidates,
            jobs,
            vacancy_id: vacancy_id.into(),
            detail: None,
            transcript: Transcript::new(),
            phase: Phase::Form,
            loading: false,
            draft: ApplicationDraft::default(),
            session: None,
            outcome: None,
            input: String::new(),
            question_delay,
            toasts: Vec::new(),
        };
        chatbot.load_vacancy().await;
        chatbot
    }

    async fn load_vacancy(&mut self) {
        match self.jobs.detail(&self.vacancy_id).await {
            Ok(detail) => {
                self.transcript.push(Role::Bot, greeting(&detail.vacancy.title));
                self.detail = Some(detail);
            }
            Err(error) => {
                warn!("could not load vacancy {}: {}", self.vacancy_id, error);
                self.notify_failure(&error, LOAD_FAILED);
            }
        }
    }

    pub fn detail(&self) -> Option<&JobDetail> {
        self.detail.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn messages(&self) -> &[Message] {
        self.transcript.messages()
    }

    pub fn session(&self) -> Option<&InterviewSession> {
        self.session.as_ref()
    }

    pub fn outcome(&self) -> Option<&AnswersResponse> {
        self.outcome.as_ref()
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ApplicationDraft {
        &mut self.draft
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Notifications raised since the last call.
    pub fn take_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    /// Runs `listener` for every message appended from now on.
    pub fn on_message(&mut self, listener: impl FnMut(&Message) + 'a) {
        self.transcript.listen(listener);
    }

    /// Attaches the CV if its declared type is PDF. A rejected file leaves the
    /// previous attachment in place.
    pub fn attach_cv(&mut self, document: CvDocument) -> Result<(), ValidationError> {
        if !document.is_pdf() {
            debug!(
                "rejected {} declared as {}",
                document.file_name, document.content_type
            );
            self.toasts.push(Toast::error(ValidationError::NotPdf.to_string()));
            return Err(ValidationError::NotPdf);
        }

        self.toasts
            .push(Toast::info("CV seleccionado", document.file_name.clone()));
        self.draft.cv = Some(document);
        Ok(())
    }

    /// Sends the profile and CV. On success the interview starts with the
    /// first question after the presentation delay. An accepted profile with
    /// no questions is scored right away; if that call fails the result is
    /// still `Ok` and [`Chatbot::resend_answers`] retries it.
    pub async fn submit_profile(&mut self) -> Result<(), FlowError> {
        self.ensure_phase(Phase::Form)?;

        let request = match self.draft.to_request(&self.vacancy_id) {
            Ok(request) => request,
            Err(error) => {
                self.toasts.push(Toast::error(error.to_string()));
                return Err(error.into());
            }
        };

        self.loading = true;
        let result = self.candidates.apply(&request).await;
        self.loading = false;

        let response = match result {
            Ok(response) => response,
            Err(error) => {
                warn!("application for vacancy {} failed: {}", self.vacancy_id, error);
                self.notify_failure(&error, APPLY_FAILED);
                return Err(error.into());
            }
        };

        info!(
            "application {} accepted with {} questions",
            response.application_id,
            response.questions.len()
        );
        debug!("candidate id {:?}", response.candidate_id);
        self.session = Some(InterviewSession::new(
            response.application_id,
            response.questions,
        ));
        self.transcript.push(Role::Bot, PROFILE_RECEIVED);
        self.phase = Phase::Questions;

        if !self.question_delay.is_zero() {
            tokio::time::sleep(self.question_delay).await;
        }

        let first = self
            .session
            .as_ref()
            .and_then(|session| session.current())
            .map(|question| question.text.clone());
        match first {
            Some(text) => {
                self.transcript.push(Role::Bot, text);
                Ok(())
            }
            None => {
                info!("vacancy {} has no interview questions", self.vacancy_id);
                if let Err(error) = self.finalize(None).await {
                    debug!("scoring left pending: {}", error);
                }
                Ok(())
            }
        }
    }

    /// True once every question has an answer but scoring has not gone
    /// through yet.
    pub fn awaiting_scoring(&self) -> bool {
        self.phase == Phase::Questions
            && self
                .session
                .as_ref()
                .is_some_and(|session| session.current().is_none())
    }

    /// Sends the recorded answers again after a failed scoring call on an
    /// interview with no questions left to ask.
    pub async fn resend_answers(&mut self) -> Result<(), FlowError> {
        self.ensure_phase(Phase::Questions)?;
        if !self.awaiting_scoring() {
            return Err(FlowError::Unanswered);
        }
        self.finalize(None).await
    }

    /// Answers the current question with whatever is in the input buffer.
    pub async fn send(&mut self) -> Result<(), FlowError> {
        let text = self.input.clone();
        self.submit_answer(&text).await
    }

    /// Records `text` for the current question, then either asks the next one
    /// or, after the last, sends every answer for scoring.
    pub async fn submit_answer(&mut self, text: &str) -> Result<(), FlowError> {
        self.ensure_phase(Phase::Questions)?;
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyAnswer.into());
        }

        let session = self
            .session
            .as_mut()
            .ok_or(FlowError::WrongPhase(self.phase))?;
        session.record(text);
        let next = session.advance().map(|question| question.text.clone());

        self.transcript.push(Role::User, text);
        self.input.clear();

        match next {
            Some(question) => {
                self.transcript.push(Role::Bot, question);
                Ok(())
            }
            None => self.finalize(Some(text)).await,
        }
    }

    async fn finalize(&mut self, typed: Option<&str>) -> Result<(), FlowError> {
        let request = self
            .session
            .as_ref()
            .map(|session| session.answers_request(typed))
            .ok_or(FlowError::WrongPhase(self.phase))?;

        self.loading = true;
        let result = self.candidates.submit_answers(&request).await;
        self.loading = false;

        match result {
            Ok(outcome) => {
                info!(
                    "application {} scored {} ({}% compatible)",
                    request.application_id, outcome.score, outcome.compatibility
                );
                self.transcript.push(Role::Bot, closing(&outcome));
                self.toasts.push(Toast::info(
                    "¡Postulación enviada!",
                    format!("Puntuación: {}/100", outcome.score),
                ));
                self.outcome = Some(outcome);
                self.phase = Phase::Complete;
                Ok(())
            }
            Err(error) => {
                warn!(
                    "answers for application {} were not accepted: {}",
                    request.application_id, error
                );
                self.notify_failure(&error, ANSWER_FAILED);
                Err(error.into())
            }
        }
    }

    fn ensure_phase(&self, expected: Phase) -> Result<(), FlowError> {
        if self.loading {
            return Err(FlowError::Busy);
        }
        if self.phase != expected {
            return Err(FlowError::WrongPhase(self.phase));
        }
        Ok(())
    }

    fn notify_failure(&mut self, error: &ClientError, fallback: &str) {
        debug!("request failed with status {:?}", error.status());
        let message = error.user_message().unwrap_or(fallback);
        self.toasts.push(Toast::error(message));
    }
}
